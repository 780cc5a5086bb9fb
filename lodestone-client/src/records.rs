//! Record query endpoints

use async_trait::async_trait;

use lodestone_core::domain::record::RecordHit;
use lodestone_core::dto::query::{MatchQuery, QueryRequest, QueryResponse};

use crate::LodestoneClient;
use crate::error::Result;
use crate::traits::RecordStore;

impl LodestoneClient {
    /// Scope this client to a named collection
    ///
    /// # Arguments
    /// * `name` - The collection holding the records to query
    ///
    /// # Example
    /// ```
    /// use lodestone_client::LodestoneClient;
    ///
    /// let client = LodestoneClient::new("http://localhost:8080");
    /// let movies = client.collection("Movie");
    /// ```
    pub fn collection(&self, name: impl Into<String>) -> CollectionClient {
        CollectionClient {
            client: self.clone(),
            name: name.into(),
        }
    }
}

/// Handle to one collection on the hosted service
///
/// Implements [`RecordStore`], so it can be handed straight to the
/// [`CascadingResolver`](crate::resolver::CascadingResolver).
#[derive(Debug, Clone)]
pub struct CollectionClient {
    client: LodestoneClient,
    name: String,
}

impl CollectionClient {
    /// The collection this handle is scoped to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run one match query against this collection
    ///
    /// # Arguments
    /// * `query` - The match query to run
    /// * `limit` - Maximum number of hits to return
    ///
    /// # Returns
    /// The matching hits, best-first for ranked queries
    pub async fn search(&self, query: &MatchQuery, limit: usize) -> Result<Vec<RecordHit>> {
        let url = format!(
            "{}/v1/collections/{}/query",
            self.client.base_url(),
            self.name
        );
        let request = QueryRequest {
            query: query.clone(),
            limit,
        };
        let response = self.client.post(&url).json(&request).send().await?;

        let body: QueryResponse = self.client.handle_response(response).await?;
        Ok(body.hits)
    }
}

#[async_trait]
impl RecordStore for CollectionClient {
    async fn find(&self, query: &MatchQuery, limit: usize) -> Result<Vec<RecordHit>> {
        self.search(query, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_handle_keeps_name() {
        let client = LodestoneClient::new("http://localhost:8080");
        let movies = client.collection("Movie");
        assert_eq!(movies.name(), "Movie");
    }
}
