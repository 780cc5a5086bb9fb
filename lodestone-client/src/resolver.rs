//! Cascading record resolution
//!
//! Resolves a human-supplied display name to a stored record id by trying
//! successively looser match strategies against the record store, stopping at
//! the first non-empty result. The escalation order is a deliberate
//! cost/precision trade-off: exact equality is cheap and precise, token
//! containment recovers reordered partial names, and fuzzy ranking is the
//! most forgiving fallback.

use tracing::{debug, info};

use lodestone_core::domain::record::Resolution;
use lodestone_core::dto::query::MatchQuery;

use crate::error::Result;
use crate::traits::RecordStore;

/// Match field used when none is configured
const DEFAULT_MATCH_FIELD: &str = "title";

/// Resolves display names to record ids by escalating match strategies
///
/// # Example
/// ```no_run
/// use lodestone_client::{CascadingResolver, LodestoneClient, Resolution};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = LodestoneClient::new("http://localhost:8080");
/// let resolver = CascadingResolver::new(client.collection("Movie"));
///
/// match resolver.resolve("Rogue One").await? {
///     Resolution::Found(id) => println!("found {}", id),
///     Resolution::NotFound => println!("no such movie"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct CascadingResolver<S> {
    store: S,
    field: String,
}

impl<S: RecordStore> CascadingResolver<S> {
    /// Create a resolver matching against the default `title` field
    pub fn new(store: S) -> Self {
        Self {
            store,
            field: DEFAULT_MATCH_FIELD.to_string(),
        }
    }

    /// Match against a different record field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// The ordered strategy sequence for `name`, loosest last
    fn strategies(&self, name: &str) -> [MatchQuery; 3] {
        [
            MatchQuery::exact_equal(&self.field, name),
            MatchQuery::contains_all_tokens(&self.field, name),
            MatchQuery::fuzzy_rank(name),
        ]
    }

    /// Resolve `name` to a record id
    ///
    /// Issues each strategy with a limit of one result and short-circuits on
    /// the first hit; a later strategy runs only when the one before it found
    /// nothing. Store errors propagate unchanged — there is no retry here.
    ///
    /// # Arguments
    /// * `name` - Display name of the target record, used as given
    ///
    /// # Returns
    /// `Resolution::Found` with the matched id, or `Resolution::NotFound`
    /// when every strategy came up empty
    pub async fn resolve(&self, name: &str) -> Result<Resolution> {
        let strategies = self.strategies(name);

        for (attempt, query) in strategies.iter().enumerate() {
            if attempt == 0 {
                debug!("Looking up '{}' via {}", name, query.describe());
            } else {
                info!(
                    "'{}' not found via {}, trying {}",
                    name,
                    strategies[attempt - 1].describe(),
                    query.describe()
                );
            }

            let hits = self.store.find(query, 1).await?;

            if let Some(hit) = hits.first() {
                info!("Resolved '{}' to {} via {}", name, hit.id, query.describe());
                return Ok(Resolution::Found(hit.id));
            }
        }

        info!("No record matching '{}' under any strategy", name);
        Ok(Resolution::NotFound)
    }
}
