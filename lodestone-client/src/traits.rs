//! Collaborator seams for the hosted service
//!
//! The resolver and poller never talk HTTP directly; they consume these
//! traits. The notebooks hand them an already-authenticated client (or a test
//! double), which keeps each matching policy and the poll loop independently
//! testable.

use async_trait::async_trait;

use lodestone_core::domain::job::{JobHandle, JobStatus};
use lodestone_core::domain::record::RecordHit;
use lodestone_core::dto::query::MatchQuery;

use crate::error::Result;

/// A queryable record store, already scoped to one collection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Run one match query, returning at most `limit` hits
    ///
    /// Ranked lookups return hits ordered best-first. An empty vector is a
    /// legitimate answer, not an error.
    async fn find(&self, query: &MatchQuery, limit: usize) -> Result<Vec<RecordHit>>;
}

/// A source of job status snapshots
///
/// Fetches must be idempotent: polling a job has no side effects on it.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch a fresh status snapshot for `job`
    async fn fetch_status(&self, job: &JobHandle) -> Result<JobStatus>;
}
