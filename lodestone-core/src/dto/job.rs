//! Job status DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;

/// Envelope returned by the job-status endpoint
///
/// The service nests the snapshot under a `status` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: JobStatus,
}
