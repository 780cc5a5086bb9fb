//! Job status endpoints

use async_trait::async_trait;

use lodestone_core::domain::job::{JobHandle, JobStatus};
use lodestone_core::dto::job::StatusResponse;

use crate::LodestoneClient;
use crate::error::Result;
use crate::traits::StatusSource;

impl LodestoneClient {
    /// Fetch a fresh status snapshot for a job
    ///
    /// Safe to call repeatedly; polling has no side effects on the job.
    ///
    /// # Arguments
    /// * `job` - The handle of the job to inspect
    ///
    /// # Returns
    /// The current status snapshot
    pub async fn get_status(&self, job: &JobHandle) -> Result<JobStatus> {
        let url = format!("{}/v1/jobs/{}/status", self.base_url(), job);
        let response = self.get(&url).send().await?;

        let body: StatusResponse = self.handle_response(response).await?;
        Ok(body.status)
    }
}

#[async_trait]
impl StatusSource for LodestoneClient {
    async fn fetch_status(&self, job: &JobHandle) -> Result<JobStatus> {
        self.get_status(job).await
    }
}
