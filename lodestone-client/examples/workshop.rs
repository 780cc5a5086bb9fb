//! Workshop walkthrough
//!
//! Resolves a movie title to its record id, then optionally awaits a job.
//!
//! ```text
//! export LODESTONE_URL=https://demo.lodestone.example
//! export LODESTONE_API_KEY=...            # if the cluster is authenticated
//! cargo run --example workshop -- "Rogue One" [JOB_HANDLE]
//! ```

use std::time::Duration;

use anyhow::Result;
use lodestone_client::{
    CascadingResolver, Config, JobHandle, JobPoller, LodestoneClient, Resolution,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let client = LodestoneClient::from_config(&config);

    let title = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Rogue One".to_string());

    let resolver = CascadingResolver::new(client.collection("Movie"));
    match resolver.resolve(&title).await? {
        Resolution::Found(id) => println!("'{}' resolved to record {}", title, id),
        Resolution::NotFound => println!("'{}' or similar not found in the collection", title),
    }

    if let Some(handle) = std::env::args().nth(2) {
        let outcome = JobPoller::new()
            .with_interval(Duration::from_secs(10))
            .await_completion(&client, &JobHandle::from(handle))
            .await?;
        println!(
            "job reached '{}' in {:.2} seconds",
            outcome.status.state, outcome.total_secs
        );
    }

    Ok(())
}
