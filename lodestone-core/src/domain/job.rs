//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Opaque handle for a long-running job on the hosted service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle(String);

impl JobHandle {
    /// Create a handle from any string-like id
    pub fn new(id: impl Into<String>) -> Self {
        JobHandle(id.into())
    }

    /// The raw handle string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobHandle {
    fn from(id: String) -> Self {
        JobHandle(id)
    }
}

impl From<&str> for JobHandle {
    fn from(id: &str) -> Self {
        JobHandle(id.to_string())
    }
}

/// Job lifecycle state as reported by the service
///
/// Anything other than `running` is terminal. States this client does not
/// know about are carried through untouched as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Running,
    Completed,
    Failed,
    Other(String),
}

impl JobState {
    /// Whether the job is still running
    pub fn is_running(&self) -> bool {
        matches!(self, JobState::Running)
    }

    /// Whether polling should stop
    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    /// The wire spelling of this state
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Running => "running",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
            JobState::Other(state) => state,
        }
    }
}

impl From<String> for JobState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "running" => JobState::Running,
            "completed" => JobState::Completed,
            "failed" => JobState::Failed,
            _ => JobState::Other(state),
        }
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        state.as_str().to_string()
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point-in-time job status snapshot
///
/// Fetched fresh on every poll tick, never cached. Timestamps arrive in the
/// naive wire format and are normalized to UTC during deserialization (see
/// [`crate::timestamp`]); `total_duration` is in seconds, precomputed by the
/// service when available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    pub state: JobState,
    #[serde(with = "timestamp::wire")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp::wire_opt", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
}

impl JobStatus {
    /// Seconds elapsed since the job started, measured against `now`
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> f64 {
        (now - self.start_time).num_milliseconds() as f64 / 1000.0
    }

    /// Total runtime in seconds
    ///
    /// The service-computed `total_duration` is authoritative when present.
    /// Otherwise the runtime is derived as `(end_time or now) - start_time`.
    pub fn resolved_total_secs(&self, now: DateTime<Utc>) -> f64 {
        match self.total_duration {
            Some(total) => total,
            None => {
                let end = self.end_time.unwrap_or(now);
                (end - self.start_time).num_milliseconds() as f64 / 1000.0
            }
        }
    }
}

/// Final result of awaiting a job: the terminal snapshot plus its resolved
/// total runtime in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOutcome {
    pub status: JobStatus,
    pub total_secs: f64,
}
