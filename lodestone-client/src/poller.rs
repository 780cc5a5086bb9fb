//! Job status polling
//!
//! Awaits the completion of a long-running job by fetching fresh status
//! snapshots until the job leaves the running state, reporting elapsed time
//! on every tick and the total runtime once the job settles.

use std::time::Duration;

use tracing::{debug, info};

use lodestone_core::domain::job::{JobHandle, PollOutcome};

use crate::clock::{Clock, SystemClock};
use crate::error::{ClientError, Result};
use crate::traits::StatusSource;

/// Wait between status fetches when none is configured
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Awaits the completion of long-running jobs
///
/// Without a deadline the wait is unbounded: the loop runs until the service
/// reports a non-running state or a fetch fails. The clock is injected so
/// tests can drive the loop on simulated time.
///
/// # Example
/// ```no_run
/// use lodestone_client::{JobHandle, JobPoller, LodestoneClient};
/// use std::time::Duration;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = LodestoneClient::new("http://localhost:8080");
///
/// let outcome = JobPoller::new()
///     .with_interval(Duration::from_secs(5))
///     .with_deadline(Duration::from_secs(600))
///     .await_completion(&client, &JobHandle::from("agent-workflow-17"))
///     .await?;
///
/// println!("{}: {:.2} seconds", outcome.status.state, outcome.total_secs);
/// # Ok(())
/// # }
/// ```
pub struct JobPoller<C = SystemClock> {
    interval: Duration,
    deadline: Option<Duration>,
    clock: C,
}

impl JobPoller<SystemClock> {
    /// Create a poller with the default interval, no deadline, and the
    /// system clock
    pub fn new() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            deadline: None,
            clock: SystemClock,
        }
    }
}

impl Default for JobPoller<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> JobPoller<C> {
    /// Change the wait between status fetches
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Bound the total wall-clock wait
    ///
    /// Once waiting reaches the deadline the poll fails with
    /// [`ClientError::DeadlineExceeded`]. A terminal fetch always wins over
    /// an expired deadline: the bound is checked only before sleeping.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Substitute the time source
    pub fn with_clock<D: Clock>(self, clock: D) -> JobPoller<D> {
        JobPoller {
            interval: self.interval,
            deadline: self.deadline,
            clock,
        }
    }

    /// Block until `job` leaves the running state
    ///
    /// Each tick fetches a fresh snapshot. While the job is running, the
    /// elapsed time since its start is logged and the task suspends for the
    /// configured interval; the instant a fetch reports a non-running state
    /// the loop exits without sleeping again. Fetch errors propagate
    /// unchanged — every tick assumes the fetch either succeeds or the whole
    /// operation fails.
    ///
    /// # Arguments
    /// * `source` - Where status snapshots come from
    /// * `job` - The handle of the job to await
    ///
    /// # Returns
    /// The terminal snapshot paired with the resolved total runtime: the
    /// service-computed duration when present, otherwise
    /// `(end_time or now) - start_time`
    pub async fn await_completion<S: StatusSource>(
        &self,
        source: &S,
        job: &JobHandle,
    ) -> Result<PollOutcome> {
        let poll_started = self.clock.now();
        debug!("Polling job {} every {:?}", job, self.interval);

        let status = loop {
            let status = source.fetch_status(job).await?;

            if status.state.is_terminal() {
                break status;
            }

            let now = self.clock.now();
            info!(
                "Waiting for job {}... elapsed {:.2} seconds",
                job,
                status.elapsed_secs(now)
            );

            if let Some(deadline) = self.deadline {
                let waited = (now - poll_started).to_std().unwrap_or_default();
                if waited >= deadline {
                    return Err(ClientError::DeadlineExceeded {
                        waited_secs: waited.as_secs_f64(),
                    });
                }
            }

            self.clock.sleep(self.interval).await;
        };

        let total_secs = status.resolved_total_secs(self.clock.now());
        let payload = serde_json::to_string(&status).unwrap_or_else(|_| format!("{:?}", status));
        info!(
            "Job {} reached state '{}' in {:.2} seconds: {}",
            job, status.state, total_secs, payload
        );

        Ok(PollOutcome { status, total_secs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use lodestone_core::domain::job::{JobState, JobStatus};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::error::ClientError;

    const START: &str = "2024-01-01 00:00:00";

    fn snapshot(state: &str) -> JobStatus {
        JobStatus {
            state: JobState::from(state.to_string()),
            start_time: lodestone_core::timestamp::parse_utc(START).unwrap(),
            end_time: None,
            total_duration: None,
        }
    }

    /// Clock double: sleeping advances virtual time and records the request
    struct MockClock {
        now: Mutex<DateTime<Utc>>,
        sleeps: Mutex<Vec<Duration>>,
    }

    impl MockClock {
        fn at(now: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(now),
                sleeps: Mutex::new(Vec::new()),
            }
        }

        fn sleeps(&self) -> Vec<Duration> {
            self.sleeps.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Clock for &MockClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }

        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
            let mut now = self.now.lock().unwrap();
            *now = *now + chrono::Duration::from_std(duration).unwrap();
        }
    }

    /// Status double replaying a scripted snapshot sequence
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<JobStatus>>>,
        fetches: Mutex<usize>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<JobStatus>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                fetches: Mutex::new(0),
            }
        }

        fn fetches(&self) -> usize {
            *self.fetches.lock().unwrap()
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch_status(&self, _job: &JobHandle) -> Result<JobStatus> {
            *self.fetches.lock().unwrap() += 1;
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("status fetched more often than scripted")
        }
    }

    fn poller(clock: &MockClock) -> JobPoller<&MockClock> {
        JobPoller::new().with_clock(clock)
    }

    #[tokio::test]
    async fn test_polls_until_terminal_sleeping_between_fetches() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let source = ScriptedSource::new(vec![
            Ok(snapshot("running")),
            Ok(snapshot("running")),
            Ok(snapshot("completed")),
        ]);

        let outcome = poller(&clock)
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await
            .unwrap();

        assert!(outcome.status.state.is_terminal());
        assert_eq!(source.fetches(), 3);
        // One sleep after each running tick, none after the terminal fetch
        assert_eq!(clock.sleeps(), vec![DEFAULT_POLL_INTERVAL; 2]);
    }

    #[tokio::test]
    async fn test_terminal_on_first_fetch_never_sleeps() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 5).unwrap());
        let source = ScriptedSource::new(vec![Ok(snapshot("failed"))]);

        let outcome = poller(&clock)
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await
            .unwrap();

        assert_eq!(outcome.status.state, JobState::Failed);
        assert_eq!(source.fetches(), 1);
        assert!(clock.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_total_computed_from_now_without_end_time() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 30).unwrap());
        let source = ScriptedSource::new(vec![Ok(snapshot("completed"))]);

        let outcome = poller(&clock)
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await
            .unwrap();

        assert_eq!(outcome.total_secs, 30.0);
    }

    #[tokio::test]
    async fn test_service_duration_reported_verbatim() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 30).unwrap());
        let mut terminal = snapshot("completed");
        terminal.total_duration = Some(42.5);
        let source = ScriptedSource::new(vec![Ok(terminal)]);

        let outcome = poller(&clock)
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await
            .unwrap();

        assert_eq!(outcome.total_secs, 42.5);
    }

    #[tokio::test]
    async fn test_fetch_errors_propagate_unchanged() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let source = ScriptedSource::new(vec![
            Ok(snapshot("running")),
            Err(ClientError::api_error(500, "internal error")),
        ]);

        let err = poller(&clock)
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 500, .. }));
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn test_deadline_bounds_the_wait() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let source = ScriptedSource::new(vec![
            Ok(snapshot("running")),
            Ok(snapshot("running")),
            Ok(snapshot("running")),
        ]);

        let err = poller(&clock)
            .with_deadline(Duration::from_secs(15))
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await
            .unwrap_err();

        // Ticks at 0s and 10s slept; the 20s tick crossed the 15s bound
        assert!(matches!(err, ClientError::DeadlineExceeded { .. }));
        assert_eq!(source.fetches(), 3);
        assert_eq!(clock.sleeps().len(), 2);
    }

    #[tokio::test]
    async fn test_terminal_fetch_wins_over_expired_deadline() {
        let clock = MockClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let source = ScriptedSource::new(vec![
            Ok(snapshot("running")),
            Ok(snapshot("completed")),
        ]);

        let outcome = poller(&clock)
            .with_deadline(Duration::from_secs(5))
            .await_completion(&source, &JobHandle::from("wf-1"))
            .await;

        // The second fetch was terminal, so the expired bound never fired
        assert!(outcome.is_ok());
    }
}
