//! Bounded retry with linear backoff for upstream fetches
//!
//! Only transport-level failures are retried. Protocol violations (a
//! reachable server answering with the wrong shape) are detected after the
//! fetch succeeds and never re-enter this loop.

use jokehub_application::SourceError;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Retry budget for one upstream call
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Delay before retry k is `k * base_delay`
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// A transient transport failure, eligible for retry
#[derive(Error, Debug)]
#[error("{0}")]
pub(crate) struct Transient(pub String);

/// Run `op` until it succeeds or the retry budget is exhausted
///
/// No delay precedes the first attempt; attempt `k` failing transiently is
/// followed by a `k * base_delay` sleep before the next one.
pub(crate) async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    source: &str,
    mut op: F,
) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Transient>>,
{
    for attempt in 1..=policy.max_attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(Transient(reason)) => {
                warn!(source, attempt, %reason, "Fetch attempt failed");
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.base_delay * attempt).await;
                }
            }
        }
    }

    Err(SourceError::ExhaustedRetries {
        source: source.to_string(),
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_first_try_without_sleeping() {
        let start = Instant::now();
        let result = with_retry(&fast_policy(), "test", || async { Ok::<_, Transient>(7) })
            .await
            .unwrap();
        assert_eq!(result, 7);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_after_transient_failures() {
        let calls = Cell::new(0u32);
        let result = with_retry(&fast_policy(), "test", || {
            let attempt = calls.get() + 1;
            calls.set(attempt);
            async move {
                if attempt < 3 {
                    Err(Transient("connection reset".to_string()))
                } else {
                    Ok("joke")
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(result, "joke");
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_after_exactly_max_attempts() {
        let calls = Cell::new(0u32);
        let err = with_retry(&fast_policy(), "Chuck Norris API", || {
            calls.set(calls.get() + 1);
            async { Err::<(), _>(Transient("timeout".to_string())) }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        assert!(matches!(
            err,
            SourceError::ExhaustedRetries { attempts: 3, ref source } if source == "Chuck Norris API"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_grows_linearly() {
        // Three failing attempts sleep 1s then 2s; no sleep after the last.
        let start = Instant::now();
        let _ = with_retry(&fast_policy(), "test", || async {
            Err::<(), _>(Transient("down".to_string()))
        })
        .await;
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }
}
