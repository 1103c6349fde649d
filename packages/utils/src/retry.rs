//! Bounded polling and broadcast retries.

use std::future::Future;
use std::time::{Duration, Instant};

use futures_timer::Delay;

/// Tendermint's `ErrWrongSequence` code.
pub const SEQUENCE_MISMATCH_CODE: u32 = 32;

/// How long and how often to poll. Durations are written the way
/// `humantime` prints them, e.g. `"4m"`, `"1h 30m"` or `"500ms"`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Give up once this much time has passed since the first poll.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Delay after the first unsuccessful poll.
    #[serde(with = "humantime_serde")]
    pub initial_interval: Duration,
    /// Upper bound for the delay between polls.
    #[serde(with = "humantime_serde")]
    pub max_interval: Duration,
    /// Growth factor of the delay. Values below `1.0` are treated as `1.0`.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(240),
            initial_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// The delay that follows `interval`.
    #[must_use]
    pub fn next_interval(&self, interval: Duration) -> Duration {
        Duration::try_from_secs_f64(interval.as_secs_f64() * self.multiplier.max(1.0))
            .unwrap_or(self.max_interval)
            .min(self.max_interval)
    }
}

/// Errors returned by [`wait_for`] and [`wait_for_change`].
#[derive(thiserror::Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum WaitError {
    /// The condition did not hold before the timeout.
    #[error("timed out waiting for {description} after {attempts} attempts ({elapsed:?})")]
    Timeout {
        /// What was being waited for
        description: String,
        /// Number of polls made
        attempts: u32,
        /// Time spent
        elapsed: Duration,
    },

    /// A poll failed.
    #[error(transparent)]
    Poll(#[from] anyhow::Error),
}

/// Polls `poll` until it yields `Some`, backing off between attempts as
/// `policy` prescribes. The first poll happens immediately.
///
/// # Errors
/// Returns [`WaitError::Poll`] as soon as a poll fails and
/// [`WaitError::Timeout`] once `policy.timeout` has elapsed.
pub async fn wait_for<T, F, Fut>(
    description: &str,
    policy: &RetryPolicy,
    mut poll: F,
) -> Result<T, WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    let start = Instant::now();
    let mut interval = policy.initial_interval.min(policy.max_interval);
    let mut attempts = 0u32;

    loop {
        attempts = attempts.saturating_add(1);
        if let Some(value) = poll().await? {
            tracing::debug!(description, attempts, "condition met");
            return Ok(value);
        }

        let elapsed = start.elapsed();
        let Some(remaining) = policy.timeout.checked_sub(elapsed).filter(|r| !r.is_zero()) else {
            return Err(WaitError::Timeout {
                description: description.to_string(),
                attempts,
                elapsed,
            });
        };

        let delay = interval.min(remaining);
        tracing::debug!(
            description,
            attempts,
            "condition not met, retrying in {}",
            humantime::format_duration(delay)
        );
        Delay::new(delay).await;
        interval = policy.next_interval(interval);
    }
}

/// Waits until `read` returns something other than `initial`, e.g. a
/// balance after a transfer or a block height.
///
/// # Errors
/// See [`wait_for`].
pub async fn wait_for_change<T, F, Fut>(
    description: &str,
    policy: &RetryPolicy,
    initial: T,
    mut read: F,
) -> Result<T, WaitError>
where
    T: PartialEq,
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let initial = &initial;
    wait_for(description, policy, move || {
        let next = read();
        async move {
            let value = next.await?;
            Ok((value != *initial).then_some(value))
        }
    })
    .await
}

/// The parts of a broadcast result the harness inspects.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct TxResponse {
    /// ABCI result code, `0` on success
    pub code: u32,
    /// Raw log, carries the failure reason
    #[serde(default)]
    pub raw_log: String,
    /// Transaction hash
    #[serde(default)]
    pub txhash: String,
}

impl TxResponse {
    /// Whether the broadcast was rejected because the signer's sequence was
    /// stale.
    #[must_use]
    pub fn is_sequence_mismatch(&self) -> bool {
        self.code == SEQUENCE_MISMATCH_CODE && self.raw_log.contains("account sequence mismatch")
    }
}

/// Runs `broadcast` up to `max_attempts` times (at least once), retrying
/// only while it fails with an account sequence mismatch. The last response
/// is returned whether or not it succeeded.
///
/// # Errors
/// Returns the first error `broadcast` itself returns.
pub async fn retry_on_sequence_mismatch<F, Fut>(
    max_attempts: u32,
    mut broadcast: F,
) -> anyhow::Result<TxResponse>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<TxResponse>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        let rsp = broadcast().await?;
        if !rsp.is_sequence_mismatch() || attempt >= max_attempts {
            return Ok(rsp);
        }
        tracing::debug!(attempt, raw_log = %rsp.raw_log, "sequence mismatch, rebroadcasting");
        attempt += 1;
    }
}
