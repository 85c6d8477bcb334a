//! Shared HTTP agent, retry loop and bounded body reads for outbound calls.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry settings for network operations.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RetryConfig {
    /// Maximum number of attempts, including the first try.
    pub max_attempts: usize,
    /// First backoff delay; doubles on every further backoff.
    pub base_delay: Duration,
    pub max_delay: Duration,
}

/// What to do after a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RetryAction {
    /// Give up and return the error.
    Stop,
    /// Try again right away.
    Immediately,
    /// Sleep for the exponential backoff delay, then try again.
    Backoff,
}

/// Shared agent. Per-request deadlines are set by the caller.
pub(crate) fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .build()
    })
}

/// Run `action` until it succeeds, `classify` says stop, or attempts run out.
pub(crate) fn retry_with_backoff<T, E, F, C>(
    config: RetryConfig,
    mut action: F,
    mut classify: C,
) -> Result<T, E>
where
    F: FnMut(usize) -> Result<T, E>,
    C: FnMut(&E) -> RetryAction,
{
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        let err = match action(attempt) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if attempt >= config.max_attempts {
            return Err(err);
        }
        match classify(&err) {
            RetryAction::Stop => return Err(err),
            RetryAction::Immediately => {}
            RetryAction::Backoff => {
                std::thread::sleep(backoff_delay(config.base_delay, config.max_delay, attempt));
            }
        }
    }
}

/// Read a response into memory, rejecting bodies over `max_bytes`.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    if let Some(length) = response
        .header("Content-Length")
        .and_then(|value| value.parse::<u64>().ok())
    {
        if length > max_bytes as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Response too large: {length} bytes"),
            ));
        }
    }
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

fn backoff_delay(base: Duration, max: Duration, attempt: usize) -> Duration {
    let exponent = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
    let factor = 1u32.checked_shl(exponent).unwrap_or(u32::MAX);
    base.checked_mul(factor).unwrap_or(max).min(max)
}
