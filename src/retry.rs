use std::time::Duration;

use crate::FitClubError;

/// Per-failure-kind retry eligibility switches.
///
/// The defaults reproduce the service's historical client behavior: every
/// transient-looking failure is retried, including 4xx responses and
/// undecodable bodies. Retrying a client error rarely changes the outcome;
/// [`RetryPolicy::strict`] turns those switches off for callers who want the
/// corrected policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Retry attempts that exceeded the per-attempt timeout.
    pub retry_on_timeout: bool,
    /// Retry connection and request execution failures.
    pub retry_on_transport: bool,
    /// Retry 4xx responses.
    pub retry_on_client_error: bool,
    /// Retry 5xx responses.
    pub retry_on_server_error: bool,
    /// Retry responses whose body could not be parsed as JSON.
    pub retry_on_decode: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_on_timeout: true,
            retry_on_transport: true,
            retry_on_client_error: true,
            retry_on_server_error: true,
            retry_on_decode: true,
        }
    }
}

impl RetryPolicy {
    /// Policy that only retries failures a second attempt can plausibly fix.
    pub fn strict() -> Self {
        Self {
            retry_on_client_error: false,
            retry_on_decode: false,
            ..Self::default()
        }
    }

    /// Returns whether another attempt is permitted for this failure.
    ///
    /// Service-level errors and request construction errors are terminal
    /// regardless of configuration.
    pub fn is_retryable(&self, error: &FitClubError) -> bool {
        match error {
            FitClubError::Timeout { .. } => self.retry_on_timeout,
            FitClubError::Transport(_) => self.retry_on_transport,
            FitClubError::Http { status, .. } if *status >= 500 => self.retry_on_server_error,
            FitClubError::Http { .. } => self.retry_on_client_error,
            FitClubError::Decode(_) => self.retry_on_decode,
            FitClubError::Service { .. } | FitClubError::InvalidRequest(_) => false,
        }
    }
}

/// Delay inserted before attempt `attempt + 1`.
///
/// Linear in the attempt number: `base_ms`, `2 * base_ms`, `3 * base_ms`, ...
pub(crate) fn backoff_delay(base_ms: u64, attempt: usize) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(attempt as u64))
}
