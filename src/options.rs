use crate::RetryPolicy;

/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempt budget for one logical call, including the first attempt.
    ///
    /// A value of 0 is treated as 1.
    pub max_attempts: usize,
    /// Linear backoff base in milliseconds; the delay before attempt `n + 1`
    /// is `backoff_base_ms * n`.
    pub backoff_base_ms: u64,
    /// Which failure kinds are eligible for another attempt.
    pub retry: RetryPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            max_attempts: 3,
            backoff_base_ms: 1_000,
            retry: RetryPolicy::default(),
        }
    }
}
