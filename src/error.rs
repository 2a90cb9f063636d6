/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum FitClubError {
    /// An attempt did not complete within the configured per-attempt timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout budget the attempt exceeded, in milliseconds.
        timeout_ms: u64,
    },
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status} {}: {body}", status_text(.status))]
    Http { status: u16, body: String },
    /// Response decoding or payload-shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
    /// Well-formed error envelope returned by the FitClub service.
    #[error("service error: {message}")]
    Service {
        /// Error message text from the upstream API.
        message: String,
        /// Optional service-specific error code.
        code: Option<String>,
    },
    /// The request could not be built; raised before any attempt is made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

fn status_text(status: &u16) -> &'static str {
    reqwest::StatusCode::from_u16(*status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}
