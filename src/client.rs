use std::time::Duration;

use reqwest::header::HeaderMap;
use serde_json::Value as JsonValue;

// tokio::time::sleep is only available on non-WASM targets.
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

use crate::{
    decode,
    retry::backoff_delay,
    ClassSession, ClientOptions, FitClubError, Lead, LeadReceipt, MembershipPlan, RequestOptions,
    Result, StatusRenderer, Trainer,
};

/// Joins the fixed base URL with a relative endpoint path.
///
/// Example: `("https://api.fitclub.example/", "/classes")` →
/// `"https://api.fitclub.example/classes"`
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String> {
    let relative = path.trim().trim_start_matches('/');
    if relative.is_empty() {
        return Err(FitClubError::InvalidRequest(
            "endpoint path cannot be empty".to_owned(),
        ));
    }
    if relative.chars().any(char::is_whitespace) {
        return Err(FitClubError::InvalidRequest(format!(
            "endpoint path '{path}' contains whitespace"
        )));
    }
    Ok(format!("{}/{relative}", base_url.trim_end_matches('/')))
}

/// HTTP client for the FitClub platform API.
///
/// Holds only fixed configuration; calls share nothing mutable, so one client
/// can serve any number of concurrent calls. Construct it once and hand clones
/// to whichever component needs it.
#[derive(Clone, Debug)]
pub struct FitClubClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl FitClubClient {
    /// Creates a client for the given API base URL with default options.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from the `FITCLUB_BASE_URL` environment variable.
    ///
    /// Returns an error if the variable is missing or empty.
    ///
    /// **Not available on `wasm32` targets** — environment variables do not
    /// exist in browser runtimes. Use [`FitClubClient::new`] and receive the
    /// base URL from the embedding JavaScript instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fitclub_http::FitClubClient;
    ///
    /// let club = FitClubClient::from_env().expect("missing FITCLUB_BASE_URL");
    /// ```
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> std::result::Result<Self, String> {
        let base_url = std::env::var("FITCLUB_BASE_URL")
            .map_err(|_| "missing FITCLUB_BASE_URL environment variable".to_owned())?;
        if base_url.trim().is_empty() {
            return Err("FITCLUB_BASE_URL is set but empty".to_owned());
        }
        Ok(Self::new(base_url))
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Fetches the weekly class schedule.
    pub async fn class_schedule(&self) -> Result<Vec<ClassSession>> {
        let value = self.call("classes", RequestOptions::get()).await?;
        decode::decode_class_schedule(value)
    }

    /// Fetches the trainer roster.
    pub async fn trainers(&self) -> Result<Vec<Trainer>> {
        let value = self.call("trainers", RequestOptions::get()).await?;
        decode::decode_trainers(value)
    }

    /// Fetches the membership plans on offer.
    pub async fn membership_plans(&self) -> Result<Vec<MembershipPlan>> {
        let value = self.call("plans", RequestOptions::get()).await?;
        decode::decode_membership_plans(value)
    }

    /// Submits a contact-form lead.
    ///
    /// The lead is validated before the first attempt; an empty name or a
    /// malformed address fails fast as [`FitClubError::InvalidRequest`].
    pub async fn submit_lead(&self, lead: &Lead) -> Result<LeadReceipt> {
        let payload = decode::build_lead_payload(lead)?;
        let value = self.call("contact", RequestOptions::post(payload)).await?;
        decode::decode_lead_receipt(value)
    }

    /// Performs one logical call against `base_url + path` and returns the
    /// parsed JSON body verbatim.
    ///
    /// Attempts are strictly sequential and bounded by
    /// [`ClientOptions::max_attempts`]; each attempt is cancelled if it
    /// exceeds [`ClientOptions::timeout_ms`], and retry-eligible failures
    /// (per [`ClientOptions::retry`]) wait `backoff_base_ms * attempt` before
    /// the next attempt. The error surfaced after the budget is exhausted is
    /// the last attempt's error, not an aggregate.
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<JsonValue> {
        let url = endpoint_url(&self.base_url, path)?;
        let headers = options.header_map()?;
        let max_attempts = self.options.max_attempts.max(1);
        let mut attempt = 1usize;

        loop {
            match self.attempt_once(&url, &options, headers.clone()).await {
                Ok(value) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("attempt {} for {} succeeded", attempt, url);
                    return Ok(value);
                }
                Err(error) => {
                    if attempt < max_attempts && self.options.retry.is_retryable(&error) {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("attempt {} failed, retrying: {}", attempt, error);
                        self.wait_before_retry(attempt).await;
                        attempt += 1;
                        continue;
                    }
                    #[cfg(feature = "tracing")]
                    tracing::warn!("attempt {} failed, giving up: {}", attempt, error);
                    return Err(error);
                }
            }
        }
    }

    /// Runs a call while driving a renderer through its state transitions:
    /// `loading`, then `success` or `error`.
    pub async fn call_rendered<R: StatusRenderer>(
        &self,
        path: &str,
        options: RequestOptions,
        renderer: &mut R,
    ) -> Result<JsonValue> {
        renderer.loading();
        match self.call(path, options).await {
            Ok(value) => {
                renderer.success(&value);
                Ok(value)
            }
            Err(error) => {
                renderer.error(&error);
                Err(error)
            }
        }
    }

    async fn attempt_once(
        &self,
        url: &str,
        options: &RequestOptions,
        headers: HeaderMap,
    ) -> Result<JsonValue> {
        // Build the request. On WASM, reqwest uses AbortController for
        // timeout; the `.timeout()` method is available on both targets.
        let mut request = self
            .http
            .request(options.method.clone(), url)
            .headers(headers)
            .timeout(Duration::from_millis(self.options.timeout_ms));
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| self.classify(err))?;
        let status = response.status();
        let body = response.text().await.map_err(|err| self.classify(err))?;

        if !status.is_success() {
            return Err(FitClubError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|err| FitClubError::Decode(format!("invalid response JSON: {err}")))
    }

    fn classify(&self, err: reqwest::Error) -> FitClubError {
        if err.is_timeout() {
            FitClubError::Timeout {
                timeout_ms: self.options.timeout_ms,
            }
        } else {
            FitClubError::Transport(err)
        }
    }

    /// Waits before the next retry attempt.
    ///
    /// On native targets: linear backoff sleep via `tokio::time::sleep`.
    /// On WASM targets: no-op — edge workers prefer fast failure over
    /// sleeping, and `tokio::time::sleep` is not available.
    async fn wait_before_retry(&self, attempt: usize) {
        let delay = backoff_delay(self.options.backoff_base_ms, attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying request after {} ms", delay.as_millis());

        #[cfg(not(target_arch = "wasm32"))]
        sleep(delay).await;

        // WASM: no sleep implementation — suppress unused variable warning.
        #[cfg(target_arch = "wasm32")]
        let _ = delay;
    }
}

#[cfg(test)]
mod tests {
    use super::endpoint_url;
    use crate::FitClubError;

    #[test]
    fn joins_base_and_path_with_single_slash() {
        let url = endpoint_url("https://api.fitclub.example/", "/classes").expect("must join");
        assert_eq!(url, "https://api.fitclub.example/classes");
    }

    #[test]
    fn preserves_nested_paths() {
        let url =
            endpoint_url("https://api.fitclub.example", "clubs/12/classes").expect("must join");
        assert_eq!(url, "https://api.fitclub.example/clubs/12/classes");
    }

    #[test]
    fn rejects_empty_path() {
        let err = endpoint_url("https://api.fitclub.example", "  ").expect_err("must fail");
        assert!(matches!(err, FitClubError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_whitespace_inside_path() {
        let err =
            endpoint_url("https://api.fitclub.example", "class schedule").expect_err("must fail");
        assert!(matches!(err, FitClubError::InvalidRequest(_)));
    }
}
