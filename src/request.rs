use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::FitClubError;

/// Describes one HTTP request to the FitClub API.
///
/// The descriptor is immutable once handed to a client call; the client reads
/// from it on every attempt and never writes back.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Additional header pairs; these override the default JSON headers on
    /// name collision.
    pub headers: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<JsonValue>,
}

impl RequestOptions {
    /// Creates a GET request descriptor.
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request descriptor with a JSON body.
    pub fn post(body: JsonValue) -> Self {
        Self {
            method: Method::POST,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Creates a DELETE request descriptor.
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header pair.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builds the effective header map: JSON defaults first, then
    /// caller-supplied pairs, which replace defaults of the same name.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, FitClubError> {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                FitClubError::InvalidRequest(format!("invalid header name '{name}'"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                FitClubError::InvalidRequest(format!("invalid value for header '{name}'"))
            })?;
            map.insert(name, value);
        }

        Ok(map)
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{ACCEPT, CONTENT_TYPE};
    use serde_json::json;

    use super::RequestOptions;
    use crate::FitClubError;

    #[test]
    fn json_headers_applied_by_default() {
        let map = RequestOptions::get().header_map().expect("must build");
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(map.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn caller_headers_override_defaults() {
        let options = RequestOptions::post(json!({"k": 1}))
            .header("Accept", "text/html")
            .header("X-Club-Locale", "sv-SE");
        let map = options.header_map().expect("must build");
        assert_eq!(map.get(ACCEPT).unwrap(), "text/html");
        assert_eq!(map.get("x-club-locale").unwrap(), "sv-SE");
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn delete_descriptor_has_no_body_and_default_is_get() {
        let options = RequestOptions::delete();
        assert_eq!(options.method, reqwest::Method::DELETE);
        assert!(options.body.is_none());
        assert_eq!(RequestOptions::default().method, reqwest::Method::GET);
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let err = RequestOptions::get()
            .header("bad name", "1")
            .header_map()
            .expect_err("must fail");
        assert!(matches!(err, FitClubError::InvalidRequest(_)));
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let err = RequestOptions::get()
            .header("x-note", "line\nbreak")
            .header_map()
            .expect_err("must fail");
        assert!(matches!(err, FitClubError::InvalidRequest(_)));
    }
}
