//! Raw HTTP response type.
//!
//! [`HttpResponse`] keeps the status, headers and undecoded body of a GET so
//! that a resource can store it before the status is checked and the body
//! decoded.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{DecodeError, HttpResponseError};

/// A raw HTTP response received from the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The URL that produced this response.
    pub url: String,
    /// Response headers with lowercase names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The undecoded response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        url: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Fails if the status code signals a client or server error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpResponseError`] for any 4xx or 5xx status.
    pub fn raise_for_status(&self) -> Result<(), HttpResponseError> {
        let kind = match self.code {
            400..=499 => "Client",
            500..=599 => "Server",
            _ => return Ok(()),
        };
        let reason = reqwest::StatusCode::from_u16(self.code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown Status");

        Err(HttpResponseError {
            code: self.code,
            url: self.url.clone(),
            message: format!("{} {kind} Error: {reason} for url: {}", self.code, self.url),
            error_reference: self.request_id().map(String::from),
        })
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// Use `serde_json::Value` as `T` to get the payload without imposing
    /// any shape on it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON or does not
    /// match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(
            code,
            "https://svc.example.com/api/projects",
            HashMap::new(),
            body,
        )
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            assert!(
                response(code, "").is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        for code in [199, 301, 400, 404, 429, 500, 503] {
            assert!(!response(code, "").is_ok(), "code {code}");
        }
    }

    #[test]
    fn test_raise_for_status_passes_on_success() {
        assert!(response(200, "{}").raise_for_status().is_ok());
        assert!(response(204, "").raise_for_status().is_ok());
        // Only 4xx and 5xx are failures
        assert!(response(304, "").raise_for_status().is_ok());
    }

    #[test]
    fn test_raise_for_status_client_error_message() {
        let error = response(404, "").raise_for_status().unwrap_err();
        assert_eq!(error.code, 404);
        assert_eq!(error.url, "https://svc.example.com/api/projects");
        assert_eq!(
            error.message,
            "404 Client Error: Not Found for url: https://svc.example.com/api/projects"
        );
    }

    #[test]
    fn test_raise_for_status_server_error_message() {
        let error = response(502, "").raise_for_status().unwrap_err();
        assert!(error.message.starts_with("502 Server Error: Bad Gateway"));
    }

    #[test]
    fn test_raise_for_status_carries_request_id() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        let response = HttpResponse::new(500, "https://svc.example.com/api", headers, "");

        let error = response.raise_for_status().unwrap_err();
        assert_eq!(error.error_reference.as_deref(), Some("req-42"));
    }

    #[test]
    fn test_json_decodes_objects_and_arrays() {
        let object: Value = response(200, r#"{"id": 42, "name": "bracket"}"#)
            .json()
            .unwrap();
        assert_eq!(object, json!({"id": 42, "name": "bracket"}));

        let array: Value = response(200, r#"[{"id": 1}, {"id": 2}]"#).json().unwrap();
        assert_eq!(array.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_json_fails_on_malformed_body() {
        assert!(response(200, "<html>oops</html>").json::<Value>().is_err());
        assert!(response(200, "").json::<Value>().is_err());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, "https://svc.example.com", headers, "{}");

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}
