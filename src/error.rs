//! API Errors
//!
//! Failure taxonomy for calls made through the API client.

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The browser refused to build or send the request
    #[error("browser error: {0}")]
    Browser(String),
    /// `fetch` rejected (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// The body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Request parameters could not be encoded
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        ApiError::Browser(format!("{:?}", value))
    }

    pub fn network(value: JsValue) -> Self {
        ApiError::Network(format!("{:?}", value))
    }

    /// Build a status error, pulling a readable message out of the body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body)
            .unwrap_or_else(|| format!("request failed with status {}", status));
        ApiError::Status { status, detail }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// Text for the page's error banner
    pub fn user_message(&self) -> String {
        match self {
            e if e.is_unauthorized() => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for ApiError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        ApiError::Encode(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Flatten a DRF error body into one line.
///
/// Handles `{"detail": "..."}`, field maps like `{"email": ["taken"]}` and
/// bare string arrays. Field messages keep their field name as a prefix,
/// except `non_field_errors`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let mut parts = Vec::new();
    match &value {
        Value::Object(map) => {
            if let Some(Value::String(detail)) = map.get("detail") {
                return Some(detail.clone());
            }
            for (field, messages) in map {
                for message in flatten_messages(messages) {
                    if field == "non_field_errors" {
                        parts.push(message);
                    } else {
                        parts.push(format!("{}: {}", field, message));
                    }
                }
            }
        }
        other => parts.extend(flatten_messages(other)),
    }
    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid token."}"#).as_deref(),
            Some("Invalid token.")
        );
    }

    #[test]
    fn test_field_errors_are_prefixed() {
        let body = r#"{"non_field_errors": ["Unable to log in."], "email": ["Enter a valid email address."]}"#;
        let detail = extract_detail(body).unwrap();
        assert!(detail.contains("Unable to log in."));
        assert!(detail.contains("email: Enter a valid email address."));
        assert!(!detail.contains("non_field_errors"));
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = ApiError::from_status(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
        assert!(!err.is_unauthorized());
        assert!(ApiError::from_status(401, "").is_unauthorized());
    }

    #[test]
    fn test_user_message() {
        let expired = ApiError::from_status(401, r#"{"detail": "Invalid token."}"#);
        assert!(expired.user_message().contains("sign in again"));
        let rejected = ApiError::from_status(400, r#"{"current_password": ["Invalid password."]}"#);
        assert_eq!(rejected.user_message(), "current_password: Invalid password.");
        assert!(ApiError::Network("TypeError".into()).user_message().contains("connection"));
    }
}
