use api::ErrorResponse;
use serde::de::DeserializeOwned;

/// Error code for requests that never got an HTTP answer.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Error code for answers whose body could not be decoded.
pub const DECODE_ERROR: &str = "DECODE_ERROR";

/// Uniform outcome of an adapter call.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterResponse<T> {
    pub is_success: bool,
    pub status_code: Option<u16>,
    pub message: String,
    pub data: Option<T>,
    pub error_code: Option<String>,
}

impl<T> AdapterResponse<T> {
    pub fn failure(
        status_code: Option<u16>,
        message: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            is_success: false,
            status_code,
            message: message.into(),
            data: None,
            error_code: Some(error_code.into()),
        }
    }
}

impl<T: DeserializeOwned> AdapterResponse<T> {
    /// Fold an HTTP status and raw body into a response.
    ///
    /// Success bodies shaped `{ message, data }` yield `data`; other success
    /// bodies (paginated envelopes) are decoded whole.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        if !(200..300).contains(&status) {
            return Self::from_error_body(status, body);
        }

        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => return Self::failure(Some(status), e.to_string(), DECODE_ERROR),
        };

        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .to_string();

        let payload = match value {
            serde_json::Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or_default()
            }
            other => other,
        };

        match serde_json::from_value::<T>(payload) {
            Ok(data) => Self {
                is_success: true,
                status_code: Some(status),
                message,
                data: Some(data),
                error_code: None,
            },
            Err(e) => Self::failure(Some(status), e.to_string(), DECODE_ERROR),
        }
    }

    fn from_error_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(error) => Self::failure(Some(status), error.message, error.error_code),
            Err(_) => {
                let reason = reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Request failed");
                Self::failure(Some(status), reason, format!("HTTP_{}", status))
            }
        }
    }
}
