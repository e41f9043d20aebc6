use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

/// Envelope for a single successful result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Envelope for a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_code: error_code.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Envelope for one page of a larger result set.
///
/// `metadata` carries endpoint specific extras such as facet counts and is
/// omitted from the body when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T, M = serde_json::Value> {
    pub success: bool,
    pub message: String,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<M>,
}

impl<T, M> PaginatedResponse<T, M> {
    pub fn new(
        message: impl Into<String>,
        items: Vec<T>,
        page: u32,
        page_size: u32,
        total: u64,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            page,
            page_size,
            total,
            total_pages: total_pages(total, page_size),
            items,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: M) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl<T: Serialize, M: Serialize> IntoResponse for PaginatedResponse<T, M> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Number of pages needed for `total` items, never less than one.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if total == 0 || page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<SuccessResponse<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(SuccessResponse::new(message, data)))
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    pub fn status(&self) -> StatusCode {
        self.0
    }

    pub fn body(&self) -> &SuccessResponse<T> {
        &self.1 .0
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Payload of the root endpoint each service exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub api_prefix: String,
}

impl ServiceInfo {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            api_prefix: crate::API_PREFIX.to_string(),
        }
    }
}
