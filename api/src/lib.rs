//! Shared HTTP surface for the booking services.
//!
//! Every service answers with the same JSON envelope:
//! - `{ "success": true, "message": ..., "data": ... }` for single results
//! - `{ "success": true, "message": ..., "page": ..., "items": [...] }` for pages
//! - `{ "success": false, "message": ..., "error_code": ... }` for failures
//!
//! Handlers return [`ApiSuccess`] / [`PaginatedResponse`] on the happy path and
//! [`ApiError`] otherwise. The [`ApiJson`], [`ApiQuery`] and [`ApiPath`]
//! extractors turn axum rejections into `VALIDATION_ERROR` envelopes.
//!
//! # Example
//! ```
//! use api::{ApiError, ApiSuccess};
//! use axum::http::StatusCode;
//!
//! fn lookup(found: bool) -> Result<ApiSuccess<String>, ApiError> {
//!     if found {
//!         Ok(ApiSuccess::ok("Item retrieved successfully", "item".to_string()))
//!     } else {
//!         Err(ApiError::NotFound("Item not found".to_string()))
//!     }
//! }
//!
//! assert_eq!(lookup(false).unwrap_err().status(), StatusCode::NOT_FOUND);
//! ```

pub mod error;
pub mod extract;
pub mod layers;
pub mod response;

pub use error::ApiError;
pub use extract::ApiJson;
pub use extract::ApiPath;
pub use extract::ApiQuery;
pub use layers::with_http_layers;
pub use response::ApiSuccess;
pub use response::ErrorResponse;
pub use response::PaginatedResponse;
pub use response::ServiceInfo;
pub use response::SuccessResponse;

/// Path prefix shared by every service's routes.
pub const API_PREFIX: &str = "/api/v1";
