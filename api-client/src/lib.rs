//! Client-side network adapter for the booking services.
//!
//! A logical endpoint such as `"/hotels"` or `"users/me"` is routed to the
//! base URL of the service that owns it, either by an explicit override or
//! by looking at the first path segment. Every call resolves to an
//! [`AdapterResponse`]; failures never surface as `Err`.
//!
//! ```no_run
//! use api_client::{NetworkAdapter, RequestOptions, ServiceUrls};
//! use serde_json::Value;
//!
//! # async fn run() {
//! let adapter = NetworkAdapter::new(ServiceUrls::default());
//! let cities = adapter
//!     .get::<Value>("/availableCities", RequestOptions::default())
//!     .await;
//! if !cities.is_success {
//!     eprintln!("{}", cities.message);
//! }
//! # }
//! ```

pub mod adapter;
pub mod response;
pub mod route;

pub use adapter::NetworkAdapter;
pub use adapter::RequestOptions;
pub use response::AdapterResponse;
pub use response::DECODE_ERROR;
pub use response::NETWORK_ERROR;
pub use route::ServiceRoute;
pub use route::ServiceUrls;
