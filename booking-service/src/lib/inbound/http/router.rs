use std::sync::Arc;

use api::ApiSuccess;
use api::ServiceInfo;
use api::API_PREFIX;
use auth::Authenticator;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::cancel_booking::cancel_booking;
use super::handlers::create_booking::create_booking;
use super::handlers::get_booking::get_booking;
use super::handlers::get_booking::list_bookings;
use crate::booking::ports::BookingServicePort;

pub struct AppState<BS: BookingServicePort> {
    pub booking_service: Arc<BS>,
}

impl<BS: BookingServicePort> Clone for AppState<BS> {
    fn clone(&self) -> Self {
        Self {
            booking_service: Arc::clone(&self.booking_service),
        }
    }
}

async fn service_info() -> ApiSuccess<ServiceInfo> {
    ApiSuccess::ok(
        "Bookings service is running",
        ServiceInfo::new("booking-service", env!("CARGO_PKG_VERSION")),
    )
}

pub fn create_router<BS: BookingServicePort>(
    booking_service: Arc<BS>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState { booking_service };

    let protected_routes = Router::new()
        .route(
            "/bookings",
            get(list_bookings::<BS>).post(create_booking::<BS>),
        )
        .route("/bookings/:booking_id", get(get_booking::<BS>))
        .route("/bookings/:booking_id/cancel", post(cancel_booking::<BS>))
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            auth::authenticate,
        ));

    let router = Router::new()
        .route("/", get(service_info))
        .nest(API_PREFIX, protected_routes);

    api::with_http_layers(router).with_state(state)
}
