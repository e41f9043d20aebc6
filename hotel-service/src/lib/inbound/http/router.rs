use std::sync::Arc;

use api::ApiSuccess;
use api::ServiceInfo;
use api::API_PREFIX;
use auth::Authenticator;
use axum::middleware;
use axum::routing::get;
use axum::routing::put;
use axum::Router;

use super::handlers::catalogue::available_cities;
use super::handlers::catalogue::nearby_hotels;
use super::handlers::catalogue::popular_destinations;
use super::handlers::catalogue::vertical_filters;
use super::handlers::details::booking_enquiry;
use super::handlers::details::get_hotel;
use super::handlers::reviews::add_review;
use super::handlers::reviews::hotel_reviews;
use super::handlers::search::search_hotels;
use crate::hotel::ports::HotelServicePort;

pub struct AppState<HS: HotelServicePort> {
    pub hotel_service: Arc<HS>,
}

impl<HS: HotelServicePort> Clone for AppState<HS> {
    fn clone(&self) -> Self {
        Self {
            hotel_service: Arc::clone(&self.hotel_service),
        }
    }
}

async fn service_info() -> ApiSuccess<ServiceInfo> {
    ApiSuccess::ok(
        "Hotels service is running",
        ServiceInfo::new("hotel-service", env!("CARGO_PKG_VERSION")),
    )
}

pub fn create_router<HS: HotelServicePort>(
    hotel_service: Arc<HS>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState { hotel_service };

    let public_routes = Router::new()
        .route("/hotels", get(search_hotels::<HS>))
        .route("/hotels/verticalFilters", get(vertical_filters))
        .route("/hotel/:hotel_code", get(get_hotel::<HS>))
        .route(
            "/hotel/:hotel_code/booking/enquiry",
            get(booking_enquiry::<HS>),
        )
        .route("/hotel/:hotel_code/reviews", get(hotel_reviews::<HS>))
        .route("/availableCities", get(available_cities::<HS>))
        .route("/nearbyHotels", get(nearby_hotels::<HS>))
        .route("/popularDestinations", get(popular_destinations));

    let protected_routes = Router::new()
        .route("/hotel/add-review", put(add_review::<HS>))
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            auth::authenticate,
        ));

    let router = Router::new()
        .route("/", get(service_info))
        .nest(API_PREFIX, public_routes.merge(protected_routes));

    api::with_http_layers(router).with_state(state)
}
