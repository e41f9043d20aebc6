use api::ApiPath;
use auth::AuthenticatedUser;
use axum::extract::State;
use axum::Extension;
use shared_models::BookingData;

use super::ApiError;
use super::ApiSuccess;
use crate::booking::errors::BookingError;
use crate::booking::models::BookingId;
use crate::booking::ports::BookingServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_bookings<BS: BookingServicePort>(
    State(state): State<AppState<BS>>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<BookingData>>, ApiError> {
    let bookings = state.booking_service.list_bookings(current.user_id).await?;

    Ok(ApiSuccess::ok(
        "Bookings retrieved successfully",
        bookings.iter().map(BookingData::from).collect(),
    ))
}

pub async fn get_booking<BS: BookingServicePort>(
    State(state): State<AppState<BS>>,
    Extension(current): Extension<AuthenticatedUser>,
    ApiPath(booking_id): ApiPath<String>,
) -> Result<ApiSuccess<BookingData>, ApiError> {
    let booking_id = BookingId::from_string(&booking_id).map_err(BookingError::from)?;

    state
        .booking_service
        .get_booking(current.user_id, booking_id)
        .await
        .map_err(ApiError::from)
        .map(|ref booking| ApiSuccess::ok("Booking retrieved successfully", booking.into()))
}
