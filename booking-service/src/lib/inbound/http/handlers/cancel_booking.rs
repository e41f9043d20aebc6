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

pub async fn cancel_booking<BS: BookingServicePort>(
    State(state): State<AppState<BS>>,
    Extension(current): Extension<AuthenticatedUser>,
    ApiPath(booking_id): ApiPath<String>,
) -> Result<ApiSuccess<BookingData>, ApiError> {
    let booking_id = BookingId::from_string(&booking_id).map_err(BookingError::from)?;

    let booking = state
        .booking_service
        .cancel_booking(current.user_id, booking_id)
        .await?;

    Ok(ApiSuccess::ok(
        "Booking cancelled successfully",
        BookingData::from(&booking),
    ))
}
