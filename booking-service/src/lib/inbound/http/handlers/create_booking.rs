use api::ApiJson;
use auth::AuthenticatedUser;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::NaiveDate;
use serde::Deserialize;
use shared_models::BookingData;

use super::ApiError;
use super::ApiSuccess;
use crate::booking::models::CreateBookingCommand;
use crate::booking::ports::BookingServicePort;
use crate::inbound::http::router::AppState;

fn one_room() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    hotel_code: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    #[serde(default = "one_room")]
    rooms: u32,
}

impl From<CreateBookingRequest> for CreateBookingCommand {
    fn from(request: CreateBookingRequest) -> Self {
        Self {
            hotel_code: request.hotel_code,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            rooms: request.rooms,
        }
    }
}

pub async fn create_booking<BS: BookingServicePort>(
    State(state): State<AppState<BS>>,
    Extension(current): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateBookingRequest>,
) -> Result<ApiSuccess<BookingData>, ApiError> {
    state
        .booking_service
        .create_booking(current.user_id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref booking| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Booking created successfully",
                booking.into(),
            )
        })
}
