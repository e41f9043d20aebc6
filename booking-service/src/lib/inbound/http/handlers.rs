pub use api::ApiError;
pub use api::ApiSuccess;
use shared_models::BookingData;

use crate::booking::errors::BookingError;
use crate::booking::models::Booking;

pub mod cancel_booking;
pub mod create_booking;
pub mod get_booking;

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(_) | BookingError::HotelNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            BookingError::InvalidBookingId(_)
            | BookingError::Invalid(_)
            | BookingError::CheckInPassed => ApiError::UnprocessableEntity(err.to_string()),
            BookingError::AlreadyCancelled(_) => ApiError::Conflict(err.to_string()),
            BookingError::HotelServiceUnavailable(_) => {
                ApiError::ServiceUnavailable(err.to_string())
            }
            BookingError::DatabaseError(_) | BookingError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<&Booking> for BookingData {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.0,
            hotel_code: booking.hotel_code,
            hotel_name: booking.hotel_name.clone(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            nights: booking.nights(),
            guests: booking.guests,
            rooms: booking.rooms,
            nightly_rate: booking.nightly_rate,
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
