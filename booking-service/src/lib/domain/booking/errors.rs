use thiserror::Error;

/// Rejected reservation request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingValidationError {
    #[error("checkOut must be after checkIn")]
    InvertedStay,

    #[error("checkIn must not be in the past")]
    CheckInInPast,

    #[error("guests must be between 1 and {max}")]
    GuestsOutOfRange { max: u32 },

    #[error("rooms must be between 1 and {max}")]
    RoomsOutOfRange { max: u32 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingIdError {
    #[error("Invalid booking ID: {0}")]
    InvalidUuid(String),
}

/// Top-level error for all booking operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error(transparent)]
    InvalidBookingId(#[from] BookingIdError),

    #[error("Booking {0} not found")]
    NotFound(String),

    #[error("Hotel with code {0} not found")]
    HotelNotFound(i32),

    #[error(transparent)]
    Invalid(#[from] BookingValidationError),

    #[error("Booking {0} is already cancelled")]
    AlreadyCancelled(String),

    #[error("Cannot cancel a booking whose check-in date has passed")]
    CheckInPassed,

    #[error("Hotels service unavailable: {0}")]
    HotelServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        BookingError::DatabaseError(err.to_string())
    }
}
