use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::errors::BookingError;
use crate::booking::models::Booking;
use crate::booking::models::BookingId;
use crate::booking::models::CreateBookingCommand;
use crate::booking::models::HotelTerms;

/// Port for reservation operations of a signed-in user.
#[async_trait]
pub trait BookingServicePort: Send + Sync + 'static {
    /// Reserve a stay priced from the hotel's current night rate.
    ///
    /// # Errors
    /// * `Invalid` - Dates, guests or rooms rejected
    /// * `HotelNotFound` - Hotels service does not know the code
    /// * `HotelServiceUnavailable` - Hotels service could not be reached
    async fn create_booking(
        &self,
        user_id: Uuid,
        command: CreateBookingCommand,
    ) -> Result<Booking, BookingError>;

    /// Bookings of the user, newest first.
    async fn list_bookings(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError>;

    /// # Errors
    /// * `NotFound` - Absent, or owned by another user
    async fn get_booking(&self, user_id: Uuid, id: BookingId) -> Result<Booking, BookingError>;

    /// # Errors
    /// * `NotFound` - Absent, or owned by another user
    /// * `AlreadyCancelled` - Booking was cancelled before
    /// * `CheckInPassed` - Stay has already started
    async fn cancel_booking(&self, user_id: Uuid, id: BookingId) -> Result<Booking, BookingError>;
}

/// Persistence operations for bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync + 'static {
    async fn create(&self, booking: &Booking) -> Result<(), BookingError>;

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingError>;

    /// Bookings of a user ordered by creation time, newest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError>;

    /// Move a confirmed booking to cancelled in one conditional write.
    ///
    /// # Errors
    /// * `NotFound` - No booking with this id
    /// * `AlreadyCancelled` - The booking was no longer confirmed
    async fn mark_cancelled(&self, id: BookingId) -> Result<(), BookingError>;
}

/// Source of hotel rates and booking limits.
#[async_trait]
pub trait HotelCatalog: Send + Sync + 'static {
    /// # Errors
    /// * `HotelNotFound` - Unknown hotel code
    /// * `HotelServiceUnavailable` - Any other failure reaching the catalogue
    async fn booking_terms(&self, hotel_code: i32) -> Result<HotelTerms, BookingError>;
}
