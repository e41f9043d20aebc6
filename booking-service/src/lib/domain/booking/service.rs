use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono::Utc;
use shared_models::BookingStatus;
use uuid::Uuid;

use crate::booking::errors::BookingError;
use crate::booking::models::total_price;
use crate::booking::models::Booking;
use crate::booking::models::BookingId;
use crate::booking::models::CreateBookingCommand;
use crate::booking::ports::BookingRepository;
use crate::booking::ports::BookingServicePort;
use crate::booking::ports::HotelCatalog;

/// Domain service implementation for bookings.
pub struct BookingService<BR, HC>
where
    BR: BookingRepository,
    HC: HotelCatalog,
{
    repository: Arc<BR>,
    catalog: Arc<HC>,
}

impl<BR, HC> BookingService<BR, HC>
where
    BR: BookingRepository,
    HC: HotelCatalog,
{
    /// # Arguments
    /// * `repository` - Booking persistence implementation
    /// * `catalog` - Hotel rates and limits
    pub fn new(repository: Arc<BR>, catalog: Arc<HC>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    async fn owned(&self, user_id: Uuid, id: BookingId) -> Result<Booking, BookingError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|booking| booking.user_id == user_id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<BR, HC> BookingServicePort for BookingService<BR, HC>
where
    BR: BookingRepository,
    HC: HotelCatalog,
{
    async fn create_booking(
        &self,
        user_id: Uuid,
        command: CreateBookingCommand,
    ) -> Result<Booking, BookingError> {
        command.validate_dates(Self::today())?;

        let terms = self.catalog.booking_terms(command.hotel_code).await?;
        command.validate_against(&terms)?;

        let booking = Booking {
            id: BookingId::new(),
            user_id,
            hotel_code: command.hotel_code,
            hotel_name: terms.hotel_name,
            check_in: command.check_in,
            check_out: command.check_out,
            guests: command.guests,
            rooms: command.rooms,
            nightly_rate: terms.nightly_rate,
            total_price: total_price(command.nights(), command.rooms, terms.nightly_rate),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.repository.create(&booking).await?;
        tracing::info!(
            booking_id = %booking.id,
            user_id = %user_id,
            hotel_code = booking.hotel_code,
            total_price = booking.total_price,
            "Booking created"
        );

        Ok(booking)
    }

    async fn list_bookings(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        self.repository.list_by_user(user_id).await
    }

    async fn get_booking(&self, user_id: Uuid, id: BookingId) -> Result<Booking, BookingError> {
        self.owned(user_id, id).await
    }

    async fn cancel_booking(&self, user_id: Uuid, id: BookingId) -> Result<Booking, BookingError> {
        let mut booking = self.owned(user_id, id).await?;
        booking.cancel(Self::today())?;

        self.repository.mark_cancelled(id).await?;
        tracing::info!(booking_id = %id, user_id = %user_id, "Booking cancelled");

        Ok(booking)
    }
}
