use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use shared_models::BookingStatus;
use uuid::Uuid;

use crate::booking::errors::BookingError;
use crate::booking::errors::BookingIdError;
use crate::booking::errors::BookingValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidUuid` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookingIdError> {
        Uuid::parse_str(s)
            .map(BookingId)
            .map_err(|e| BookingIdError::InvalidUuid(e.to_string()))
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Booking limits and rate of a hotel, as published by the hotels service.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelTerms {
    pub hotel_name: String,
    pub nightly_rate: f64,
    pub max_guests: u32,
    pub max_rooms_per_guest: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: Uuid,
    pub hotel_code: i32,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
    pub nightly_rate: f64,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Move a confirmed booking to cancelled.
    ///
    /// # Errors
    /// * `AlreadyCancelled` - Booking was cancelled before
    /// * `CheckInPassed` - Check-in date is before `today`
    pub fn cancel(&mut self, today: NaiveDate) -> Result<(), BookingError> {
        if self.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled(self.id.to_string()));
        }
        if self.check_in < today {
            return Err(BookingError::CheckInPassed);
        }

        self.status = BookingStatus::Cancelled;
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}

/// Reservation request of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingCommand {
    pub hotel_code: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
}

impl CreateBookingCommand {
    /// Checks that only need the request itself.
    ///
    /// # Errors
    /// * `InvertedStay` - Check-out is not after check-in
    /// * `CheckInInPast` - Check-in is before `today`
    pub fn validate_dates(&self, today: NaiveDate) -> Result<(), BookingValidationError> {
        if self.check_out <= self.check_in {
            return Err(BookingValidationError::InvertedStay);
        }
        if self.check_in < today {
            return Err(BookingValidationError::CheckInInPast);
        }
        Ok(())
    }

    /// Checks against the hotel's limits.
    ///
    /// # Errors
    /// * `GuestsOutOfRange` - Guests outside 1..=max guests
    /// * `RoomsOutOfRange` - Rooms outside 1..=max rooms per guest
    pub fn validate_against(&self, terms: &HotelTerms) -> Result<(), BookingValidationError> {
        if !(1..=terms.max_guests).contains(&self.guests) {
            return Err(BookingValidationError::GuestsOutOfRange {
                max: terms.max_guests,
            });
        }
        if !(1..=terms.max_rooms_per_guest).contains(&self.rooms) {
            return Err(BookingValidationError::RoomsOutOfRange {
                max: terms.max_rooms_per_guest,
            });
        }
        Ok(())
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Price of a stay: nights × rooms × nightly rate.
pub fn total_price(nights: i64, rooms: u32, nightly_rate: f64) -> f64 {
    nights as f64 * f64::from(rooms) * nightly_rate
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, d).unwrap()
    }

    fn command(check_in: u32, check_out: u32, guests: u32, rooms: u32) -> CreateBookingCommand {
        CreateBookingCommand {
            hotel_code: 71222,
            check_in: day(check_in),
            check_out: day(check_out),
            guests,
            rooms,
        }
    }

    fn terms() -> HotelTerms {
        HotelTerms {
            hotel_name: "Hyatt Pune".to_string(),
            nightly_rate: 18900.0,
            max_guests: 5,
            max_rooms_per_guest: 3,
        }
    }

    fn booking(check_in: NaiveDate) -> Booking {
        Booking {
            id: BookingId::new(),
            user_id: Uuid::new_v4(),
            hotel_code: 71222,
            hotel_name: "Hyatt Pune".to_string(),
            check_in,
            check_out: check_in + Duration::days(2),
            guests: 2,
            rooms: 1,
            nightly_rate: 100.0,
            total_price: 200.0,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_dates_validation() {
        assert_eq!(command(1, 3, 2, 1).validate_dates(day(1)), Ok(()));
        assert_eq!(
            command(3, 3, 2, 1).validate_dates(day(1)),
            Err(BookingValidationError::InvertedStay)
        );
        assert_eq!(
            command(5, 3, 2, 1).validate_dates(day(1)),
            Err(BookingValidationError::InvertedStay)
        );
        assert_eq!(
            command(1, 3, 2, 1).validate_dates(day(2)),
            Err(BookingValidationError::CheckInInPast)
        );
    }

    #[test]
    fn test_limits_validation() {
        assert_eq!(command(1, 3, 5, 3).validate_against(&terms()), Ok(()));
        assert_eq!(
            command(1, 3, 0, 1).validate_against(&terms()),
            Err(BookingValidationError::GuestsOutOfRange { max: 5 })
        );
        assert_eq!(
            command(1, 3, 6, 1).validate_against(&terms()),
            Err(BookingValidationError::GuestsOutOfRange { max: 5 })
        );
        assert_eq!(
            command(1, 3, 2, 4).validate_against(&terms()),
            Err(BookingValidationError::RoomsOutOfRange { max: 3 })
        );
    }

    #[test]
    fn test_total_price() {
        assert_eq!(command(1, 4, 2, 2).nights(), 3);
        assert_eq!(total_price(3, 2, 18900.0), 113400.0);
        assert_eq!(total_price(1, 1, 0.0), 0.0);
    }

    #[test]
    fn test_cancel_transitions() {
        let today = day(10);
        let mut upcoming = booking(day(12));

        assert_eq!(upcoming.cancel(today), Ok(()));
        assert_eq!(upcoming.status, BookingStatus::Cancelled);
        assert!(upcoming.updated_at.is_some());

        assert!(matches!(
            upcoming.cancel(today),
            Err(BookingError::AlreadyCancelled(_))
        ));
    }

    #[test]
    fn test_cancel_on_check_in_day_is_allowed() {
        let mut booking = booking(day(10));
        assert_eq!(booking.cancel(day(10)), Ok(()));
    }

    #[test]
    fn test_cancel_after_check_in_rejected() {
        let mut started = booking(day(9));
        assert_eq!(started.cancel(day(10)), Err(BookingError::CheckInPassed));
        assert_eq!(started.status, BookingStatus::Confirmed);
    }
}
