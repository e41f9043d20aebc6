use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use shared_models::BookingStatus;
use sqlx::PgPool;
use uuid::Uuid;

use crate::booking::errors::BookingError;
use crate::booking::models::Booking;
use crate::booking::models::BookingId;
use crate::booking::ports::BookingRepository;

const BOOKING_COLUMNS: &str = "id, user_id, hotel_code, hotel_name, check_in, check_out, \
     guests, rooms, nightly_rate, total_price, status, created_at, updated_at";

pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    user_id: Uuid,
    hotel_code: i32,
    hotel_name: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    rooms: i32,
    nightly_rate: f64,
    total_price: f64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

fn count_column(value: i32, column: &str) -> Result<u32, BookingError> {
    u32::try_from(value)
        .map_err(|_| BookingError::DatabaseError(format!("Negative {} stored: {}", column, value)))
}

impl TryFrom<BookingRow> for Booking {
    type Error = BookingError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: BookingId(row.id),
            user_id: row.user_id,
            hotel_code: row.hotel_code,
            hotel_name: row.hotel_name,
            check_in: row.check_in,
            check_out: row.check_out,
            guests: count_column(row.guests, "guests")?,
            rooms: count_column(row.rooms, "rooms")?,
            nightly_rate: row.nightly_rate,
            total_price: row.total_price,
            status: row
                .status
                .parse::<BookingStatus>()
                .map_err(BookingError::DatabaseError)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn to_column(value: u32) -> Result<i32, BookingError> {
    i32::try_from(value).map_err(|e| BookingError::Unknown(e.to_string()))
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<(), BookingError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, user_id, hotel_code, hotel_name, check_in, check_out,
                guests, rooms, nightly_rate, total_price, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(booking.id.0)
        .bind(booking.user_id)
        .bind(booking.hotel_code)
        .bind(&booking.hotel_name)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(to_column(booking.guests)?)
        .bind(to_column(booking.rooms)?)
        .bind(booking.nightly_rate)
        .bind(booking.total_price)
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingError> {
        let sql = format!("SELECT {} FROM bookings WHERE id = $1", BOOKING_COLUMNS);
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?
            .map(Booking::try_from)
            .transpose()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let sql = format!(
            "SELECT {} FROM bookings WHERE user_id = $1 ORDER BY created_at DESC, id",
            BOOKING_COLUMNS
        );
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn mark_cancelled(&self, id: BookingId) -> Result<(), BookingError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = $3
            "#,
        )
        .bind(id.0)
        .bind(BookingStatus::Cancelled.as_str())
        .bind(BookingStatus::Confirmed.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bookings WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await?;

        if exists {
            Err(BookingError::AlreadyCancelled(id.to_string()))
        } else {
            Err(BookingError::NotFound(id.to_string()))
        }
    }
}
