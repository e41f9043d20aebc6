pub mod booking;

pub use booking::PostgresBookingRepository;
