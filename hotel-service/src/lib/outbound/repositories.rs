pub mod hotel;

pub use hotel::PostgresHotelRepository;
