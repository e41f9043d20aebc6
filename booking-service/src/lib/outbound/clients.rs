pub mod hotel;

pub use hotel::HttpHotelCatalog;
