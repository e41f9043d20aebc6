//! JSON contracts exchanged between the booking services and their clients.
//!
//! Only data shapes live here; each service keeps its own domain types and
//! converts at the HTTP boundary.

pub mod booking;
pub mod hotel;
pub mod user;

pub use booking::BookingData;
pub use booking::BookingStatus;
pub use hotel::BookingEnquiryData;
pub use hotel::HotelDetailsData;
pub use hotel::HotelImageData;
pub use hotel::HotelListItem;
pub use hotel::ReviewData;
pub use user::AuthStatusData;
pub use user::TokenData;
pub use user::UserData;
