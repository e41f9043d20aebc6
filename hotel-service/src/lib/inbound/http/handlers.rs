pub use api::ApiError;
pub use api::ApiSuccess;
use shared_models::HotelImageData;
use shared_models::HotelListItem;

use crate::hotel::errors::HotelError;
use crate::hotel::models::Hotel;

pub mod catalogue;
pub mod details;
pub mod reviews;
pub mod search;

impl From<HotelError> for ApiError {
    fn from(err: HotelError) -> Self {
        match err {
            HotelError::NotFound(_) => ApiError::NotFound(err.to_string()),
            HotelError::InvalidSearch(e) => ApiError::UnprocessableEntity(e.to_string()),
            HotelError::InvalidReview(e) => ApiError::UnprocessableEntity(e.to_string()),
            HotelError::DatabaseError(_) | HotelError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Prices and ratings are sent as text; a hotel without ratings gets `""`.
impl From<&Hotel> for HotelListItem {
    fn from(hotel: &Hotel) -> Self {
        Self {
            hotel_code: hotel.code.0,
            title: hotel.title.clone(),
            subtitle: hotel.subtitle.clone(),
            price: hotel.price.to_string(),
            ratings: hotel.ratings.map(|r| r.to_string()).unwrap_or_default(),
            city: hotel.city.clone(),
            images: hotel
                .images
                .iter()
                .map(|image| HotelImageData {
                    image_url: image.image_url.clone(),
                    accessible_text: image.accessible_text.clone(),
                })
                .collect(),
            benefits: hotel.benefits.clone(),
        }
    }
}
