use api::ApiPath;
use axum::extract::State;
use shared_models::BookingEnquiryData;
use shared_models::HotelDetailsData;
use shared_models::HotelListItem;

use super::ApiError;
use super::ApiSuccess;
use crate::hotel::models::BookingEnquiry;
use crate::hotel::models::HotelCode;
use crate::hotel::ports::HotelServicePort;
use crate::inbound::http::router::AppState;

/// Paragraphs shown on every hotel page.
pub const DESCRIPTION: [&str; 5] = [
    "A serene stay awaits at our plush hotel, offering a blend of luxury and comfort with top-notch amenities.",
    "Experience the pinnacle of elegance in our beautifully designed rooms with stunning cityscape views.",
    "Indulge in gastronomic delights at our in-house restaurants, featuring local and international cuisines.",
    "Unwind in our state-of-the-art spa and wellness center, a perfect retreat for the senses.",
    "Located in the heart of the city, our hotel is the ideal base for both leisure and business travelers.",
];

pub async fn get_hotel<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
    ApiPath(hotel_code): ApiPath<i32>,
) -> Result<ApiSuccess<HotelDetailsData>, ApiError> {
    let hotel = state.hotel_service.get_hotel(HotelCode(hotel_code)).await?;

    Ok(ApiSuccess::ok(
        "Hotel details retrieved successfully",
        HotelDetailsData {
            summary: HotelListItem::from(&hotel),
            description: DESCRIPTION.iter().map(|p| p.to_string()).collect(),
        },
    ))
}

pub async fn booking_enquiry<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
    ApiPath(hotel_code): ApiPath<i32>,
) -> Result<ApiSuccess<BookingEnquiryData>, ApiError> {
    state
        .hotel_service
        .booking_enquiry(HotelCode(hotel_code))
        .await
        .map_err(ApiError::from)
        .map(|enquiry| {
            ApiSuccess::ok(
                "Hotel booking details retrieved successfully",
                BookingEnquiryData::from(enquiry),
            )
        })
}

impl From<BookingEnquiry> for BookingEnquiryData {
    fn from(enquiry: BookingEnquiry) -> Self {
        Self {
            name: enquiry.name,
            cancellation_policy: enquiry.cancellation_policy.to_string(),
            check_in_time: enquiry.check_in_time.to_string(),
            check_out_time: enquiry.check_out_time.to_string(),
            current_night_rate: enquiry.current_night_rate,
            max_guests_allowed: enquiry.max_guests_allowed,
            max_rooms_allowed_per_guest: enquiry.max_rooms_allowed_per_guest,
        }
    }
}
