use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelImageData {
    pub image_url: String,
    pub accessible_text: Option<String>,
}

/// Hotel card shown in search results.
///
/// `price` and `ratings` are rendered as strings, matching what the web
/// client displays verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListItem {
    pub hotel_code: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub price: String,
    pub ratings: String,
    pub city: String,
    pub images: Vec<HotelImageData>,
    pub benefits: Vec<String>,
}

/// Hotel detail page payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailsData {
    #[serde(flatten)]
    pub summary: HotelListItem,
    pub description: Vec<String>,
}

/// Booking terms of a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEnquiryData {
    pub name: String,
    pub cancellation_policy: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub current_night_rate: f64,
    pub max_guests_allowed: u32,
    pub max_rooms_allowed_per_guest: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub reviewer_name: String,
    pub rating: f64,
    pub review: String,
    pub date: Option<String>,
    pub verified: bool,
}
