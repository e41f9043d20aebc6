use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::hotel::errors::ReviewError;
use crate::hotel::errors::SearchError;

/// Public hotel identifier used in every URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HotelCode(pub i32);

impl fmt::Display for HotelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyType {
    Hotel,
    Apartment,
    Villa,
}

impl PropertyType {
    const ID_PREFIX: &'static str = "prop_type_";

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Hotel => "hotel",
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
        }
    }

    /// Filter option id as offered to clients, e.g. `prop_type_villa`.
    pub fn filter_id(&self) -> String {
        format!("{}{}", Self::ID_PREFIX, self.as_str())
    }

    pub fn title(&self) -> &'static str {
        match self {
            PropertyType::Hotel => "Hotel",
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
        }
    }

    pub fn all() -> [PropertyType; 3] {
        [
            PropertyType::Hotel,
            PropertyType::Apartment,
            PropertyType::Villa,
        ]
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the bare value (`villa`) or the filter id (`prop_type_villa`).
impl FromStr for PropertyType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let value = normalized
            .strip_prefix(Self::ID_PREFIX)
            .unwrap_or(&normalized);

        match value {
            "hotel" => Ok(PropertyType::Hotel),
            "apartment" => Ok(PropertyType::Apartment),
            "villa" => Ok(PropertyType::Villa),
            _ => Err(SearchError::UnknownPropertyType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelImage {
    pub image_url: String,
    pub accessible_text: Option<String>,
}

/// Hotel aggregate with its images and benefits.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub code: HotelCode,
    pub title: String,
    pub subtitle: Option<String>,
    pub city: String,
    pub price: f64,
    pub ratings: Option<f64>,
    pub property_type: PropertyType,
    pub max_guests: u32,
    pub images: Vec<HotelImage>,
    pub benefits: Vec<String>,
}

/// Hotel to insert, as read from a catalogue file.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub code: HotelCode,
    pub title: String,
    pub subtitle: Option<String>,
    pub city: String,
    pub price: f64,
    pub ratings: Option<f64>,
    pub property_type: PropertyType,
    pub max_guests: u32,
    pub images: Vec<HotelImage>,
    pub benefits: Vec<String>,
    pub reviews: Vec<NewReview>,
}

/// Booking terms derived from a hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingEnquiry {
    pub name: String,
    pub cancellation_policy: &'static str,
    pub check_in_time: &'static str,
    pub check_out_time: &'static str,
    pub current_night_rate: f64,
    pub max_guests_allowed: u32,
    pub max_rooms_allowed_per_guest: u32,
}

impl BookingEnquiry {
    pub const CANCELLATION_POLICY: &'static str = "Free cancellation 1 day prior to stay";
    pub const CHECK_IN_TIME: &'static str = "12:00 PM";
    pub const CHECK_OUT_TIME: &'static str = "10:00 AM";
    pub const MAX_ROOMS_PER_GUEST: u32 = 3;
}

impl From<&Hotel> for BookingEnquiry {
    fn from(hotel: &Hotel) -> Self {
        Self {
            name: hotel.title.clone(),
            cancellation_policy: Self::CANCELLATION_POLICY,
            check_in_time: Self::CHECK_IN_TIME,
            check_out_time: Self::CHECK_OUT_TIME,
            current_night_rate: hotel.price,
            max_guests_allowed: hotel.max_guests,
            max_rooms_allowed_per_guest: Self::MAX_ROOMS_PER_GUEST,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub reviewer_name: String,
    pub rating: f64,
    pub review: String,
    pub date: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Review to store. Built through [`NewReview::submitted`] for client input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub user_id: Option<Uuid>,
    pub reviewer_name: String,
    pub rating: f64,
    pub review: String,
    pub date: Option<String>,
    pub verified: bool,
}

impl NewReview {
    /// Validate a review posted by a signed-in guest.
    ///
    /// New reviews are unverified and carry their stay date as
    /// `Date of stay: <date>`.
    ///
    /// # Errors
    /// * `RatingOutOfRange` - Rating outside 1..=5
    /// * `EmptyReview` - Review text is blank
    /// * `EmptyReviewer` - Reviewer name is blank
    pub fn submitted(
        user_id: Uuid,
        reviewer_name: String,
        rating: f64,
        review: String,
        date: Option<String>,
    ) -> Result<Self, ReviewError> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange(rating.to_string()));
        }
        if review.trim().is_empty() {
            return Err(ReviewError::EmptyReview);
        }
        if reviewer_name.trim().is_empty() {
            return Err(ReviewError::EmptyReviewer);
        }

        Ok(Self {
            user_id: Some(user_id),
            reviewer_name: reviewer_name.trim().to_string(),
            rating,
            review: review.trim().to_string(),
            date: date.map(|d| format!("Date of stay: {}", d)),
            verified: false,
        })
    }
}

/// Aggregate rating figures over all reviews of a hotel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewStats {
    pub total_reviews: u64,
    pub average_rating: f64,
    /// Reviews per star, index 0 holds one-star reviews. Ratings are floored.
    pub star_counts: [u64; 5],
}

impl ReviewStats {
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut stats = Self::default();
        let mut sum = 0.0;

        for rating in ratings {
            stats.total_reviews += 1;
            sum += rating;
            let star = rating.floor() as i64;
            if (1..=5).contains(&star) {
                stats.star_counts[(star - 1) as usize] += 1;
            }
        }

        if stats.total_reviews > 0 {
            stats.average_rating = sum / stats.total_reviews as f64;
        }
        stats
    }

    /// Average with one decimal, e.g. `4.3`.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

/// One page of reviews with statistics over all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub stats: ReviewStats,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}
