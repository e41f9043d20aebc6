//! Catalogue file loading.
//!
//! The seed file uses the web client's hotel data format, where prices and
//! ratings may be written either as numbers or as numeric strings.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::hotel::models::HotelCode;
use crate::hotel::models::HotelImage;
use crate::hotel::models::NewHotel;
use crate::hotel::models::NewReview;
use crate::hotel::models::PropertyType;

const DEFAULT_MAX_GUESTS: u32 = 5;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error(transparent)]
    Read(#[from] db::SeedError),

    #[error("Invalid catalogue entry for hotel {code}: {reason}")]
    InvalidHotel { code: i32, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn value(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
        .filter(|n: &f64| n.is_finite())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedHotel {
    hotel_code: i32,
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    city: String,
    price: Numeric,
    #[serde(default)]
    ratings: Option<Numeric>,
    #[serde(default)]
    property_type: Option<String>,
    #[serde(default)]
    max_guests: Option<u32>,
    #[serde(default)]
    images: Vec<SeedImage>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    reviews: Option<SeedReviews>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedImage {
    image_url: String,
    #[serde(default)]
    accessible_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SeedReviews {
    #[serde(default)]
    data: Vec<SeedReview>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedReview {
    reviewer_name: String,
    rating: Numeric,
    review: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    verified: bool,
}

impl TryFrom<SeedHotel> for NewHotel {
    type Error = CatalogueError;

    fn try_from(seed: SeedHotel) -> Result<Self, Self::Error> {
        let code = seed.hotel_code;
        let invalid = |reason: String| CatalogueError::InvalidHotel { code, reason };

        let price = seed
            .price
            .value()
            .filter(|p| *p >= 0.0)
            .ok_or_else(|| invalid("price must be a non-negative number".to_string()))?;

        let ratings = match seed.ratings {
            None => None,
            Some(r) => Some(
                r.value()
                    .filter(|r| (0.0..=5.0).contains(r))
                    .ok_or_else(|| invalid("ratings must be between 0 and 5".to_string()))?,
            ),
        };

        let property_type = match seed.property_type.as_deref() {
            None => PropertyType::Hotel,
            Some(t) => t.parse::<PropertyType>().map_err(|e| invalid(format!("{}", e)))?,
        };

        let reviews = seed
            .reviews
            .map(|r| r.data)
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                let rating = r
                    .rating
                    .value()
                    .filter(|v| (0.0..=5.0).contains(v))
                    .ok_or_else(|| invalid("review rating must be between 0 and 5".to_string()))?;
                Ok(NewReview {
                    user_id: None,
                    reviewer_name: r.reviewer_name,
                    rating,
                    review: r.review,
                    date: r.date,
                    verified: r.verified,
                })
            })
            .collect::<Result<Vec<_>, CatalogueError>>()?;

        Ok(NewHotel {
            code: HotelCode(code),
            title: seed.title,
            subtitle: seed.subtitle,
            city: seed.city.trim().to_string(),
            price,
            ratings,
            property_type,
            max_guests: seed.max_guests.unwrap_or(DEFAULT_MAX_GUESTS).max(1),
            images: seed
                .images
                .into_iter()
                .map(|i| HotelImage {
                    image_url: i.image_url,
                    accessible_text: i.accessible_text,
                })
                .collect(),
            benefits: seed.benefits,
            reviews,
        })
    }
}

/// Read the catalogue file at `path`.
///
/// A missing file yields an empty catalogue.
///
/// # Errors
/// * `Read` - File unreadable or not a JSON array of hotels
/// * `InvalidHotel` - An entry carries an unusable price, rating or type
pub async fn load_catalogue(path: &Path) -> Result<Vec<NewHotel>, CatalogueError> {
    let Some(entries) = db::read_seed_file::<SeedHotel>(path).await? else {
        return Ok(Vec::new());
    };

    entries.into_iter().map(NewHotel::try_from).collect()
}
