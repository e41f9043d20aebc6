//! Hotel search criteria.
//!
//! Clients send the filter panel state as two JSON documents in the query
//! string (`filters` and `advancedFilters`). They are parsed once into a
//! [`SearchCriteria`], which repositories translate to their own query
//! language.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::hotel::errors::SearchError;
use crate::hotel::models::Hotel;
use crate::hotel::models::PropertyType;

pub const PAGE_SIZE: u32 = 6;
pub const DEFAULT_PRICE_START: f64 = 0.0;
pub const DEFAULT_PRICE_END: f64 = 100_000.0;
/// A hotel matches a requested star rating within this distance.
pub const STAR_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    HotelCode,
    PriceLowToHigh,
    PriceHighToLow,
    RatingsHighToLow,
}

impl SortOrder {
    fn parse(key: &str) -> Result<Self, SearchError> {
        match key {
            "priceLowToHigh" => Ok(SortOrder::PriceLowToHigh),
            "priceHighToLow" => Ok(SortOrder::PriceHighToLow),
            "ratingsHighToLow" => Ok(SortOrder::RatingsHighToLow),
            other => Err(SearchError::UnknownSortOption(other.to_string())),
        }
    }

    /// Ordering of two hotels; ties fall back to the hotel code.
    pub fn compare(&self, a: &Hotel, b: &Hotel) -> Ordering {
        let primary = match self {
            SortOrder::HotelCode => Ordering::Equal,
            SortOrder::PriceLowToHigh => a.price.total_cmp(&b.price),
            SortOrder::PriceHighToLow => b.price.total_cmp(&a.price),
            SortOrder::RatingsHighToLow => match (a.ratings, b.ratings) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        primary.then(a.code.cmp(&b.code))
    }
}

/// Inclusive nightly price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub start: f64,
    pub end: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.start && price <= self.end
    }
}

/// Requested stay. Validated and echoed back; the catalogue holds no
/// room inventory to exclude against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Filter dimension that has facet counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    StarRatings,
    PropertyType,
    City,
}

/// Raw query string of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub filters: Option<String>,
    pub advanced_filters: Option<String>,
    pub current_page: Option<u32>,
    pub guests: Option<u32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn to_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|n| n.is_finite())
    }

    fn describe(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawFilters {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    star_ratings: Option<Vec<NumberOrText>>,
    #[serde(default)]
    property_type: Option<Vec<String>>,
    #[serde(default, rename = "priceFilter")]
    price_filter: Option<RawPriceFilter>,
}

#[derive(Debug, Deserialize)]
struct RawPriceFilter {
    start: Option<NumberOrText>,
    end: Option<NumberOrText>,
}

#[derive(Debug, Deserialize)]
struct RawAdvancedFilter {
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
}

/// Validated hotel search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    /// Lowercased, trimmed city; `None` matches any city.
    pub city: Option<String>,
    pub star_ratings: Vec<f64>,
    pub property_types: Vec<PropertyType>,
    pub price: Option<PriceRange>,
    pub guests: Option<u32>,
    pub stay: Option<StayDates>,
    pub sort: SortOrder,
    pub page: u32,
}

impl SearchCriteria {
    /// Hotels in one city, first page.
    pub fn in_city(city: &str) -> Self {
        Self {
            city: Some(city.trim().to_lowercase()),
            page: 1,
            ..Default::default()
        }
    }

    /// # Errors
    /// Any [`SearchError`] describing the first invalid input.
    pub fn parse(params: SearchParams) -> Result<Self, SearchError> {
        let filters = match params.filters.as_deref().map(str::trim) {
            None | Some("") => RawFilters::default(),
            Some(json) => serde_json::from_str::<RawFilters>(json)
                .map_err(|e| SearchError::MalformedFilters(e.to_string()))?,
        };

        let advanced = match params.advanced_filters.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(json) => serde_json::from_str::<Vec<RawAdvancedFilter>>(json)
                .map_err(|e| SearchError::MalformedAdvancedFilters(e.to_string()))?,
        };

        let page = params.current_page.unwrap_or(1);
        if page < 1 {
            return Err(SearchError::InvalidPage);
        }

        if params.guests == Some(0) {
            return Err(SearchError::InvalidGuests);
        }

        let stay = match (params.check_in, params.check_out) {
            (None, None) => None,
            (Some(check_in), Some(check_out)) if check_out > check_in => Some(StayDates {
                check_in,
                check_out,
            }),
            (Some(_), Some(_)) => return Err(SearchError::InvertedStay),
            _ => return Err(SearchError::IncompleteStay),
        };

        let sort = advanced
            .iter()
            .find_map(|f| f.sort_by.as_deref())
            .map(SortOrder::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            city: filters
                .city
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty()),
            star_ratings: parse_star_ratings(filters.star_ratings.unwrap_or_default())?,
            property_types: filters
                .property_type
                .unwrap_or_default()
                .iter()
                .map(|t| t.parse::<PropertyType>())
                .collect::<Result<Vec<_>, _>>()?,
            price: filters.price_filter.map(parse_price_range).transpose()?,
            guests: params.guests,
            stay,
            sort,
            page,
        })
    }

    /// Whether a hotel passes every filter except the one of `skip`.
    pub fn matches(&self, hotel: &Hotel, skip: Option<Facet>) -> bool {
        let city_ok = skip == Some(Facet::City)
            || self
                .city
                .as_ref()
                .map_or(true, |city| hotel.city.trim().to_lowercase() == *city);

        let stars_ok = skip == Some(Facet::StarRatings)
            || self.star_ratings.is_empty()
            || hotel.ratings.is_some_and(|r| {
                self.star_ratings
                    .iter()
                    .any(|wanted| (r - wanted).abs() <= STAR_TOLERANCE)
            });

        let type_ok = skip == Some(Facet::PropertyType)
            || self.property_types.is_empty()
            || self.property_types.contains(&hotel.property_type);

        let price_ok = self.price.map_or(true, |range| range.contains(hotel.price));
        let guests_ok = self.guests.map_or(true, |g| hotel.max_guests >= g);

        city_ok && stars_ok && type_ok && price_ok && guests_ok
    }
}

fn parse_star_ratings(values: Vec<NumberOrText>) -> Result<Vec<f64>, SearchError> {
    values
        .iter()
        .map(|v| {
            v.to_f64()
                .filter(|r| (0.0..=5.0).contains(r))
                .ok_or_else(|| SearchError::InvalidStarRating(v.describe()))
        })
        .collect()
}

fn parse_price_range(raw: RawPriceFilter) -> Result<PriceRange, SearchError> {
    let bound = |value: Option<NumberOrText>, default: f64| match value {
        None => Ok(default),
        Some(v) => v
            .to_f64()
            .filter(|n| *n >= 0.0)
            .ok_or_else(|| SearchError::InvalidPrice(v.describe())),
    };

    let range = PriceRange {
        start: bound(raw.start, DEFAULT_PRICE_START)?,
        end: bound(raw.end, DEFAULT_PRICE_END)?,
    };

    if range.start > range.end {
        return Err(SearchError::InvertedPriceRange);
    }
    Ok(range)
}

/// Result counts per filter option, each computed with every other filter
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchFacets {
    pub star_ratings: BTreeMap<String, u64>,
    pub property_type: BTreeMap<String, u64>,
    pub cities: BTreeMap<String, u64>,
}

impl SearchFacets {
    /// Bucket key of a rating: the nearest whole star.
    pub fn star_key(rating: f64) -> Option<String> {
        let star = rating.round() as i64;
        (1..=5).contains(&star).then(|| star.to_string())
    }

    /// Count facets over an in-memory catalogue.
    pub fn tally<'a, I>(criteria: &SearchCriteria, hotels: I) -> Self
    where
        I: IntoIterator<Item = &'a Hotel>,
    {
        let mut facets = Self::default();

        for hotel in hotels {
            if criteria.matches(hotel, Some(Facet::StarRatings)) {
                if let Some(key) = hotel.ratings.and_then(Self::star_key) {
                    *facets.star_ratings.entry(key).or_default() += 1;
                }
            }
            if criteria.matches(hotel, Some(Facet::PropertyType)) {
                *facets
                    .property_type
                    .entry(hotel.property_type.to_string())
                    .or_default() += 1;
            }
            if criteria.matches(hotel, Some(Facet::City)) {
                *facets
                    .cities
                    .entry(hotel.city.trim().to_string())
                    .or_default() += 1;
            }
        }
        facets
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelPage {
    pub hotels: Vec<Hotel>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub facets: SearchFacets,
    pub stay: Option<StayDates>,
}
