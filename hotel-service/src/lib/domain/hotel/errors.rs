use thiserror::Error;

/// Rejected hotel search input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("filters must be a JSON object: {0}")]
    MalformedFilters(String),

    #[error("advancedFilters must be a JSON array: {0}")]
    MalformedAdvancedFilters(String),

    #[error("Invalid star rating: {0}")]
    InvalidStarRating(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Price range start must not exceed its end")]
    InvertedPriceRange,

    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    #[error("currentPage must be at least 1")]
    InvalidPage,

    #[error("guests must be at least 1")]
    InvalidGuests,

    #[error("checkIn and checkOut must be provided together")]
    IncompleteStay,

    #[error("checkOut must be after checkIn")]
    InvertedStay,
}

/// Rejected review submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(String),

    #[error("Review text must not be empty")]
    EmptyReview,

    #[error("Reviewer name must not be empty")]
    EmptyReviewer,
}

/// Top-level error for all hotel catalogue operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HotelError {
    #[error("Hotel with code {0} not found")]
    NotFound(i32),

    #[error("Invalid search: {0}")]
    InvalidSearch(#[from] SearchError),

    #[error("Invalid review: {0}")]
    InvalidReview(#[from] ReviewError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<sqlx::Error> for HotelError {
    fn from(err: sqlx::Error) -> Self {
        HotelError::DatabaseError(err.to_string())
    }
}
