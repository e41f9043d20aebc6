use async_trait::async_trait;
use db::Pagination;

use crate::hotel::errors::HotelError;
use crate::hotel::models::BookingEnquiry;
use crate::hotel::models::Hotel;
use crate::hotel::models::HotelCode;
use crate::hotel::models::NewHotel;
use crate::hotel::models::NewReview;
use crate::hotel::models::Review;
use crate::hotel::models::ReviewPage;
use crate::hotel::models::ReviewStats;
use crate::hotel::search::HotelPage;
use crate::hotel::search::SearchCriteria;
use crate::hotel::search::SearchFacets;

/// Port for hotel catalogue operations.
#[async_trait]
pub trait HotelServicePort: Send + Sync + 'static {
    /// One page of hotels matching the criteria, with facet counts.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_hotels(&self, criteria: SearchCriteria) -> Result<HotelPage, HotelError>;

    /// # Errors
    /// * `NotFound` - No hotel with this code
    async fn get_hotel(&self, code: HotelCode) -> Result<Hotel, HotelError>;

    /// Booking terms of a hotel.
    ///
    /// # Errors
    /// * `NotFound` - No hotel with this code
    async fn booking_enquiry(&self, code: HotelCode) -> Result<BookingEnquiry, HotelError>;

    /// Newest reviews first, with statistics over all reviews of the hotel.
    ///
    /// # Errors
    /// * `NotFound` - No hotel with this code
    async fn hotel_reviews(&self, code: HotelCode, page: u32) -> Result<ReviewPage, HotelError>;

    /// # Errors
    /// * `NotFound` - No hotel with this code
    /// * `DatabaseError` - Database operation failed
    async fn add_review(&self, code: HotelCode, review: NewReview) -> Result<Review, HotelError>;

    /// Distinct cities of the catalogue, sorted.
    async fn available_cities(&self) -> Result<Vec<String>, HotelError>;

    /// Hotels in the configured nearby city.
    async fn nearby_hotels(&self) -> Result<Vec<Hotel>, HotelError>;

    /// Insert catalogue entries whose codes are not stored yet.
    ///
    /// Returns the number of hotels inserted.
    async fn seed_catalogue(&self, hotels: Vec<NewHotel>) -> Result<u64, HotelError>;
}

/// Persistence operations for the hotel catalogue.
#[async_trait]
pub trait HotelRepository: Send + Sync + 'static {
    /// Hotels matching every filter, in the requested order, and the total
    /// number of matches.
    async fn search(
        &self,
        criteria: &SearchCriteria,
        pagination: Pagination,
    ) -> Result<(Vec<Hotel>, u64), HotelError>;

    /// Facet counts, each leaving out its own filter.
    async fn facets(&self, criteria: &SearchCriteria) -> Result<SearchFacets, HotelError>;

    async fn find_by_code(&self, code: HotelCode) -> Result<Option<Hotel>, HotelError>;

    /// Reviews of a hotel, newest first.
    async fn reviews(&self, hotel_id: i32, pagination: Pagination)
        -> Result<Vec<Review>, HotelError>;

    async fn review_stats(&self, hotel_id: i32) -> Result<ReviewStats, HotelError>;

    async fn add_review(&self, hotel_id: i32, review: NewReview) -> Result<Review, HotelError>;

    async fn available_cities(&self) -> Result<Vec<String>, HotelError>;

    /// Insert hotels with their children in one transaction, skipping codes
    /// that already exist.
    ///
    /// # Errors
    /// * `DatabaseError` - Any insert failed; nothing is stored
    async fn seed(&self, hotels: Vec<NewHotel>) -> Result<u64, HotelError>;
}
