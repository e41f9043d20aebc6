use std::sync::Arc;

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
use crate::hotel::ports::HotelRepository;
use crate::hotel::ports::HotelServicePort;
use crate::hotel::search::HotelPage;
use crate::hotel::search::SearchCriteria;
use crate::hotel::search::PAGE_SIZE;

pub const REVIEW_PAGE_SIZE: u32 = 5;
pub const NEARBY_LIMIT: u32 = 10;

/// Domain service implementation for the hotel catalogue.
pub struct HotelService<HR>
where
    HR: HotelRepository,
{
    repository: Arc<HR>,
    nearby_city: String,
}

impl<HR> HotelService<HR>
where
    HR: HotelRepository,
{
    /// # Arguments
    /// * `repository` - Catalogue persistence implementation
    /// * `nearby_city` - City whose hotels are offered as nearby
    pub fn new(repository: Arc<HR>, nearby_city: impl Into<String>) -> Self {
        Self {
            repository,
            nearby_city: nearby_city.into(),
        }
    }
}

#[async_trait]
impl<HR> HotelServicePort for HotelService<HR>
where
    HR: HotelRepository,
{
    async fn search_hotels(&self, criteria: SearchCriteria) -> Result<HotelPage, HotelError> {
        let pagination = Pagination::new(criteria.page, PAGE_SIZE);

        let (hotels, total) = self.repository.search(&criteria, pagination).await?;
        let facets = self.repository.facets(&criteria).await?;

        tracing::debug!(
            city = ?criteria.city,
            page = pagination.page,
            total,
            "Hotel search executed"
        );

        Ok(HotelPage {
            hotels,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
            facets,
            stay: criteria.stay,
        })
    }

    async fn get_hotel(&self, code: HotelCode) -> Result<Hotel, HotelError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or(HotelError::NotFound(code.0))
    }

    async fn booking_enquiry(&self, code: HotelCode) -> Result<BookingEnquiry, HotelError> {
        let hotel = self.get_hotel(code).await?;
        Ok(BookingEnquiry::from(&hotel))
    }

    async fn hotel_reviews(&self, code: HotelCode, page: u32) -> Result<ReviewPage, HotelError> {
        let hotel = self.get_hotel(code).await?;
        let pagination = Pagination::new(page, REVIEW_PAGE_SIZE);

        let reviews = self.repository.reviews(hotel.id, pagination).await?;
        let stats = self.repository.review_stats(hotel.id).await?;

        Ok(ReviewPage {
            reviews,
            total: stats.total_reviews,
            stats,
            page: pagination.page,
            page_size: pagination.page_size,
        })
    }

    async fn add_review(&self, code: HotelCode, review: NewReview) -> Result<Review, HotelError> {
        let hotel = self.get_hotel(code).await?;

        let stored = self.repository.add_review(hotel.id, review).await?;
        tracing::info!(hotel_code = %code, review_id = stored.id, "Review added");

        Ok(stored)
    }

    async fn available_cities(&self) -> Result<Vec<String>, HotelError> {
        self.repository.available_cities().await
    }

    async fn nearby_hotels(&self) -> Result<Vec<Hotel>, HotelError> {
        let criteria = SearchCriteria::in_city(&self.nearby_city);
        let (hotels, _) = self
            .repository
            .search(&criteria, Pagination::new(1, NEARBY_LIMIT))
            .await?;
        Ok(hotels)
    }

    async fn seed_catalogue(&self, hotels: Vec<NewHotel>) -> Result<u64, HotelError> {
        if hotels.is_empty() {
            return Ok(0);
        }

        let offered = hotels.len();
        let inserted = self.repository.seed(hotels).await?;
        tracing::info!(offered, inserted, "Hotel catalogue seeded");

        Ok(inserted)
    }
}
