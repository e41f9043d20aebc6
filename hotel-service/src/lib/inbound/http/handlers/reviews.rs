use std::collections::BTreeMap;

use api::ApiJson;
use api::ApiPath;
use api::ApiQuery;
use auth::AuthenticatedUser;
use axum::extract::State;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;
use shared_models::ReviewData;

use super::ApiError;
use super::ApiSuccess;
use crate::hotel::errors::HotelError;
use crate::hotel::models::HotelCode;
use crate::hotel::models::NewReview;
use crate::hotel::models::Review;
use crate::hotel::models::ReviewPage;
use crate::hotel::ports::HotelServicePort;
use crate::inbound::http::router::AppState;

const REVIEW_ADDED: &str = "Review added successfully";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsQuery {
    current_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewMetadata {
    pub total_reviews: u64,
    pub average_rating: String,
    /// Keyed `"1"` to `"5"`.
    pub star_counts: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewsData {
    pub elements: Vec<ReviewData>,
    pub metadata: ReviewMetadata,
    pub paging: Paging,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            reviewer_name: review.reviewer_name.clone(),
            rating: review.rating,
            review: review.review.clone(),
            date: review.date.clone(),
            verified: review.verified,
        }
    }
}

impl From<ReviewPage> for ReviewsData {
    fn from(page: ReviewPage) -> Self {
        let star_counts = page
            .stats
            .star_counts
            .iter()
            .enumerate()
            .map(|(i, count)| ((i + 1).to_string(), *count))
            .collect();

        Self {
            elements: page.reviews.iter().map(ReviewData::from).collect(),
            metadata: ReviewMetadata {
                total_reviews: page.stats.total_reviews,
                average_rating: page.stats.average_display(),
                star_counts,
            },
            paging: Paging {
                current_page: page.page,
                total_pages: api::response::total_pages(page.total, page.page_size),
                page_size: page.page_size,
            },
        }
    }
}

pub async fn hotel_reviews<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
    ApiPath(hotel_code): ApiPath<i32>,
    ApiQuery(query): ApiQuery<ReviewsQuery>,
) -> Result<ApiSuccess<ReviewsData>, ApiError> {
    let page = query.current_page.unwrap_or(1);
    if page < 1 {
        return Err(ApiError::UnprocessableEntity(
            "currentPage must be at least 1".to_string(),
        ));
    }

    let reviews = state
        .hotel_service
        .hotel_reviews(HotelCode(hotel_code), page)
        .await?;

    Ok(ApiSuccess::ok(
        "Hotel reviews retrieved successfully",
        ReviewsData::from(reviews),
    ))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    hotel_id: i32,
    #[serde(default)]
    reviewer_name: Option<String>,
    rating: f64,
    review: String,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewStatus {
    pub status: String,
}

/// Store a review written by the signed-in user. The reviewer name falls
/// back to the account's username.
pub async fn add_review<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
    Extension(current): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<AddReviewRequest>,
) -> Result<ApiSuccess<ReviewStatus>, ApiError> {
    let reviewer_name = body
        .reviewer_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| current.username.clone());

    let review = NewReview::submitted(
        current.user_id,
        reviewer_name,
        body.rating,
        body.review,
        body.date,
    )
    .map_err(HotelError::from)?;

    state
        .hotel_service
        .add_review(HotelCode(body.hotel_id), review)
        .await?;

    Ok(ApiSuccess::ok(
        REVIEW_ADDED,
        ReviewStatus {
            status: REVIEW_ADDED.to_string(),
        },
    ))
}
