use api::ApiQuery;
use api::PaginatedResponse;
use axum::extract::State;
use chrono::NaiveDate;
use serde::Serialize;
use shared_models::HotelListItem;

use super::ApiError;
use crate::hotel::errors::HotelError;
use crate::hotel::ports::HotelServicePort;
use crate::hotel::search::SearchCriteria;
use crate::hotel::search::SearchFacets;
use crate::hotel::search::SearchParams;
use crate::inbound::http::router::AppState;

/// Facet counts plus the stay parameters echoed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    #[serde(flatten)]
    pub facets: SearchFacets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
}

pub async fn search_hotels<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<PaginatedResponse<HotelListItem, SearchMetadata>, ApiError> {
    let criteria = SearchCriteria::parse(params).map_err(HotelError::from)?;
    let guests = criteria.guests;

    let page = state.hotel_service.search_hotels(criteria).await?;

    let metadata = SearchMetadata {
        facets: page.facets,
        check_in: page.stay.map(|s| s.check_in),
        check_out: page.stay.map(|s| s.check_out),
        guests,
    };

    Ok(PaginatedResponse::new(
        "Hotels retrieved successfully",
        page.hotels.iter().map(HotelListItem::from).collect(),
        page.page,
        page.page_size,
        page.total,
    )
    .with_metadata(metadata))
}
