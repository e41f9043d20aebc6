use axum::extract::State;
use serde::Serialize;
use shared_models::HotelListItem;

use super::ApiError;
use super::ApiSuccess;
use crate::hotel::models::PropertyType;
use crate::hotel::ports::HotelServicePort;
use crate::inbound::http::router::AppState;

/// List payload wrapped the way the web client reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Elements<T> {
    pub elements: Vec<T>,
}

impl<T> From<Vec<T>> for Elements<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub filter_id: String,
    pub title: String,
    pub filters: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub code: u32,
    pub name: String,
    pub image_url: String,
}

/// Filter panel offered by the search page.
pub fn vertical_filter_groups() -> Vec<FilterGroup> {
    let stars = [5, 4, 3]
        .iter()
        .map(|star| FilterOption {
            id: format!("{}_star_rating", star),
            title: format!("{} Star", star),
            value: Some(star.to_string()),
        })
        .collect();

    let property_types = PropertyType::all()
        .iter()
        .map(|t| FilterOption {
            id: t.filter_id(),
            title: t.title().to_string(),
            value: None,
        })
        .collect();

    vec![
        FilterGroup {
            filter_id: "star_ratings".to_string(),
            title: "Star ratings".to_string(),
            filters: stars,
        },
        FilterGroup {
            // Misspelling is part of the client contract.
            filter_id: "propety_type".to_string(),
            title: "Property type".to_string(),
            filters: property_types,
        },
    ]
}

pub fn popular_destination_list() -> Vec<Destination> {
    [
        (1211, "Mumbai", "mumbai"),
        (1212, "Bangkok", "bangkok"),
        (1213, "London", "london"),
        (1214, "Dubai", "dubai"),
        (1215, "Oslo", "oslo"),
    ]
    .into_iter()
    .map(|(code, name, slug)| Destination {
        code,
        name: name.to_string(),
        image_url: format!("/images/cities/{}.jpg", slug),
    })
    .collect()
}

pub async fn available_cities<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
) -> Result<ApiSuccess<Elements<String>>, ApiError> {
    let cities = state.hotel_service.available_cities().await?;

    Ok(ApiSuccess::ok(
        "Available cities retrieved successfully",
        cities.into(),
    ))
}

pub async fn vertical_filters() -> ApiSuccess<Elements<FilterGroup>> {
    ApiSuccess::ok(
        "Filter options retrieved successfully",
        vertical_filter_groups().into(),
    )
}

pub async fn nearby_hotels<HS: HotelServicePort>(
    State(state): State<AppState<HS>>,
) -> Result<ApiSuccess<Elements<HotelListItem>>, ApiError> {
    let hotels = state.hotel_service.nearby_hotels().await?;

    Ok(ApiSuccess::ok(
        "Nearby hotels retrieved successfully",
        Elements::from(
            hotels
                .iter()
                .map(HotelListItem::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

pub async fn popular_destinations() -> ApiSuccess<Elements<Destination>> {
    ApiSuccess::ok(
        "Popular destinations retrieved successfully",
        popular_destination_list().into(),
    )
}
