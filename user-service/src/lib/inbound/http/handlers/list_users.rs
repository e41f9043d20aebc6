use api::ApiQuery;
use api::PaginatedResponse;
use axum::extract::State;
use serde::Deserialize;
use shared_models::UserData;

use super::ApiError;
use crate::domain::user::models::UserListQuery;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListUsersParams {
    skip: Option<u32>,
    limit: Option<u32>,
}

impl ListUsersParams {
    fn try_into_query(self) -> Result<UserListQuery, ApiError> {
        let limit = self.limit.unwrap_or(UserListQuery::DEFAULT_LIMIT);
        if !(1..=UserListQuery::MAX_LIMIT).contains(&limit) {
            return Err(ApiError::UnprocessableEntity(format!(
                "limit must be between 1 and {}",
                UserListQuery::MAX_LIMIT
            )));
        }

        Ok(UserListQuery {
            skip: self.skip.unwrap_or(0),
            limit,
        })
    }
}

pub async fn list_users<US: UserServicePort>(
    State(state): State<AppState<US>>,
    ApiQuery(params): ApiQuery<ListUsersParams>,
) -> Result<PaginatedResponse<UserData>, ApiError> {
    let query = params.try_into_query()?;
    let (users, total) = state.user_service.list_users(query).await?;

    Ok(PaginatedResponse::new(
        "Users retrieved successfully",
        users.iter().map(UserData::from).collect(),
        query.page(),
        query.limit,
        total,
    ))
}
