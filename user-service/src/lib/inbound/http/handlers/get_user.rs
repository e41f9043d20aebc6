use api::ApiPath;
use auth::AuthenticatedUser;
use axum::extract::State;
use axum::Extension;
use shared_models::UserData;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

const USER_RETRIEVED: &str = "User retrieved successfully";

pub async fn get_current_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .get_user(&UserId(current.user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::ok(USER_RETRIEVED, user.into()))
}

pub async fn get_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::ok(USER_RETRIEVED, user.into()))
}

pub async fn get_user_by_email<US: UserServicePort>(
    State(state): State<AppState<US>>,
    ApiPath(email): ApiPath<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let email =
        EmailAddress::new(email).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::ok(USER_RETRIEVED, user.into()))
}

pub async fn get_user_by_username<US: UserServicePort>(
    State(state): State<AppState<US>>,
    ApiPath(username): ApiPath<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username =
        Username::new(username).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::ok(USER_RETRIEVED, user.into()))
}
