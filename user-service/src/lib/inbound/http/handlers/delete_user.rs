use api::ApiPath;
use auth::AuthenticatedUser;
use axum::extract::State;
use axum::Extension;

use super::update_user::ensure_self;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

pub async fn delete_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(current): Extension<AuthenticatedUser>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(UserError::from)?;
    ensure_self(&current, &user_id)?;

    state
        .user_service
        .delete_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok("User deleted successfully", ()))
}
