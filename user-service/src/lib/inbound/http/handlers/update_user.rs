use api::ApiJson;
use api::ApiPath;
use auth::AuthenticatedUser;
use axum::extract::State;
use axum::Extension;
use serde::Deserialize;
use shared_models::UserData;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let username = self.username.map(Username::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        let password = self.password.map(Password::new).transpose()?;

        Ok(UpdateUserCommand {
            username,
            email,
            password,
            is_active: self.is_active,
        })
    }
}

/// Accounts may only be changed by their owner.
pub(crate) fn ensure_self(current: &AuthenticatedUser, target: &UserId) -> Result<(), ApiError> {
    if current.user_id != target.0 {
        tracing::warn!(
            user_id = %current.user_id,
            target = %target,
            "Rejected change to another user's account"
        );
        return Err(ApiError::Forbidden(
            "Not allowed to modify another user".to_string(),
        ));
    }
    Ok(())
}

pub async fn update_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    Extension(current): Extension<AuthenticatedUser>,
    ApiPath(user_id): ApiPath<String>,
    ApiJson(body): ApiJson<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(UserError::from)?;
    ensure_self(&current, &user_id)?;

    state
        .user_service
        .update_user(&user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::ok("User updated successfully", user.into()))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_ensure_self() {
        let current = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: None,
        };

        assert!(ensure_self(&current, &UserId(current.user_id)).is_ok());
        assert!(matches!(
            ensure_self(&current, &UserId::new()),
            Err(ApiError::Forbidden(_))
        ));
    }
}
