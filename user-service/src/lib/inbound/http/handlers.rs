pub use api::ApiError;
pub use api::ApiSuccess;
use shared_models::UserData;

use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod register;
pub mod session;
pub mod update_user;

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_)
            | UserError::NotFoundByUsername(_)
            | UserError::NotFoundByEmail(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials | UserError::AccountDisabled => {
                ApiError::Unauthorized(err.to_string())
            }
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_)
            | UserError::Password(crate::user::errors::PasswordError::Empty) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::user::errors::PasswordError;
    use crate::user::errors::UsernameError;

    #[test]
    fn test_user_error_status_mapping() {
        let cases = [
            (UserError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                UserError::EmailAlreadyExists("a@b.c".into()),
                StatusCode::CONFLICT,
            ),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (UserError::AccountDisabled, StatusCode::UNAUTHORIZED),
            (
                UserError::InvalidUsername(UsernameError::InvalidCharacters),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                UserError::Password(PasswordError::Empty),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                UserError::Password(PasswordError::HashingFailed("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::DatabaseError("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_credential_messages_are_exact() {
        assert_eq!(
            ApiError::from(UserError::InvalidCredentials).message(),
            "Invalid username or password"
        );
        assert_eq!(
            ApiError::from(UserError::AccountDisabled).message(),
            "Account is disabled"
        );
    }
}
