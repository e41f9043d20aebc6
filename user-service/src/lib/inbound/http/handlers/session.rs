use api::ApiJson;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use shared_models::AuthStatusData;
use shared_models::UserData;
use shared_models::TokenData;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

/// Issue an access token, returned as a bare token body and as the token cookie.
pub async fn login<US: UserServicePort>(
    State(state): State<AppState<US>>,
    jar: CookieJar,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<(CookieJar, Json<TokenData>), ApiError> {
    let (user, result) = state
        .user_service
        .login(&body.username, &body.password)
        .await?;

    tracing::info!(user_id = %user.id, "User logged in");

    let cookie = auth::access_token_cookie(
        result.access_token.clone(),
        state.authenticator.expiration_minutes(),
        state.secure_cookies,
    );

    Ok((
        jar.add(cookie),
        Json(TokenData {
            access_token: result.access_token,
            token_type: result.token_type.to_string(),
        }),
    ))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, ApiSuccess<()>) {
    (
        jar.remove(auth::removal_cookie()),
        ApiSuccess::ok("Logout successful", ()),
    )
}

/// Report whether the caller carries a valid token. Never rejects.
pub async fn auth_status<US: UserServicePort>(
    State(state): State<AppState<US>>,
    headers: HeaderMap,
) -> ApiSuccess<AuthStatusData> {
    let user_details: Option<UserData> = match auth::resolve_user(&state.authenticator, &headers) {
        Ok(current) => state
            .user_service
            .get_user(&UserId(current.user_id))
            .await
            .ok()
            .filter(|user| user.is_active)
            .map(|ref user| user.into()),
        Err(_) => None,
    };

    ApiSuccess::ok(
        "Authentication status retrieved",
        AuthStatusData {
            is_authenticated: user_details.is_some(),
            user_details,
        },
    )
}
