use std::sync::Arc;

use api::ApiError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use uuid::Uuid;

use crate::authenticator::Authenticator;
use crate::jwt::Claims;

/// Name of the cookie holding the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Identity resolved from a valid access token.
///
/// Inserted into request extensions by [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub email: Option<String>,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = ApiError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims.user_id().ok_or_else(|| {
            tracing::warn!(sub = ?claims.sub, "Token subject is not a user id");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })?;

        Ok(Self {
            user_id,
            username: claims.username().unwrap_or_default(),
            email: claims.email(),
        })
    }
}

/// Read the access token from `Authorization: Bearer` or the token cookie.
///
/// The header wins when both are present.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim().to_string())
        .filter(|token| !token.is_empty());

    from_header.or_else(|| {
        CookieJar::from_headers(headers)
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    })
}

/// Resolve the caller from request headers.
///
/// # Errors
/// * `Unauthorized("Authentication required")` - No token supplied
/// * `Unauthorized("Invalid or expired token")` - Token failed validation
pub fn resolve_user(
    authenticator: &Authenticator,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, ApiError> {
    let token = extract_token(headers)
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    let claims = authenticator.verify_token(&token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    AuthenticatedUser::try_from(claims)
}

/// Middleware rejecting requests without a valid access token.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_user(&authenticator, req.headers())?;
    tracing::debug!(user_id = %user.user_id, "Request authenticated");

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// HttpOnly cookie carrying a freshly issued token.
///
/// Expires together with the token it carries.
pub fn access_token_cookie(
    token: String,
    expiration_minutes: i64,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::minutes(expiration_minutes))
        .build()
}

/// Cookie that clears the token cookie when passed to `CookieJar::remove`.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE).path("/").build()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::HeaderValue;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"middleware_secret_at_least_32_bytes";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, 30)
    }

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).expect("Invalid header"));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer abc.def.ghi");
        assert_eq!(extract_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_extract_bearer_scheme_is_case_insensitive() {
        let headers = headers_with(header::AUTHORIZATION, "bearer abc");
        assert_eq!(extract_token(&headers), Some("abc".to_string()));
    }

    #[test]
    fn test_extract_falls_back_to_cookie() {
        let headers = headers_with(header::COOKIE, "theme=dark; access_token=from-cookie");
        assert_eq!(extract_token(&headers), Some("from-cookie".to_string()));
    }

    #[test]
    fn test_extract_ignores_other_schemes() {
        let headers = headers_with(header::AUTHORIZATION, "Basic dXNlcjpwYXNz");
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_resolve_user_missing_token() {
        let result = resolve_user(&authenticator(), &HeaderMap::new());
        assert_eq!(
            result,
            Err(ApiError::Unauthorized("Authentication required".to_string()))
        );
    }

    #[test]
    fn test_resolve_user_invalid_token() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer not-a-token");
        let result = resolve_user(&authenticator(), &headers);
        assert_eq!(
            result,
            Err(ApiError::Unauthorized("Invalid or expired token".to_string()))
        );
    }

    #[test]
    fn test_resolve_user_valid_token() {
        let authenticator = authenticator();
        let user_id = Uuid::new_v4();
        let token = authenticator
            .issue_token(user_id, "carol", "carol@example.com")
            .expect("Failed to issue token");

        let headers = headers_with(header::AUTHORIZATION, &format!("Bearer {}", token));
        let user = resolve_user(&authenticator, &headers).expect("Failed to resolve user");

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.username, "carol");
        assert_eq!(user.email.as_deref(), Some("carol@example.com"));
    }

    #[test]
    fn test_access_token_cookie_attributes() {
        let cookie = access_token_cookie("tok".to_string(), 30, true);

        assert_eq!(cookie.name(), ACCESS_TOKEN_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_access_token_cookie_lives_as_long_as_token() {
        let authenticator = authenticator();
        let cookie = access_token_cookie(
            "tok".to_string(),
            authenticator.expiration_minutes(),
            false,
        );

        assert_eq!(cookie.max_age(), Some(time::Duration::minutes(30)));
        assert!(cookie.to_string().contains("Max-Age=1800"));
    }

    fn protected_router(authenticator: Arc<Authenticator>) -> Router {
        Router::new()
            .route(
                "/me",
                get(|Extension(user): Extension<AuthenticatedUser>| async move { user.username }),
            )
            .route_layer(axum::middleware::from_fn_with_state(
                authenticator,
                authenticate,
            ))
    }

    #[tokio::test]
    async fn test_middleware_rejects_anonymous_request() {
        let response = protected_router(Arc::new(authenticator()))
            .oneshot(
                axum::http::Request::get("/me")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_passes_authenticated_user() {
        let authenticator = Arc::new(authenticator());
        let token = authenticator
            .issue_token(Uuid::new_v4(), "dave", "dave@example.com")
            .expect("Failed to issue token");

        let response = protected_router(Arc::clone(&authenticator))
            .oneshot(
                axum::http::Request::get("/me")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
