use std::sync::Arc;

use api::ApiSuccess;
use api::ServiceInfo;
use api::API_PREFIX;
use auth::Authenticator;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_current_user;
use super::handlers::get_user::get_user;
use super::handlers::get_user::get_user_by_email;
use super::handlers::get_user::get_user_by_username;
use super::handlers::list_users::list_users;
use super::handlers::register::register;
use super::handlers::session::auth_status;
use super::handlers::session::login;
use super::handlers::session::logout;
use super::handlers::update_user::update_user;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<US: UserServicePort> {
    pub user_service: Arc<US>,
    pub authenticator: Arc<Authenticator>,
    pub secure_cookies: bool,
}

impl<US: UserServicePort> Clone for AppState<US> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            authenticator: Arc::clone(&self.authenticator),
            secure_cookies: self.secure_cookies,
        }
    }
}

async fn service_info() -> ApiSuccess<ServiceInfo> {
    ApiSuccess::ok(
        "Users service is running",
        ServiceInfo::new("user-service", env!("CARGO_PKG_VERSION")),
    )
}

pub fn create_router<US: UserServicePort>(
    user_service: Arc<US>,
    authenticator: Arc<Authenticator>,
    secure_cookies: bool,
) -> Router {
    let state = AppState {
        user_service,
        authenticator: Arc::clone(&authenticator),
        secure_cookies,
    };

    let public_routes = Router::new()
        .route("/users/register", post(register::<US>))
        .route("/auth/login", post(login::<US>))
        .route("/auth/logout", post(logout))
        .route("/auth/status", get(auth_status::<US>));

    let protected_routes = Router::new()
        .route("/users", get(list_users::<US>))
        .route("/users/me", get(get_current_user::<US>))
        .route("/users/by-email/:email", get(get_user_by_email::<US>))
        .route(
            "/users/by-username/:username",
            get(get_user_by_username::<US>),
        )
        .route(
            "/users/:user_id",
            get(get_user::<US>)
                .put(update_user::<US>)
                .delete(delete_user::<US>),
        )
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            auth::authenticate,
        ));

    let router = Router::new()
        .route("/", get(service_info))
        .nest(API_PREFIX, public_routes.merge(protected_routes));

    api::with_http_layers(router).with_state(state)
}
