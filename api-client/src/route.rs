use serde::Deserialize;

/// Service owning a logical endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceRoute {
    Users,
    Hotels,
    Bookings,
}

impl ServiceRoute {
    /// Pick the service for an endpoint from its first path segment.
    ///
    /// Leading slashes and the `api/v1` prefix are ignored and matching is
    /// case-insensitive. Anything not owned by users or bookings belongs to
    /// the hotel catalogue.
    pub fn resolve(endpoint: &str) -> Self {
        let segment = normalize_path(endpoint)
            .split(['/', '?'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match segment.as_str() {
            "users" | "user" | "auth" => ServiceRoute::Users,
            "bookings" | "booking" => ServiceRoute::Bookings,
            _ => ServiceRoute::Hotels,
        }
    }
}

/// Strip leading slashes and the API prefix from an endpoint.
///
/// The prefix only counts as a whole path segment, so `api/v1beta/x` is
/// left alone.
pub(crate) fn normalize_path(endpoint: &str) -> &str {
    let trimmed = endpoint.trim_start_matches('/');
    let prefix = api::API_PREFIX.trim_start_matches('/');
    trimmed
        .strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with(['/', '?']))
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(trimmed)
}

/// Base URLs of the three services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceUrls {
    pub users: String,
    pub hotels: String,
    pub bookings: String,
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self {
            users: "http://localhost:8000".to_string(),
            hotels: "http://localhost:8001".to_string(),
            bookings: "http://localhost:8002".to_string(),
        }
    }
}

impl ServiceUrls {
    pub fn base_url(&self, route: ServiceRoute) -> &str {
        match route {
            ServiceRoute::Users => &self.users,
            ServiceRoute::Hotels => &self.hotels,
            ServiceRoute::Bookings => &self.bookings,
        }
    }

    /// Absolute URL of an endpoint on the given service.
    pub fn url_for(&self, route: ServiceRoute, endpoint: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url(route).trim_end_matches('/'),
            api::API_PREFIX,
            normalize_path(endpoint)
        )
    }
}
