use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::response::AdapterResponse;
use crate::response::NETWORK_ERROR;
use crate::route::ServiceRoute;
use crate::route::ServiceUrls;

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Route to this service instead of guessing from the endpoint.
    pub service: Option<ServiceRoute>,
    /// Bearer token for this call, overriding the session token.
    pub token: Option<String>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn service(mut self, service: ServiceRoute) -> Self {
        self.service = Some(service);
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Routes logical endpoints to service base URLs.
///
/// Holds the signed-in user's token so callers don't pass it on every
/// request. Single attempt per call.
#[derive(Clone)]
pub struct NetworkAdapter {
    client: reqwest::Client,
    urls: ServiceUrls,
    session_token: Arc<RwLock<Option<String>>>,
}

impl NetworkAdapter {
    pub fn new(urls: ServiceUrls) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self::with_client(client, urls)
    }

    pub fn with_client(client: reqwest::Client, urls: ServiceUrls) -> Self {
        Self {
            client,
            urls,
            session_token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn urls(&self) -> &ServiceUrls {
        &self.urls
    }

    /// Remember the token returned by a login.
    pub async fn sign_in(&self, token: impl Into<String>) {
        *self.session_token.write().await = Some(token.into());
    }

    pub async fn sign_out(&self) {
        *self.session_token.write().await = None;
    }

    pub async fn is_signed_in(&self) -> bool {
        self.session_token.read().await.is_some()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> AdapterResponse<T> {
        self.send::<T, ()>(Method::GET, endpoint, None, options).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        options: RequestOptions,
    ) -> AdapterResponse<T> {
        self.send(Method::POST, endpoint, Some(body), options).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        options: RequestOptions,
    ) -> AdapterResponse<T> {
        self.send(Method::PUT, endpoint, Some(body), options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> AdapterResponse<T> {
        self.send::<T, ()>(Method::DELETE, endpoint, None, options)
            .await
    }

    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> AdapterResponse<T> {
        let route = options
            .service
            .unwrap_or_else(|| ServiceRoute::resolve(endpoint));
        let url = self.urls.url_for(route, endpoint);

        let mut request = self.client.request(method.clone(), &url);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let token = match options.token {
            Some(token) => Some(token),
            None => self.session_token.read().await.clone(),
        };
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(method = %method, url = %url, service = ?route, "Sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
                return AdapterResponse::failure(None, e.to_string(), NETWORK_ERROR);
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(bytes) => AdapterResponse::from_body(status, &bytes),
            Err(e) => {
                tracing::warn!(url = %url, status, error = %e, "Failed to read response body");
                AdapterResponse::failure(Some(status), e.to_string(), NETWORK_ERROR)
            }
        }
    }
}
