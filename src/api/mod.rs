pub mod auth;
pub mod clients;
pub mod envelope;
pub mod error;
pub mod freelancers;
pub mod projects;

pub use error::RequestError;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ClientConfig;

/// Thin JSON-over-HTTP client for the marketplace API.
///
/// Holds no state beyond the bearer token; every call is a fresh round trip
/// with no retry and no caching.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach (or drop) the bearer credential sent with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, RequestError> {
        let (status, body) = self
            .send(Method::GET, endpoint, query, Option::<&()>::None)
            .await?;
        self.payload(endpoint, status, body)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let (status, value) = self.send(Method::POST, endpoint, &[], Some(body)).await?;
        self.payload(endpoint, status, value)
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let (status, value) = self.send(Method::PATCH, endpoint, &[], Some(body)).await?;
        self.payload(endpoint, status, value)
    }

    /// POST whose response is a flat document rather than an envelope.
    pub(crate) async fn post_flat<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let (_, value) = self.send(Method::POST, endpoint, &[], Some(body)).await?;
        serde_json::from_value(value).map_err(|e| {
            let err = RequestError::protocol(format!("Unexpected response shape: {e}"));
            error!(endpoint, message = %err, "API error");
            err
        })
    }

    fn payload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        status: StatusCode,
        body: Value,
    ) -> Result<T, RequestError> {
        envelope::unwrap_payload(status, body).inspect_err(|e| {
            error!(endpoint, status = status.as_u16(), message = %e, "API error");
        })
    }

    /// Issue one request and return the decoded JSON body of a 2xx response.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<(StatusCode, Value), RequestError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "API request");

        let mut request = self
            .client
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let result: Result<(StatusCode, Value), RequestError> = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;

            let value = envelope::parse_body(&text)?;
            if !status.is_success() {
                return Err(RequestError::Failure {
                    status: status.as_u16(),
                    message: envelope::error_message(status, &value),
                });
            }
            Ok((status, value))
        }
        .await;

        if let Err(e) = &result {
            error!(endpoint, status = ?e.status(), message = %e, "API error");
        }
        result
    }
}
