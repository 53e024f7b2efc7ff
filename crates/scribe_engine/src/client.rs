use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use scribe_logging::{scribe_debug, TextShape};
use url::Url;

use crate::wire::{decode_error_message, decode_success, decode_welcome, encode_request};
use crate::{ApiError, Endpoint, FailureKind};

/// Where the service lives and how long the transport may wait.
///
/// Timeouts are `None` unless configured, which leaves them to reqwest's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    base_url: Url,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";

    /// Validates `base_url` as an absolute http(s) origin. A path prefix is kept
    /// and endpoint paths are resolved beneath it.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut parsed = Url::parse(base_url.trim())
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("unsupported service url {base_url}"),
            ));
        }
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        Ok(Self {
            base_url: parsed,
            connect_timeout: None,
            request_timeout: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    /// Sends `input` to `endpoint` and returns the result text.
    async fn submit(&self, endpoint: Endpoint, input: &str) -> Result<String, ApiError>;

    /// Checks that the service answers on its origin; returns its greeting.
    async fn probe(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn submit(&self, endpoint: Endpoint, input: &str) -> Result<String, ApiError> {
        let url = self.settings.endpoint_url(endpoint)?;
        let payload = encode_request(endpoint, input)?;
        scribe_debug!("POST {} ({})", url, TextShape::of(input));

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(
                ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_server_message(decode_error_message(&body)),
            );
        }

        decode_success(endpoint, &body)
    }

    async fn probe(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.settings.base_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(
                ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_server_message(decode_error_message(&body)),
            );
        }
        Ok(decode_welcome(&body).unwrap_or_else(|| status.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
