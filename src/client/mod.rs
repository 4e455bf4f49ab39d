//! HTTP client for the device TTS service.
//!
//! Endpoints: `POST /speak`, `GET /status`, `GET /health`. One request per
//! call, no retries.

pub mod types;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
pub use types::{
    clamp_rate, rate_in_range, ErrorBody, Field, HealthResponse, SpeakRequest, SpeakResponse,
    StatusResponse, DEFAULT_RATE, MAX_RATE, MIN_RATE,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("cannot reach {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("service didn't respond in time")]
    Timeout,
    #[error("HTTP {status}: {}", .error.as_deref().unwrap_or("no error detail"))]
    Api { status: u16, error: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("{0}")]
    Http(#[source] reqwest::Error),
}

pub struct TtsClient {
    base_url: String,
    http: Client,
}

impl TtsClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_timeout(&config.base_url(), config.timeout())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        // The device sits on the local network; never route through a system proxy
        let http = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() {
            ClientError::Connect {
                url: self.base_url.clone(),
                source: err,
            }
        } else if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err)
        } else {
            ClientError::Http(err)
        }
    }

    /// Turn a non-2xx reply into `ClientError::Api`, keeping the device's
    /// `error` field when the body is JSON.
    async fn check_status(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let error = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error.into_value());
        Err(ClientError::Api {
            status: status.as_u16(),
            error,
        })
    }

    async fn decode<T: DeserializeOwned>(&self, resp: Response) -> Result<T, ClientError> {
        let resp = Self::check_status(resp).await?;
        resp.json::<T>().await.map_err(|e| self.classify(e))
    }

    /// Queue text on the device. The request's rates are already clamped.
    pub async fn speak(&self, request: &SpeakRequest) -> Result<SpeakResponse, ClientError> {
        debug!(
            "POST /speak ({} chars, speed {}, pitch {})",
            request.text.chars().count(),
            request.speed,
            request.pitch
        );
        let resp = self
            .http
            .post(self.url("/speak"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.decode(resp).await
    }

    pub async fn status(&self) -> Result<StatusResponse, ClientError> {
        debug!("GET /status");
        let resp = self
            .http
            .get(self.url("/status"))
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.decode(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        debug!("GET /health");
        let resp = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json::<HealthResponse>().await.unwrap_or_default())
    }
}
