//! HTTP Service Client
//!
//! reqwest implementation of the service seam against the reference
//! deployment, which serves all three endpoints from one origin.

use std::time::Duration;

use async_trait::async_trait;

use super::{
    ChatRequest, ChatResponse, FwiService, HealthResponse, PredictRequest, PredictResponse,
    ServiceError,
};

/// Service endpoint configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            base_url: constants::get_service_url(),
            timeout_seconds: constants::get_request_timeout(),
        }
    }
}

/// HTTP client for the prediction/chat/health services
pub struct HttpFwiService {
    config: ServiceConfig,
    http_client: reqwest::Client,
}

impl HttpFwiService {
    /// Create a new service client with a bounded per-request timeout
    pub fn new(config: ServiceConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ServiceError::ParseError(e.to_string()))
        } else {
            Err(ServiceError::ServerError(response.status().as_u16()))
        }
    }
}

#[async_trait]
impl FwiService for HttpFwiService {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, ServiceError> {
        let url = format!("{}/predict", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::NetworkError(e.to_string()))?;

        Self::decode(response).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ServiceError> {
        let url = format!("{}/chat", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::NetworkError(e.to_string()))?;

        Self::decode(response).await
    }

    async fn health(&self) -> Result<HealthResponse, ServiceError> {
        let url = format!("{}/health", self.config.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::NetworkError(e.to_string()))?;

        Self::decode(response).await
    }
}
