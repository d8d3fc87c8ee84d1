//! Remote Service Seam
//!
//! Wire contracts for the three endpoints the core consumes (`/predict`,
//! `/chat`, `/health`) and the trait boundary the session controllers
//! depend on, so they can be driven against scripted services in tests.

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::{HttpFwiService, ServiceConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::measurements::{Field, MeasurementForm};

// ============================================================================
// WIRE TYPES
// ============================================================================

/// `POST /predict` body: all nine fields as strings, exactly as entered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub temperature: String,
    pub rh: String,
    pub ws: String,
    pub rain: String,
    pub ffmc: String,
    pub dmc: String,
    pub dc: String,
    pub isi: String,
    pub bui: String,
}

impl PredictRequest {
    /// Build the request from raw form state
    pub fn from_form(form: &MeasurementForm) -> Self {
        Self {
            temperature: form.get(Field::Temperature).to_string(),
            rh: form.get(Field::RelativeHumidity).to_string(),
            ws: form.get(Field::WindSpeed).to_string(),
            rain: form.get(Field::Rain).to_string(),
            ffmc: form.get(Field::Ffmc).to_string(),
            dmc: form.get(Field::Dmc).to_string(),
            dc: form.get(Field::Dc).to_string(),
            isi: form.get(Field::Isi).to_string(),
            bui: form.get(Field::Bui).to_string(),
        }
    }
}

/// `POST /predict` response
///
/// `risk_icon` is a presentation detail of the reference page; it is
/// accepted and ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub fwi_score: Option<f64>,
    #[serde(default)]
    pub is_high_risk: Option<bool>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub risk_icon: Option<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One transcript entry as the chat service expects it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub is_user: bool,
    pub text: String,
    pub timestamp: String,
}

/// `POST /chat` body: the new message plus the trailing context window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatHistoryEntry>,
}

/// `POST /chat` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /health` response; absent flags read as false
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub scaler_loaded: bool,
    #[serde(default)]
    pub gemini_configured: bool,
}

// ============================================================================
// SERVICE TRAIT
// ============================================================================

/// The remote endpoints the core consumes.
///
/// One implementation talks HTTP; tests script another.
#[async_trait]
pub trait FwiService: Send + Sync {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, ServiceError>;
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ServiceError>;
    async fn health(&self) -> Result<HealthResponse, ServiceError>;
}

// ============================================================================
// ERRORS
// ============================================================================

/// Service call errors
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Request could not complete (connect, DNS, timeout)
    NetworkError(String),
    /// Request completed with a non-success HTTP status
    ServerError(u16),
    /// Response body could not be decoded
    ParseError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError(e) => write!(f, "Network error: {}", e),
            Self::ServerError(code) => write!(f, "Server error: {}", code),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::measurements::{MeasurementForm, SAMPLES};

    #[test]
    fn test_predict_request_carries_raw_strings() {
        let mut form = MeasurementForm::new();
        form.load(&SAMPLES[2]);

        let request = PredictRequest::from_form(&form);
        assert_eq!(request.temperature, "39");
        assert_eq!(request.rain, "0.2");
        assert_eq!(request.bui, "15.8");
    }

    #[test]
    fn test_predict_response_tolerates_missing_fields() {
        let reply: PredictResponse =
            serde_json::from_str(r#"{"success": false, "error": "Models not found"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.fwi_score, None);
        assert_eq!(reply.error.as_deref(), Some("Models not found"));
    }

    #[test]
    fn test_health_response_defaults_absent_flags() {
        // The reference /health omits the assistant flag entirely
        let health: HealthResponse =
            serde_json::from_str(r#"{"model_loaded": true, "scaler_loaded": true}"#).unwrap();
        assert!(health.model_loaded);
        assert!(!health.gemini_configured);
    }
}
