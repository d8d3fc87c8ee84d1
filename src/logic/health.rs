//! Service Health Poll
//!
//! One-shot readiness snapshot of the remote service, fetched at startup
//! and on demand after failures. There is no background polling loop. A
//! transport failure yields an all-false snapshot instead of an error;
//! health never blocks anything else.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::service::FwiService;

/// Readiness flags from the most recent poll
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub model_loaded: bool,
    pub scaler_loaded: bool,
    pub assistant_configured: bool,
    pub polled_at: DateTime<Utc>,
}

/// Derived banner status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallStatus {
    Operational,
    Partial,
    Offline,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Operational => "OPERATIONAL",
            OverallStatus::Partial => "PARTIAL",
            OverallStatus::Offline => "OFFLINE",
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ServiceHealth {
    /// Snapshot for an unreachable service: every flag false
    pub fn unavailable() -> Self {
        Self {
            model_loaded: false,
            scaler_loaded: false,
            assistant_configured: false,
            polled_at: Utc::now(),
        }
    }

    /// Operational needs both model and scaler; all-false is Offline.
    pub fn overall(&self) -> OverallStatus {
        if self.model_loaded && self.scaler_loaded {
            OverallStatus::Operational
        } else if self.model_loaded || self.scaler_loaded || self.assistant_configured {
            OverallStatus::Partial
        } else {
            OverallStatus::Offline
        }
    }
}

/// Poll the service once.
pub async fn poll(service: &dyn FwiService) -> ServiceHealth {
    match service.health().await {
        Ok(reply) => ServiceHealth {
            model_loaded: reply.model_loaded,
            scaler_loaded: reply.scaler_loaded,
            assistant_configured: reply.gemini_configured,
            polled_at: Utc::now(),
        },
        Err(e) => {
            log::warn!("Health poll failed: {}", e);
            ServiceHealth::unavailable()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
