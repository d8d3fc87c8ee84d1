//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default service endpoint, only edit this file.

/// Default prediction/chat service URL
///
/// This is the fallback URL when no environment variable is set.
/// The reference deployment serves all three endpoints from one origin.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Default FWI risk threshold (scores at or above are HIGH RISK)
pub const DEFAULT_RISK_THRESHOLD: f64 = 6.0;

/// Default request timeout (seconds) for all service calls
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10;

/// Number of trailing transcript entries sent as chat context
pub const CHAT_HISTORY_WINDOW: usize = 6;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "FWI Risk Console";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get service URL from environment or use default
pub fn get_service_url() -> String {
    std::env::var("FWI_SERVICE_URL")
        .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string())
}

/// Get risk threshold from environment or use default
pub fn get_risk_threshold() -> f64 {
    std::env::var("FWI_RISK_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RISK_THRESHOLD)
}

/// Get request timeout (seconds) from environment or use default
pub fn get_request_timeout() -> u64 {
    std::env::var("FWI_REQUEST_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
}
