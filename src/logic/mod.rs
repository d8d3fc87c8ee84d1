//! Logic Module - Client Core Engines
//!
//! The prediction session controller, the chat session manager, and the
//! pure leaves they orchestrate: validation, classification, the
//! degraded-mode estimator, the risk guidance table, the service seam
//! and the health poll.

pub mod chat;
pub mod classify;
pub mod fallback;
pub mod health;
pub mod measurements;
pub mod prediction;
pub mod risk_guidance;
pub mod service;
pub mod validate;
