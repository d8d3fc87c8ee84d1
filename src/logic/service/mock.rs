//! Scripted Service for Tests
//!
//! In-memory `FwiService` whose responses are queued ahead of time and
//! whose requests are recorded for inspection. An optional gate holds
//! every call at the network boundary until the test releases it, which
//! is how the in-flight interleavings are driven deterministically.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::{
    ChatRequest, ChatResponse, FwiService, HealthResponse, PredictRequest, PredictResponse,
    ServiceError,
};

#[derive(Default)]
pub struct ScriptedService {
    predict_queue: Mutex<VecDeque<Result<PredictResponse, ServiceError>>>,
    chat_queue: Mutex<VecDeque<Result<ChatResponse, ServiceError>>>,
    health_queue: Mutex<VecDeque<Result<HealthResponse, ServiceError>>>,
    pub predict_requests: Mutex<Vec<PredictRequest>>,
    pub chat_requests: Mutex<Vec<ChatRequest>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every subsequent call until the gate is notified
    pub fn gate_on(&self, gate: Arc<Notify>) {
        *self.gate.lock() = Some(gate);
    }

    pub fn push_predict(&self, reply: Result<PredictResponse, ServiceError>) {
        self.predict_queue.lock().push_back(reply);
    }

    pub fn push_chat(&self, reply: Result<ChatResponse, ServiceError>) {
        self.chat_queue.lock().push_back(reply);
    }

    pub fn push_health(&self, reply: Result<HealthResponse, ServiceError>) {
        self.health_queue.lock().push_back(reply);
    }

    pub fn predict_call_count(&self) -> usize {
        self.predict_requests.lock().len()
    }

    pub fn chat_call_count(&self) -> usize {
        self.chat_requests.lock().len()
    }

    async fn wait_at_gate(&self) {
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn unscripted<T>() -> Result<T, ServiceError> {
        Err(ServiceError::NetworkError("no scripted response".to_string()))
    }
}

#[async_trait]
impl FwiService for ScriptedService {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, ServiceError> {
        self.predict_requests.lock().push(request);
        self.wait_at_gate().await;
        self.predict_queue
            .lock()
            .pop_front()
            .unwrap_or_else(Self::unscripted)
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ServiceError> {
        self.chat_requests.lock().push(request);
        self.wait_at_gate().await;
        self.chat_queue
            .lock()
            .pop_front()
            .unwrap_or_else(Self::unscripted)
    }

    async fn health(&self) -> Result<HealthResponse, ServiceError> {
        self.wait_at_gate().await;
        self.health_queue
            .lock()
            .pop_front()
            .unwrap_or_else(Self::unscripted)
    }
}

/// A predict reply shaped like the reference service's success path
pub fn predict_success(score: f64, threshold: f64) -> PredictResponse {
    PredictResponse {
        success: true,
        fwi_score: Some(score),
        is_high_risk: Some(score >= threshold),
        risk_level: Some(if score >= threshold { "HIGH RISK" } else { "SAFE" }.to_string()),
        risk_icon: None,
        threshold: Some(threshold),
        error: None,
    }
}

/// A predict reply shaped like the reference service's failure path
pub fn predict_failure(error: &str) -> PredictResponse {
    PredictResponse {
        success: false,
        error: Some(error.to_string()),
        ..Default::default()
    }
}

/// A chat reply with the given answer text
pub fn chat_success(answer: &str) -> ChatResponse {
    ChatResponse {
        success: true,
        response: Some(answer.to_string()),
        error: None,
    }
}

/// A chat reply reporting failure
pub fn chat_failure(error: &str) -> ChatResponse {
    ChatResponse {
        success: false,
        response: None,
        error: Some(error.to_string()),
    }
}
