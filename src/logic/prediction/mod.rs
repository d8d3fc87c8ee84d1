//! Prediction Session Controller
//!
//! Orchestrates one prediction cycle: validate -> submit -> await ->
//! render-or-fallback. At most one cycle is ever in flight; a predict
//! action issued while one is outstanding is dropped, and a generation
//! counter discards responses that a results reset made stale.


use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::api::sink::PresentationSink;
use crate::api::view::{Notice, ResultView};

use super::classify::{classify, RiskLevel};
use super::fallback;
use super::measurements::{MeasurementForm, MeasurementSet};
use super::service::{FwiService, PredictRequest};
use super::validate::{self, FieldValidity};

/// Where a rendered score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreSource {
    /// The remote inference service
    Remote,
    /// The local degraded-mode estimator
    LocalFallback,
}

/// The single live result of a prediction cycle.
///
/// `is_high_risk` always equals `score >= threshold_used`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub score: f64,
    pub is_high_risk: bool,
    pub risk_level: RiskLevel,
    pub threshold_used: f64,
    pub source: ScoreSource,
}

/// Outcome of one predict action
#[derive(Debug, Clone)]
pub enum PredictOutcome {
    /// A result was rendered (remote or fallback)
    Completed(PredictionResult),
    /// Validation failed; no request was sent
    Rejected(FieldValidity),
    /// Another cycle was already in flight
    Dropped,
    /// The response arrived after a results reset and was discarded
    Superseded,
}

pub struct PredictionController {
    service: Arc<dyn FwiService>,
    sink: Arc<dyn PresentationSink>,
    threshold: f64,
    generation: AtomicU64,
    in_flight: AtomicBool,
    current: RwLock<Option<PredictionResult>>,
}

impl PredictionController {
    pub fn new(
        service: Arc<dyn FwiService>,
        sink: Arc<dyn PresentationSink>,
        threshold: f64,
    ) -> Self {
        Self {
            service,
            sink,
            threshold,
            generation: AtomicU64::new(0),
            in_flight: AtomicBool::new(false),
            current: RwLock::new(None),
        }
    }

    /// Snapshot of the current result, if one is live
    pub fn current_result(&self) -> Option<PredictionResult> {
        self.current.read().clone()
    }

    /// Run one prediction cycle from the given form state.
    pub async fn predict(&self, form: &MeasurementForm) -> PredictOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("Predict action dropped: a cycle is already in flight");
            return PredictOutcome::Dropped;
        }

        // Validating
        let validity = validate::validate_all(form);
        self.sink.show_field_validity(&validity);
        if !validity.all_valid() {
            self.sink
                .notify(&Notice::error("Please fill all fields with valid numbers"));
            self.in_flight.store(false, Ordering::SeqCst);
            return PredictOutcome::Rejected(validity);
        }

        // A fully valid form always captures; the guard covers a form
        // mutated between the two calls.
        let set = match validate::capture(form) {
            Some(set) => set,
            None => {
                self.in_flight.store(false, Ordering::SeqCst);
                return PredictOutcome::Rejected(validity);
            }
        };

        // Submitting
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.sink.prediction_busy(true);

        let response = self.service.predict(PredictRequest::from_form(form)).await;

        self.sink.prediction_busy(false);
        self.in_flight.store(false, Ordering::SeqCst);

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Prediction response discarded: generation {} is stale", generation);
            return PredictOutcome::Superseded;
        }

        let result = match response {
            Ok(reply) => match (reply.success, reply.fwi_score) {
                (true, Some(score)) => {
                    // Succeeded: service-reported threshold wins when present
                    let threshold = reply.threshold.unwrap_or(self.threshold);
                    let class = classify(score, threshold);
                    self.sink.notify(&Notice::success("Prediction successful"));
                    PredictionResult {
                        score,
                        is_high_risk: class.is_high_risk,
                        risk_level: class.risk_level,
                        threshold_used: threshold,
                        source: ScoreSource::Remote,
                    }
                }
                _ => {
                    let reason = reply
                        .error
                        .unwrap_or_else(|| "service reported failure".to_string());
                    log::warn!("Prediction service failure: {}", reason);
                    self.fallback_result(&set)
                }
            },
            Err(e) => {
                log::warn!("Prediction transport failure: {}", e);
                self.fallback_result(&set)
            }
        };

        *self.current.write() = Some(result.clone());
        self.sink.show_result(&ResultView::from_result(&result));

        PredictOutcome::Completed(result)
    }

    /// Clear the current result and invalidate any in-flight cycle.
    ///
    /// Idempotent: a second call observes the same cleared state.
    pub fn reset_results(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.current.write() = None;
        self.sink.clear_result();
    }

    /// FallbackApplied: estimate locally and surface one degraded-mode notice
    fn fallback_result(&self, set: &MeasurementSet) -> PredictionResult {
        let score = fallback::estimate(set);
        let class = classify(score, self.threshold);
        self.sink.notify(&Notice::warning(
            "Prediction service unavailable - showing local approximate score (degraded mode)",
        ));
        PredictionResult {
            score,
            is_high_risk: class.is_high_risk,
            risk_level: class.risk_level,
            threshold_used: self.threshold,
            source: ScoreSource::LocalFallback,
        }
    }
}
