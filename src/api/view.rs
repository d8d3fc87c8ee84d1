//! Presentation View Models
//!
//! Serializable snapshots handed to the presentation surface. They are
//! built from controller/manager outputs and never mutated by the surface.

use serde::Serialize;

use crate::logic::classify::RiskLevel;
use crate::logic::health::{OverallStatus, ServiceHealth};
use crate::logic::prediction::{PredictionResult, ScoreSource};
use crate::logic::risk_guidance;

/// Rendered form of the single live prediction result
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub score: f64,
    /// Two-decimal display form of the score
    pub display_score: String,
    pub risk_level: RiskLevel,
    pub is_high_risk: bool,
    pub threshold: f64,
    /// True when the score came from the local degraded-mode estimator
    pub degraded: bool,
    pub description: String,
    pub recommendations: Vec<String>,
    pub suggested_prompts: Vec<String>,
}

impl ResultView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let guidance = risk_guidance::for_level(result.risk_level);

        let description = if result.is_high_risk {
            format!(
                "FWI score {:.2} exceeds {} threshold. High fire risk detected.",
                result.score, result.threshold_used
            )
        } else {
            format!(
                "FWI score {:.2} is below {} threshold. Conditions are safe.",
                result.score, result.threshold_used
            )
        };

        Self {
            score: result.score,
            display_score: format!("{:.2}", result.score),
            risk_level: result.risk_level,
            is_high_risk: result.is_high_risk,
            threshold: result.threshold_used,
            degraded: result.source == ScoreSource::LocalFallback,
            description,
            recommendations: guidance
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
            suggested_prompts: guidance
                .suggested_prompts
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Global service status banner
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub overall: OverallStatus,
    pub message: String,
}

impl StatusView {
    pub fn from_health(health: &ServiceHealth) -> Self {
        let overall = health.overall();
        let message = match overall {
            OverallStatus::Operational => "System ready for predictions".to_string(),
            OverallStatus::Partial => "Some models not loaded".to_string(),
            OverallStatus::Offline => "Cannot connect to server".to_string(),
        };
        Self { overall, message }
    }
}

/// Transient notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::prediction::{PredictionResult, ScoreSource};

    fn remote_result(score: f64) -> PredictionResult {
        let class = crate::logic::classify::classify(score, 6.0);
        PredictionResult {
            score,
            is_high_risk: class.is_high_risk,
            risk_level: class.risk_level,
            threshold_used: 6.0,
            source: ScoreSource::Remote,
        }
    }

    #[test]
    fn test_result_view_safe() {
        let view = ResultView::from_result(&remote_result(2.89));
        assert_eq!(view.display_score, "2.89");
        assert!(!view.is_high_risk);
        assert!(!view.degraded);
        assert!(view.description.contains("below 6 threshold"));
        assert_eq!(view.recommendations.len(), 4);
    }

    #[test]
    fn test_result_view_high_risk() {
        let view = ResultView::from_result(&remote_result(7.5));
        assert!(view.is_high_risk);
        assert!(view.description.contains("exceeds 6 threshold"));
        assert_eq!(view.recommendations.len(), 5);
        assert_eq!(view.suggested_prompts.len(), 3);
    }

    #[test]
    fn test_result_view_marks_fallback_as_degraded() {
        let mut result = remote_result(3.0);
        result.source = ScoreSource::LocalFallback;
        assert!(ResultView::from_result(&result).degraded);
    }
}
