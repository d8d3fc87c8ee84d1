//! Risk Guidance Table
//!
//! Static per-level reference data: a one-line description, operator
//! recommendations and suggested assistant prompts. Read-only, no lifecycle.

use super::classify::RiskLevel;

/// Guidance attached to one risk level
#[derive(Debug, Clone, Copy)]
pub struct RiskGuidance {
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub suggested_prompts: &'static [&'static str],
}

static SAFE_GUIDANCE: RiskGuidance = RiskGuidance {
    description: "FWI score below 6.0 threshold",
    recommendations: &[
        "Fire conditions are within safe limits",
        "Standard fire precautions are sufficient",
        "Maintain regular monitoring",
        "Ensure fire equipment is accessible",
    ],
    suggested_prompts: &[
        "What does this FWI score mean for fire risk?",
        "How should I interpret this safe FWI score?",
        "What precautions should I take with this score?",
    ],
};

static HIGH_RISK_GUIDANCE: RiskGuidance = RiskGuidance {
    description: "FWI score exceeds 6.0 threshold",
    recommendations: &[
        "High fire risk detected!",
        "Increase fire patrol frequency",
        "Activate fire watch procedures",
        "Prepare fire suppression teams",
        "Issue public warnings if necessary",
    ],
    suggested_prompts: &[
        "What actions should I take for high FWI scores?",
        "How dangerous is this FWI level?",
        "What causes FWI scores to be this high?",
    ],
};

/// Guidance for a risk level
pub fn for_level(level: RiskLevel) -> &'static RiskGuidance {
    match level {
        RiskLevel::Safe => &SAFE_GUIDANCE,
        RiskLevel::HighRisk => &HIGH_RISK_GUIDANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_have_distinct_guidance() {
        let safe = for_level(RiskLevel::Safe);
        let high = for_level(RiskLevel::HighRisk);

        assert_ne!(safe.description, high.description);
        assert_eq!(safe.recommendations.len(), 4);
        assert_eq!(high.recommendations.len(), 5);
        assert_eq!(safe.suggested_prompts.len(), 3);
        assert_eq!(high.suggested_prompts.len(), 3);
    }
}
