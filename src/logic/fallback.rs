//! Local Fallback Estimator
//!
//! DEGRADED-ACCURACY MODE. This estimator runs only when the remote
//! prediction service is unreachable or reports failure. It approximates
//! the FWI score from temperature, relative humidity and wind speed alone,
//! ignoring the other six inputs (rain and all five sub-indices), and must
//! never be presented as equivalent to a remote result: every score it
//! produces is surfaced with a fallback marker and a degraded-mode notice.

use super::measurements::MeasurementSet;

/// Upper clamp for the approximate score (0-10 display scale)
pub const MAX_SCORE: f64 = 10.0;

/// Approximate an FWI score from a subset of the inputs.
///
/// `temperature * 0.04 + (100 - rh) * 0.02 + ws * 0.01`, capped at 10.
/// There is no lower clamp: relative humidity above 100 or a negative
/// temperature can drive the result negative. That is a known artifact of
/// the approximation, left visible rather than masked.
pub fn estimate(set: &MeasurementSet) -> f64 {
    let raw = set.temperature * 0.04 + (100.0 - set.rh) * 0.02 + set.ws * 0.01;
    raw.min(MAX_SCORE)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::measurements::SAMPLES;

    fn set_with(temperature: f64, rh: f64, ws: f64) -> MeasurementSet {
        MeasurementSet {
            temperature,
            rh,
            ws,
            ..SAMPLES[0]
        }
    }

    #[test]
    fn test_reference_sample() {
        // 35*0.04 + (100-34)*0.02 + 17*0.01 = 1.4 + 1.32 + 0.17
        let score = estimate(&set_with(35.0, 34.0, 17.0));
        assert!((score - 2.89).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_but_unclamped() {
        // 100*0.04 + (100-0)*0.02 + 100*0.01 = 4 + 2 + 1
        let score = estimate(&set_with(100.0, 0.0, 100.0));
        assert!((score - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_to_ten() {
        // 300*0.04 alone is already 12
        let score = estimate(&set_with(300.0, 0.0, 100.0));
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_no_lower_clamp() {
        // rh above 100 drives the score negative; that stays visible
        let score = estimate(&set_with(-10.0, 150.0, 0.0));
        assert!(score < 0.0);
    }

    #[test]
    fn test_ignores_sub_indices() {
        let mut a = SAMPLES[0];
        let mut b = SAMPLES[0];
        a.ffmc = 0.0;
        a.rain = 99.0;
        b.ffmc = 92.2;
        b.rain = 0.0;
        assert_eq!(estimate(&a), estimate(&b));
    }
}
