//! Input Validation
//!
//! Presence/numeric-ness checks for the nine form fields. Malformed input
//! is a normal negative result, never an error value, and per-field detail
//! is kept so the presentation layer can flag individual inputs.

use serde::Serialize;

use super::measurements::{Field, MeasurementForm, MeasurementSet, FIELD_COUNT};

/// Parse a raw form value, if it is a finite number.
///
/// Surrounding whitespace is ignored. NaN and infinities do not count.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check a single raw field value
pub fn validate_field(raw: &str) -> bool {
    parse_value(raw).is_some()
}

/// Per-field validation outcome for one form snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidity {
    valid: [bool; FIELD_COUNT],
}

impl FieldValidity {
    pub fn is_valid(&self, field: Field) -> bool {
        self.valid[Field::ALL.iter().position(|f| *f == field).unwrap_or(0)]
    }

    /// True iff every one of the nine fields is individually valid
    pub fn all_valid(&self) -> bool {
        self.valid.iter().all(|v| *v)
    }

    /// The fields that failed, in wire order
    pub fn failed_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .zip(self.valid.iter())
            .filter(|(_, ok)| !**ok)
            .map(|(f, _)| *f)
            .collect()
    }
}

/// Validate every field of the form.
pub fn validate_all(form: &MeasurementForm) -> FieldValidity {
    let mut valid = [false; FIELD_COUNT];
    for (slot, field) in valid.iter_mut().zip(Field::ALL) {
        *slot = validate_field(form.get(field));
    }
    FieldValidity { valid }
}

/// Capture a numeric measurement set from a fully valid form.
///
/// Returns `None` if any field fails validation; callers are expected to
/// have run `validate_all` first and surfaced the per-field detail.
pub fn capture(form: &MeasurementForm) -> Option<MeasurementSet> {
    Some(MeasurementSet {
        temperature: parse_value(form.get(Field::Temperature))?,
        rh: parse_value(form.get(Field::RelativeHumidity))?,
        ws: parse_value(form.get(Field::WindSpeed))?,
        rain: parse_value(form.get(Field::Rain))?,
        ffmc: parse_value(form.get(Field::Ffmc))?,
        dmc: parse_value(form.get(Field::Dmc))?,
        dc: parse_value(form.get(Field::Dc))?,
        isi: parse_value(form.get(Field::Isi))?,
        bui: parse_value(form.get(Field::Bui))?,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::measurements::SAMPLES;

    fn full_form() -> MeasurementForm {
        let mut form = MeasurementForm::new();
        form.load(&SAMPLES[0]);
        form
    }

    #[test]
    fn test_validate_field_accepts_numbers() {
        assert!(validate_field("35"));
        assert!(validate_field("0.2"));
        assert!(validate_field("-3.5"));
        assert!(validate_field("  17 "));
    }

    #[test]
    fn test_validate_field_rejects_non_numbers() {
        assert!(!validate_field(""));
        assert!(!validate_field("   "));
        assert!(!validate_field("abc"));
        assert!(!validate_field("12abc"));
        assert!(!validate_field("NaN"));
        assert!(!validate_field("inf"));
    }

    #[test]
    fn test_validate_all_on_full_form() {
        let validity = validate_all(&full_form());
        assert!(validity.all_valid());
        assert!(validity.failed_fields().is_empty());
    }

    #[test]
    fn test_validate_all_flags_exactly_the_bad_field() {
        let mut form = full_form();
        form.set(Field::Dmc, "not a number");

        let validity = validate_all(&form);
        assert!(!validity.all_valid());
        assert!(!validity.is_valid(Field::Dmc));
        assert_eq!(validity.failed_fields(), vec![Field::Dmc]);

        for field in Field::ALL {
            if field != Field::Dmc {
                assert!(validity.is_valid(field), "{} should be valid", field.key());
            }
        }
    }

    #[test]
    fn test_validate_all_flags_blank_field() {
        let mut form = full_form();
        form.set(Field::WindSpeed, "");

        let validity = validate_all(&form);
        assert_eq!(validity.failed_fields(), vec![Field::WindSpeed]);
    }

    #[test]
    fn test_capture_parses_every_field() {
        let set = capture(&full_form()).unwrap();
        assert_eq!(set.temperature, 35.0);
        assert_eq!(set.rh, 34.0);
        assert_eq!(set.bui, 29.4);
    }

    #[test]
    fn test_capture_refuses_invalid_form() {
        let mut form = full_form();
        form.set(Field::Isi, "??");
        assert!(capture(&form).is_none());
    }
}
