//! Measurement Model
//!
//! The nine weather-derived indicators the prediction service consumes:
//! four direct weather readings plus the five Canadian fire-weather
//! sub-indices. Raw form state stays string-valued until a prediction
//! cycle captures it; the fixed sample presets back the quick-load actions.

use serde::{Deserialize, Serialize};

/// Number of input fields
pub const FIELD_COUNT: usize = 9;

/// One of the nine prediction inputs, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Temperature,
    RelativeHumidity,
    WindSpeed,
    Rain,
    Ffmc,
    Dmc,
    Dc,
    Isi,
    Bui,
}

impl Field {
    /// All fields in wire order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Temperature,
        Field::RelativeHumidity,
        Field::WindSpeed,
        Field::Rain,
        Field::Ffmc,
        Field::Dmc,
        Field::Dc,
        Field::Isi,
        Field::Bui,
    ];

    /// Wire/form key for this field
    pub fn key(&self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::RelativeHumidity => "rh",
            Field::WindSpeed => "ws",
            Field::Rain => "rain",
            Field::Ffmc => "ffmc",
            Field::Dmc => "dmc",
            Field::Dc => "dc",
            Field::Isi => "isi",
            Field::Bui => "bui",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Temperature => "Temperature (°C)",
            Field::RelativeHumidity => "Relative Humidity (%)",
            Field::WindSpeed => "Wind Speed (km/h)",
            Field::Rain => "Rain (mm)",
            Field::Ffmc => "FFMC",
            Field::Dmc => "DMC",
            Field::Dc => "DC",
            Field::Isi => "ISI",
            Field::Bui => "BUI",
        }
    }

    /// Look up a field by its wire/form key
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    fn index(&self) -> usize {
        Field::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Raw, string-valued form state.
///
/// Values stay exactly as entered until a prediction cycle validates and
/// captures them; the wire request also carries the raw strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementForm {
    values: [String; FIELD_COUNT],
}

impl MeasurementForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for one field
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Overwrite one field's raw value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Clear every field (reset-form action)
    pub fn clear(&mut self) {
        for value in self.values.iter_mut() {
            value.clear();
        }
    }

    /// Fill the form from a sample preset
    pub fn load(&mut self, sample: &MeasurementSet) {
        for field in Field::ALL {
            self.set(field, format_value(sample.get(field)));
        }
    }
}

/// A captured, numeric measurement set.
///
/// Built from a fully valid form at submit time; immutable for the
/// lifetime of one prediction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    pub temperature: f64,
    pub rh: f64,
    pub ws: f64,
    pub rain: f64,
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
    pub isi: f64,
    pub bui: f64,
}

impl MeasurementSet {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Temperature => self.temperature,
            Field::RelativeHumidity => self.rh,
            Field::WindSpeed => self.ws,
            Field::Rain => self.rain,
            Field::Ffmc => self.ffmc,
            Field::Dmc => self.dmc,
            Field::Dc => self.dc,
            Field::Isi => self.isi,
            Field::Bui => self.bui,
        }
    }
}

/// Format a numeric value the way the form shows it (no trailing `.0`)
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// SAMPLE PRESETS
// ============================================================================

/// The five fixed sample measurement sets behind the quick-load actions.
pub static SAMPLES: [MeasurementSet; 5] = [
    MeasurementSet {
        temperature: 35.0,
        rh: 34.0,
        ws: 17.0,
        rain: 0.0,
        ffmc: 92.2,
        dmc: 23.6,
        dc: 97.3,
        isi: 13.8,
        bui: 29.4,
    },
    MeasurementSet {
        temperature: 28.0,
        rh: 67.0,
        ws: 19.0,
        rain: 0.0,
        ffmc: 75.4,
        dmc: 2.9,
        dc: 16.3,
        isi: 2.0,
        bui: 4.0,
    },
    MeasurementSet {
        temperature: 39.0,
        rh: 39.0,
        ws: 15.0,
        rain: 0.2,
        ffmc: 89.3,
        dmc: 15.8,
        dc: 35.4,
        isi: 8.2,
        bui: 15.8,
    },
    MeasurementSet {
        temperature: 32.0,
        rh: 55.0,
        ws: 14.0,
        rain: 0.0,
        ffmc: 86.2,
        dmc: 8.3,
        dc: 18.4,
        isi: 5.0,
        bui: 8.2,
    },
    MeasurementSet {
        temperature: 37.0,
        rh: 55.0,
        ws: 15.0,
        rain: 0.0,
        ffmc: 89.3,
        dmc: 28.3,
        dc: 67.2,
        isi: 8.3,
        bui: 28.3,
    },
];

/// Sample preset by zero-based index
pub fn sample(index: usize) -> Option<&'static MeasurementSet> {
    SAMPLES.get(index)
}

// ============================================================================
// TESTS
// ============================================================================
