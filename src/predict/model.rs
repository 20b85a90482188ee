use std::fmt;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Pollutant contract
// ---------------------------------------------------------------------------

/// The nine pollutants the regressor predicts, in the exact order it was
/// trained to emit them. Output index i of the regressor is POLLUTANTS[i].
pub const POLLUTANTS: [&str; 9] = [
    "NH4", "BSK5", "Suspended", "O2", "NO3", "NO2", "SO4", "PO4", "CL",
];

// ---------------------------------------------------------------------------
// PredictionRequest – the two user inputs
// ---------------------------------------------------------------------------

/// A single user submission: target year and monitoring-station id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub year: i32,
    /// Opaque categorical station label; must be non-blank (the form
    /// enforces this before a request is ever constructed).
    pub station_id: String,
}

impl PredictionRequest {
    pub fn new(year: i32, station_id: impl Into<String>) -> Self {
        Self {
            year,
            station_id: station_id.into(),
        }
    }

    /// One-hot indicator column name for this station, by the training
    /// pipeline's `id_<station>` convention.
    pub fn indicator_column(&self) -> String {
        format!("id_{}", self.station_id)
    }
}

// ---------------------------------------------------------------------------
// FeatureSchema – ordered column list fixed at training time
// ---------------------------------------------------------------------------

/// The ordered column names the regressor expects, fixed when the model was
/// trained. Loaded once from the schema artifact and never modified.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether this station was seen during training, i.e. whether its
    /// indicator column exists in the schema.
    pub fn knows_station(&self, station_id: &str) -> bool {
        let indicator = format!("id_{station_id}");
        self.columns.iter().any(|c| *c == indicator)
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – one aligned row
// ---------------------------------------------------------------------------

/// A single feature row, positionally keyed by a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// LinearRegressor – the deserialized model artifact
// ---------------------------------------------------------------------------

/// Shape violations in the model artifact, caught once at load time.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("model has {got} output rows, expected {expected}")]
    OutputCount { got: usize, expected: usize },
    #[error("coefficient row {row} has {got} columns, schema has {expected}")]
    RowWidth {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("model has {coeffs} coefficient rows but {intercepts} intercepts")]
    InterceptCount { coeffs: usize, intercepts: usize },
}

/// Multi-output linear regression parameters: one coefficient row and one
/// intercept per pollutant.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearRegressor {
    /// Check the parameter shapes against the schema width. Called once by
    /// the loader so `predict` can assume aligned inputs.
    pub fn validate(&self, schema: &FeatureSchema) -> Result<(), ShapeError> {
        if self.coefficients.len() != POLLUTANTS.len() {
            return Err(ShapeError::OutputCount {
                got: self.coefficients.len(),
                expected: POLLUTANTS.len(),
            });
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(ShapeError::InterceptCount {
                coeffs: self.coefficients.len(),
                intercepts: self.intercepts.len(),
            });
        }
        for (row, coeffs) in self.coefficients.iter().enumerate() {
            if coeffs.len() != schema.len() {
                return Err(ShapeError::RowWidth {
                    row,
                    got: coeffs.len(),
                    expected: schema.len(),
                });
            }
        }
        Ok(())
    }

    /// Apply the regressor to an aligned feature row. The input must have
    /// the width `validate` checked; this is a plain dot product per output.
    pub fn predict(&self, features: &FeatureVector) -> [f64; POLLUTANTS.len()] {
        let mut out = [0.0; POLLUTANTS.len()];
        for (i, (coeffs, intercept)) in self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .enumerate()
        {
            out[i] = intercept
                + coeffs
                    .iter()
                    .zip(features.values())
                    .map(|(c, x)| c * x)
                    .sum::<f64>();
        }
        out
    }
}

// ---------------------------------------------------------------------------
// PredictionResult – what the UI renders and exports
// ---------------------------------------------------------------------------

/// The outcome of one submission: the request echoed back plus the ordered
/// (pollutant, value) pairs. Values are kept at full precision; rounding to
/// two decimals happens at render/export time.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub year: i32,
    pub station_id: String,
    pub values: Vec<(&'static str, f64)>,
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station {} in {}", self.station_id, self.year)
    }
}
