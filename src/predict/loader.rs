use std::path::Path;

use anyhow::{Context, Result, bail};

use super::align::align;
use super::model::{
    FeatureSchema, LinearRegressor, PredictionRequest, PredictionResult, POLLUTANTS,
};

// ---------------------------------------------------------------------------
// PollutionModel – the read-only handle held for the process lifetime
// ---------------------------------------------------------------------------

/// The loaded regressor and its feature schema, validated against each other
/// once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct PollutionModel {
    regressor: LinearRegressor,
    schema: FeatureSchema,
}

impl PollutionModel {
    /// Load and cross-validate both artifacts. Any failure here is fatal for
    /// the process: without a model no request can be served.
    pub fn load(model_path: &Path, columns_path: &Path) -> Result<Self> {
        let model_text = std::fs::read_to_string(model_path)
            .with_context(|| format!("reading model artifact {}", model_path.display()))?;
        let columns_text = std::fs::read_to_string(columns_path)
            .with_context(|| format!("reading schema artifact {}", columns_path.display()))?;

        let model = Self::from_json(&model_text, &columns_text)?;
        log::info!(
            "Loaded model: {} outputs, {} feature columns",
            POLLUTANTS.len(),
            model.schema.len()
        );
        Ok(model)
    }

    /// Parse and validate the two artifacts from their JSON text.
    pub fn from_json(model_json: &str, columns_json: &str) -> Result<Self> {
        let regressor: LinearRegressor =
            serde_json::from_str(model_json).context("parsing model JSON")?;
        let schema: FeatureSchema =
            serde_json::from_str(columns_json).context("parsing schema JSON")?;

        if schema.is_empty() {
            bail!("schema artifact contains no columns");
        }
        if !schema.columns().iter().any(|c| c == "year") {
            bail!("schema artifact is missing the 'year' column");
        }
        regressor
            .validate(&schema)
            .context("model parameters do not match schema")?;

        Ok(Self { regressor, schema })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run one request through the full pipeline: align to the schema,
    /// apply the regressor, pair the outputs with their pollutant names.
    pub fn predict_for(&self, request: &PredictionRequest) -> PredictionResult {
        let features = align(request, &self.schema);
        let raw = self.regressor.predict(&features);

        PredictionResult {
            year: request.year,
            station_id: request.station_id.clone(),
            values: POLLUTANTS.iter().copied().zip(raw).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &str = r#"["year", "id_1", "id_2"]"#;

    fn model_json(coeff_row: &str) -> String {
        let rows: Vec<&str> = std::iter::repeat(coeff_row).take(9).collect();
        format!(
            r#"{{"coefficients": [{}], "intercepts": [0, 0, 0, 0, 0, 0, 0, 0, 0]}}"#,
            rows.join(", ")
        )
    }

    #[test]
    fn loads_well_formed_artifacts() {
        let model = PollutionModel::from_json(&model_json("[0.001, 1.0, 2.0]"), COLUMNS).unwrap();
        assert_eq!(model.schema().len(), 3);
    }

    #[test]
    fn rejects_empty_schema() {
        let err = PollutionModel::from_json(&model_json("[]"), "[]").unwrap_err();
        assert!(err.to_string().contains("no columns"));
    }

    #[test]
    fn rejects_schema_without_year() {
        let err =
            PollutionModel::from_json(&model_json("[1.0, 2.0]"), r#"["id_1", "id_2"]"#).unwrap_err();
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn rejects_width_mismatch() {
        let err = PollutionModel::from_json(&model_json("[1.0]"), COLUMNS).unwrap_err();
        assert!(err.to_string().contains("do not match schema"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PollutionModel::from_json("{not json", COLUMNS).unwrap_err();
        assert!(err.to_string().contains("parsing model JSON"));
    }

    #[test]
    fn predict_for_pairs_outputs_with_pollutants_in_order() {
        // year coefficient 0, id_1 coefficient 1 → known station predicts 1.0
        let model = PollutionModel::from_json(&model_json("[0.0, 1.0, 2.0]"), COLUMNS).unwrap();

        let result = model.predict_for(&PredictionRequest::new(2022, "1"));
        assert_eq!(result.values.len(), 9);
        let names: Vec<&str> = result.values.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, POLLUTANTS);
        for (_, v) in &result.values {
            assert_eq!(*v, 1.0);
        }
    }

    #[test]
    fn unseen_station_falls_back_to_intercepts() {
        let model = PollutionModel::from_json(&model_json("[0.0, 1.0, 2.0]"), COLUMNS).unwrap();
        let result = model.predict_for(&PredictionRequest::new(2022, "99"));
        for (_, v) in &result.values {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn identical_requests_give_identical_results() {
        let model = PollutionModel::from_json(&model_json("[0.01, 1.0, 2.0]"), COLUMNS).unwrap();
        let req = PredictionRequest::new(2040, "2");
        assert_eq!(model.predict_for(&req), model.predict_for(&req));
    }
}
