use crate::predict::loader::PollutionModel;
use crate::predict::model::{PredictionRequest, PredictionResult};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

pub const YEAR_MIN: i32 = 2000;
pub const YEAR_MAX: i32 = 2100;
pub const YEAR_DEFAULT: i32 = 2022;

/// The visible page, mirroring the original tool's three tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Prediction,
    HowItWorks,
    Contact,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded regressor + schema, read-only for the process lifetime.
    pub model: PollutionModel,

    /// Form field: target year (bounded by the form widget).
    pub year: i32,

    /// Form field: station id, free text.
    pub station_id: String,

    /// Result of the latest submission, if any.
    pub result: Option<PredictionResult>,

    /// Input or degradation warning shown above the result.
    pub warning: Option<String>,

    /// Status / error message shown in the top bar (e.g. export outcome).
    pub status_message: Option<String>,

    /// Currently selected tab.
    pub tab: Tab,
}

impl AppState {
    pub fn new(model: PollutionModel) -> Self {
        Self {
            model,
            year: YEAR_DEFAULT,
            station_id: "1".to_string(),
            result: None,
            warning: None,
            status_message: None,
            tab: Tab::Prediction,
        }
    }

    /// Handle a form submission: validate the station id, then predict.
    ///
    /// A blank station id is rejected with a warning and no prediction. A
    /// station the model never saw still gets a prediction (the indicator
    /// block is all zero, so the regressor answers from its intercepts) but
    /// the degradation is flagged rather than silent.
    pub fn submit(&mut self) {
        let station_id = self.station_id.trim().to_string();
        if station_id.is_empty() {
            self.warning = Some("Please enter the Station ID".to_string());
            self.result = None;
            return;
        }

        let request = PredictionRequest::new(self.year, station_id);
        self.warning = if self.model.schema().knows_station(&request.station_id) {
            None
        } else {
            Some(format!(
                "Station {} was not in the training data; the prediction is a baseline only",
                request.station_id
            ))
        };

        let result = self.model.predict_for(&request);
        log::info!("Predicted pollutant levels for {result}");
        self.result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let model_json = format!(
            r#"{{"coefficients": [{}], "intercepts": [1, 1, 1, 1, 1, 1, 1, 1, 1]}}"#,
            vec!["[0.0, 2.0]"; 9].join(", ")
        );
        let model = PollutionModel::from_json(&model_json, r#"["year", "id_1"]"#).unwrap();
        AppState::new(model)
    }

    #[test]
    fn blank_station_id_warns_and_skips_prediction() {
        let mut state = state();
        state.station_id = "   ".to_string();
        state.submit();
        assert!(state.result.is_none());
        assert_eq!(state.warning.as_deref(), Some("Please enter the Station ID"));
    }

    #[test]
    fn known_station_predicts_without_warning() {
        let mut state = state();
        state.station_id = "1".to_string();
        state.submit();
        assert!(state.warning.is_none());
        let result = state.result.expect("prediction");
        assert_eq!(result.values[0].1, 3.0);
    }

    #[test]
    fn unseen_station_predicts_with_visible_warning() {
        let mut state = state();
        state.station_id = "99".to_string();
        state.submit();
        assert!(state.warning.as_deref().unwrap().contains("Station 99"));
        let result = state.result.expect("prediction");
        assert_eq!(result.values[0].1, 1.0);
    }

    #[test]
    fn station_id_is_trimmed_before_prediction() {
        let mut state = state();
        state.station_id = " 1 ".to_string();
        state.submit();
        assert_eq!(state.result.expect("prediction").station_id, "1");
    }
}
