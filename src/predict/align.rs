use super::model::{FeatureSchema, FeatureVector, PredictionRequest};

// ---------------------------------------------------------------------------
// Feature alignment: request → one row in the model's column order
// ---------------------------------------------------------------------------

/// Build the feature row the regressor expects from a raw request.
///
/// The schema is walked in order and each column is filled positionally:
/// * `year` → the requested year
/// * the request's `id_<station>` indicator → 1
/// * every other column → 0
///
/// A station id never seen during training simply matches no indicator
/// column, so its whole indicator block stays zero and the regressor falls
/// back to its intercepts. This is a total function: any non-blank station
/// id and any year produce a row of exactly `schema.len()` values.
pub fn align(request: &PredictionRequest, schema: &FeatureSchema) -> FeatureVector {
    let indicator = request.indicator_column();

    let values = schema
        .columns()
        .iter()
        .map(|col| {
            if col == "year" {
                f64::from(request.year)
            } else if *col == indicator {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    FeatureVector(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["year".into(), "id_1".into(), "id_2".into()])
    }

    #[test]
    fn output_matches_schema_length_and_order() {
        let row = align(&PredictionRequest::new(2022, "2"), &schema());
        assert_eq!(row.len(), schema().len());
        assert_eq!(row.values(), [2022.0, 0.0, 1.0]);
    }

    #[test]
    fn known_station_sets_exactly_one_indicator() {
        let row = align(&PredictionRequest::new(2022, "1"), &schema());
        assert_eq!(row.values(), [2022.0, 1.0, 0.0]);
    }

    #[test]
    fn unseen_station_yields_all_zero_indicators() {
        let row = align(&PredictionRequest::new(2022, "99"), &schema());
        assert_eq!(row.values(), [2022.0, 0.0, 0.0]);
    }

    #[test]
    fn align_is_idempotent() {
        let req = PredictionRequest::new(2031, "2");
        assert_eq!(align(&req, &schema()), align(&req, &schema()));
    }

    #[test]
    fn station_id_is_matched_exactly_not_by_prefix() {
        let schema = FeatureSchema::new(vec![
            "year".into(),
            "id_1".into(),
            "id_11".into(),
        ]);
        let row = align(&PredictionRequest::new(2022, "1"), &schema);
        assert_eq!(row.values(), [2022.0, 1.0, 0.0]);
        let row = align(&PredictionRequest::new(2022, "11"), &schema);
        assert_eq!(row.values(), [2022.0, 0.0, 1.0]);
    }
}
