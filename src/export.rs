use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::predict::model::PredictionResult;

// ---------------------------------------------------------------------------
// CSV export of a prediction result
// ---------------------------------------------------------------------------

/// Write the result as CSV: a `Pollutant,Value` header followed by the nine
/// pollutant rows, values rounded to two decimals like the on-screen table.
pub fn write_csv<W: Write>(result: &PredictionResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Pollutant", "Value"])
        .context("writing CSV header")?;

    for (pollutant, value) in &result.values {
        let rounded = format!("{value:.2}");
        csv_writer
            .write_record([*pollutant, rounded.as_str()])
            .with_context(|| format!("writing CSV row for {pollutant}"))?;
    }

    csv_writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Conventional download name, e.g. `pollution_prediction_1_2022.csv`.
pub fn default_file_name(result: &PredictionResult) -> String {
    format!(
        "pollution_prediction_{}_{}.csv",
        result.station_id, result.year
    )
}

fn write_csv_file(result: &PredictionResult, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(result, file)
}

/// Ask the user where to save and write the CSV there. Returns a status
/// message for the UI, or None when the dialog was cancelled.
pub fn export_dialog(result: &PredictionResult) -> Option<String> {
    let path = rfd::FileDialog::new()
        .set_title("Save prediction as CSV")
        .set_file_name(default_file_name(result))
        .add_filter("CSV", &["csv"])
        .save_file()?;

    match write_csv_file(result, &path) {
        Ok(()) => {
            log::info!("Exported prediction for {result} to {}", path.display());
            Some(format!("Saved {}", path.display()))
        }
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            Some(format!("Export failed: {e:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::model::POLLUTANTS;

    fn sample_result() -> PredictionResult {
        PredictionResult {
            year: 2022,
            station_id: "1".into(),
            values: POLLUTANTS
                .iter()
                .copied()
                .zip((0..9).map(|i| i as f64 + 0.005))
                .collect(),
        }
    }

    #[test]
    fn file_name_follows_pattern() {
        assert_eq!(
            default_file_name(&sample_result()),
            "pollution_prediction_1_2022.csv"
        );
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let result = PredictionResult {
            year: 2022,
            station_id: "1".into(),
            values: vec![("NH4", 3.14159)],
        };
        let mut buf = Vec::new();
        write_csv(&result, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("NH4,3.14"));
        assert!(!text.contains("3.14159"));
    }

    #[test]
    fn csv_round_trips_all_nine_pairs() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_csv(&result, &mut buf).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            ["Pollutant", "Value"]
        );

        let rows: Vec<(String, f64)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse().unwrap())
            })
            .collect();

        assert_eq!(rows.len(), 9);
        for ((name, parsed), (expected_name, raw)) in rows.iter().zip(&result.values) {
            assert_eq!(name, expected_name);
            // same rounding as the on-screen table
            assert_eq!(*parsed, format!("{raw:.2}").parse::<f64>().unwrap());
        }
    }
}
