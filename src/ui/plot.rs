use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::generate_palette;
use crate::predict::model::PredictionResult;

// ---------------------------------------------------------------------------
// Pollutant bar chart
// ---------------------------------------------------------------------------

/// Render the predicted values as one bar per pollutant, in contract order.
pub fn pollutant_chart(ui: &mut Ui, result: &PredictionResult) {
    let palette = generate_palette(result.values.len());

    let bars: Vec<Bar> = result
        .values
        .iter()
        .enumerate()
        .map(|(i, (pollutant, value))| {
            Bar::new(i as f64, *value)
                .name(*pollutant)
                .fill(palette[i])
                .width(0.6)
        })
        .collect();

    let labels: Vec<&'static str> = result.values.iter().map(|(name, _)| *name).collect();

    Plot::new("pollutant_chart")
        .height(260.0)
        .y_axis_label("Predicted level")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels
                .get(idx as usize)
                .map(|name| (*name).to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
