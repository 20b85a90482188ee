use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::export;
use crate::state::{AppState, Tab, YEAR_MAX, YEAR_MIN};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the tab strip.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let can_export = state.result.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export CSV…"))
                .clicked()
            {
                if let Some(result) = &state.result {
                    state.status_message = export::export_dialog(result);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        for (tab, label) in [
            (Tab::Prediction, "Prediction"),
            (Tab::HowItWorks, "How It Works"),
            (Tab::Contact, "Contact"),
        ] {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        ui.label(format!(
            "{} feature columns loaded",
            state.model.schema().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::GRAY));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – dispatch by tab
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    match state.tab {
        Tab::Prediction => prediction_tab(ui, state),
        Tab::HowItWorks => how_it_works_tab(ui),
        Tab::Contact => contact_tab(ui),
    }
}

// ---------------------------------------------------------------------------
// Prediction tab – form, result table, chart, download
// ---------------------------------------------------------------------------

fn prediction_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Water Pollution Predictor");
    ui.label("Predict water pollutant levels for any station and year.");
    ui.add_space(8.0);

    // ---- Input form ----
    egui::Grid::new("prediction_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Year");
            ui.add(egui::DragValue::new(&mut state.year).range(YEAR_MIN..=YEAR_MAX));
            ui.end_row();

            ui.label("Station ID");
            ui.add(egui::TextEdit::singleline(&mut state.station_id).hint_text("e.g. 1"));
            ui.end_row();
        });

    ui.add_space(4.0);
    if ui.button("Predict").clicked() {
        state.submit();
    }

    if let Some(warning) = &state.warning {
        ui.add_space(4.0);
        ui.label(RichText::new(warning).color(Color32::YELLOW));
    }

    // ---- Result ----
    let Some(result) = state.result.clone() else {
        return;
    };

    ui.add_space(8.0);
    ui.separator();
    ui.label(
        RichText::new(format!("Predicted pollutant levels for {result}"))
            .color(Color32::LIGHT_GREEN),
    );
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            result_table(ui, &result);

            ui.add_space(12.0);
            ui.strong("Visualization");
            plot::pollutant_chart(ui, &result);

            ui.add_space(8.0);
            if ui.button("Download Results as CSV").clicked() {
                state.status_message = export::export_dialog(&result);
            }
        });
}

fn result_table(ui: &mut Ui, result: &crate::predict::model::PredictionResult) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Pollutant");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for (pollutant, value) in &result.values {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(*pollutant);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{value:.2}"));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Informational tabs
// ---------------------------------------------------------------------------

fn how_it_works_tab(ui: &mut Ui) {
    ui.heading("How the Model Works");
    ui.add_space(8.0);
    ui.label(
        "A regression model trained on historical water pollutant data predicts \
         nine pollutant levels (NH4, BSK5, suspended solids, O2, NO3, NO2, SO4, \
         PO4, CL) from two inputs:",
    );
    ui.add_space(4.0);
    ui.label("• Year — the target year for the prediction");
    ui.label("• Station ID — the water monitoring station");
    ui.add_space(4.0);
    ui.label(
        "The station id is one-hot encoded against the columns the model was \
         trained with; stations the model has never seen fall back to a baseline \
         prediction and are flagged in the form.",
    );
}

fn contact_tab(ui: &mut Ui) {
    ui.heading("Contact");
    ui.add_space(8.0);
    ui.label("Questions, data updates or collaboration ideas are welcome.");
    ui.hyperlink_to(
        "Open an issue on the project tracker",
        "https://github.com/stationcast/stationcast/issues",
    );
}
