// src/gui/components/search_form.rs
//
// Title, search-mode radio, the inputs for the active mode, and the Search button.

use eframe::egui;
use tracing::debug;

use crate::{config::state::SearchMode, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("eCourts Scraper");
    ui.label("Fetch court case details and check if a case is listed today or tomorrow.");
    ui.add_space(6.0);

    let form = &mut app.state.form;
    let prev_mode = form.mode;

    ui.horizontal(|ui| {
        ui.label("Search by:");
        ui.radio_value(&mut form.mode, SearchMode::Cnr, "CNR Number");
        ui.radio_value(&mut form.mode, SearchMode::CaseNumber, "Case Type + Number + Year");
    });
    if form.mode != prev_mode {
        debug!("UI: search mode → {:?}", form.mode);
    }

    egui::Grid::new("query_inputs")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| match form.mode {
            SearchMode::Cnr => {
                ui.label("CNR Number");
                ui.add(egui::TextEdit::singleline(&mut form.cnr)
                    .hint_text("e.g. MHJK010000002023")
                    .font(egui::TextStyle::Monospace));
                ui.end_row();
            }
            SearchMode::CaseNumber => {
                ui.label("Case Type");
                ui.add(egui::TextEdit::singleline(&mut form.case_type).hint_text("e.g. CR, CS, CC"));
                ui.end_row();

                ui.label("Case Number");
                ui.text_edit_singleline(&mut form.case_no);
                ui.end_row();

                ui.label("Case Year");
                ui.add(egui::TextEdit::singleline(&mut form.case_year).hint_text("e.g. 2023"));
                ui.end_row();
            }
        });

    ui.add_space(6.0);

    let ready = form.to_query().is_some();
    if ui.add_enabled(ready, egui::Button::new("🔍 Search Case")).clicked() {
        actions::search(app);
    }
}
