// src/gui/components/result_panel.rs
//
// Inline error, listing status, details table and the save/copy bar.

use eframe::egui::{self, Color32, RichText};

use crate::{data::ListingStatus, gui::{actions, app::App}};

fn listing_badge(status: &ListingStatus) -> RichText {
    let (icon, color) = match status {
        ListingStatus::ListedToday(_) => ("✔", Color32::from_rgb(40, 160, 60)),
        ListingStatus::ListedTomorrow(_) => ("🕓", Color32::from_rgb(210, 150, 20)),
        ListingStatus::NotImminent(_) => ("✖", Color32::from_rgb(200, 60, 60)),
        ListingStatus::Unknown => ("?", Color32::GRAY),
    };
    RichText::new(format!("{icon} {status}")).color(color).strong()
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = &app.error {
        ui.colored_label(Color32::from_rgb(220, 30, 30), err);
        ui.add_space(4.0);
    }

    let Some(report) = &app.report else {
        if app.error.is_none() {
            ui.label("No case loaded yet.");
        }
        return;
    };

    ui.colored_label(Color32::from_rgb(40, 160, 60), "Case details fetched successfully!");
    ui.label(listing_badge(&report.listing));
    if let Some(href) = &report.pdf_link {
        ui.horizontal(|ui| {
            ui.label("Case PDF:");
            ui.monospace(href);
        });
    }

    ui.add_space(6.0);
    ui.label(RichText::new("Case Information").heading());

    // Save / copy
    ui.horizontal(|ui| {
        ui.label("Save to:");
        ui.add(egui::TextEdit::singleline(&mut app.state.save_path_text)
            .font(egui::TextStyle::Monospace));

        if ui.button("📥 Save Result (JSON)").clicked() {
            actions::save(app);
        }
        if ui.button("Copy JSON").clicked() {
            actions::copy(ui.ctx(), app);
        }
    });

    ui.separator();

    // The table scrolls on its own.
    if let Some(report) = &app.report {
        crate::gui::components::details_table::draw(ui, &report.details);
    }
}
