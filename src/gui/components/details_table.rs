// src/gui/components/details_table.rs
//
// Two-column view of the extracted case details. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::data::CaseDetails;

pub fn draw(ui: &mut egui::Ui, details: &CaseDetails) {
    if details.is_empty() {
        ui.label("The details table was present but had no label/value rows.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true).at_least(160.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Field"); });
            header.col(|ui| { ui.strong("Value"); });
        })
        .body(|mut body| {
            for (label, value) in details.iter() {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(label); });
                    row.col(|ui| { ui.label(value); });
                });
            }
        });
}
