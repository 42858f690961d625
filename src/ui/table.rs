use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ColorMap;
use crate::data::filter::ScatterChart;

const ROW_HEIGHT: f32 = 18.0;

/// Tabular view of the launches currently on the scatter.
pub fn selection_table(ui: &mut Ui, scatter: &ScatterChart, colors: &ColorMap) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["Launch Site", "Payload Mass (kg)", "Outcome", "Booster Version Category"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, scatter.points.len(), |mut row| {
                let p = &scatter.points[row.index()];
                row.col(|ui| {
                    ui.label(p.launch_site.as_str());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", p.payload_mass));
                });
                row.col(|ui| {
                    ui.label(p.outcome.to_string());
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&p.booster_category)
                            .color(colors.color_for(&p.booster_category)),
                    );
                });
            });
        });
}
