use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.state.config.title.as_str());
            });
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: selected launches ----
        egui::TopBottomPanel::bottom("selection_table")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                table::selection_table(ui, &self.state.scatter, &self.state.booster_colors);
            });

        // ---- Central panel: pie + scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                charts::pie_chart(&mut cols[0], &self.state.pie);
                charts::scatter_chart(
                    &mut cols[1],
                    &self.state.scatter,
                    &self.state.booster_colors,
                );
            });
        });
    }
}
