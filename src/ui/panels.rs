use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Slider, SliderClamping, Ui};

use crate::data::model::{LaunchDataset, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Dropdown entries: "All Sites" first, then every site in name order.
fn site_options(dataset: &LaunchDataset) -> Vec<SiteSelection> {
    std::iter::once(SiteSelection::All)
        .chain(dataset.sites().iter().cloned().map(SiteSelection::Site))
        .collect()
}

/// Render the control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let mut site = state.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(site.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in site_options(&state.dataset) {
                let text = option.to_string();
                ui.selectable_value(&mut site, option, text);
            }
        });
    state.select_site(site);

    ui.add_space(12.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let bounds = state.config.payload_slider;
    let mut low = state.range.low;
    let mut high = state.range.high;

    // Only user edits are clamped and snapped: a seeded range off the step
    // grid or outside the bounds must survive being drawn.
    let low_changed = ui
        .add(
            Slider::new(&mut low, bounds.min..=bounds.max)
                .clamping(SliderClamping::Edits)
                .step_by(bounds.step)
                .show_value(true)
                .text("from"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, bounds.min..=bounds.max)
                .clamping(SliderClamping::Edits)
                .step_by(bounds.step)
                .show_value(true)
                .text("to"),
        )
        .changed();

    if low_changed && low != state.range.low {
        state.set_range_low(low);
    }
    if high_changed && high != state.range.high {
        state.set_range_high(high);
    }

    ui.horizontal(|ui: &mut Ui| {
        for mark in bounds.marks() {
            ui.label(RichText::new(format!("{mark:.0}")).small().weak());
        }
    });

    if let (Some(min), Some(max)) = (state.dataset.min_payload(), state.dataset.max_payload()) {
        ui.label(
            RichText::new(format!("observed: {min:.0} – {max:.0} kg"))
                .small()
                .weak(),
        );
        if ui.small_button("Reset to observed").clicked() {
            state.reset_range();
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export selection…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in selection",
            state.dataset.len(),
            state.scatter.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match crate::data::loader::load_csv(&path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} launches from {} ({} sites)",
                dataset.len(),
                path.display(),
                dataset.sites().len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export selected launches")
        .set_file_name("launch_selection.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let result = crate::data::export::export_csv(&state.scatter.points, &path)
        .with_context(|| format!("exporting selection to {}", path.display()));

    match result {
        Ok(()) => {
            log::info!("Exported {} launches to {}", state.scatter.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::warn!("{e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
