use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::write_grouped;
use crate::state::AppState;
use crate::ui::roster::summary;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, week selector and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(ui.ctx(), state);
                ui.close_menu();
            }
            let can_export = state.view.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export week…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        week_selector(ui, state);
        ui.separator();

        if let Some(view) = &state.view {
            ui.label(summary(view));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Week selector
// ---------------------------------------------------------------------------

/// Drop-down of the roster's weeks; picking one switches the view.
pub fn week_selector(ui: &mut Ui, state: &mut AppState) {
    let Some(roster) = &state.roster else {
        return;
    };
    // Clone so state can be mutated inside the combo box.
    let weeks = roster.weeks().to_vec();
    let current = state.selected_week.clone().unwrap_or_default();

    ui.label("Week");
    egui::ComboBox::from_id_salt("week_select")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for week in &weeks {
                if ui.selectable_label(current == *week, week).clicked() {
                    state.select_week(week);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open roster")
        .add_filter("Supported files", &["csv", "txt", "json"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        let ctx = ctx.clone();
        state.start_load(&path, move || ctx.request_repaint());
    }
}

pub fn export_dialog(state: &mut AppState) {
    let week = state.selected_week.clone().unwrap_or_default();
    let file = rfd::FileDialog::new()
        .set_title("Export week")
        .set_file_name(format!("roster_week_{week}.csv"))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match export_week(state, &path) {
            Ok(count) => {
                log::info!("Exported {count} players to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Write the selected week to `path`; returns the number of players written.
pub fn export_week(state: &AppState, path: &Path) -> Result<usize> {
    let roster = state.roster.as_ref().context("no roster loaded")?;
    let grouped = state.grouped().context("no week selected")?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_grouped(BufWriter::new(file), &grouped, roster.columns())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(grouped.player_count())
}
