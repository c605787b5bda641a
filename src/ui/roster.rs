use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::SideColors;
use crate::config::HEADSHOT_SIZE;
use crate::data::grouping::{Grouped, SideGroup};
use crate::data::model::PlayerRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Roster display (central panel)
// ---------------------------------------------------------------------------

/// Render the grouped roster of the selected week.
pub fn roster_view(ui: &mut Ui, state: &AppState, colors: &SideColors, placeholder: &str) {
    if state.loading {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.spinner();
        });
        return;
    }

    let (Some(roster), Some(grouped)) = (&state.roster, &state.view) else {
        let text = match &state.status_message {
            Some(msg) => msg.clone(),
            None => "Open a roster file to view players  (File → Open…)".to_string(),
        };
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(text);
        });
        return;
    };

    if grouped.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No players to show for this week.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for side in &grouped.sides {
                side_section(ui, side, roster.records(), colors, placeholder);
                ui.add_space(12.0);
            }
        });
}

fn side_section(
    ui: &mut Ui,
    side: &SideGroup<usize>,
    records: &[PlayerRecord],
    colors: &SideColors,
    placeholder: &str,
) {
    ui.heading(RichText::new(side.side.label()).color(colors.color_for(side.side)));
    ui.separator();

    for group in &side.positions {
        ui.label(RichText::new(group.position).strong().size(16.0));
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for player in group.players.iter().filter_map(|&i| records.get(i)) {
                player_card(ui, player, placeholder);
            }
        });
        ui.add_space(6.0);
    }
}

fn player_card(ui: &mut Ui, player: &PlayerRecord, placeholder: &str) {
    let card = PlayerCard::new(player, placeholder);
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.add(
                egui::Image::from_uri(card.headshot.clone())
                    .fit_to_exact_size(egui::vec2(HEADSHOT_SIZE, HEADSHOT_SIZE))
                    .corner_radius(4.0),
            )
            .on_hover_text(card.name.as_str());
            ui.vertical(|ui: &mut Ui| {
                ui.strong(card.name.as_str());
                ui.weak(card.meta.as_str());
            });
        });
    });
}

// ---------------------------------------------------------------------------
// Card text – display defaults are applied here and nowhere else
// ---------------------------------------------------------------------------

/// Display strings for one player card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub headshot: String,
    pub name: String,
    pub meta: String,
}

impl PlayerCard {
    pub fn new(player: &PlayerRecord, placeholder: &str) -> Self {
        let headshot = match player.headshot_url() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => placeholder.to_string(),
        };
        PlayerCard {
            headshot,
            name: player.player_name().unwrap_or_default().to_string(),
            meta: format!(
                "#{} — {}",
                player.jersey_number().unwrap_or_default(),
                player.position().unwrap_or_default()
            ),
        }
    }
}

/// Summary line for the status bar.
pub fn summary<T>(grouped: &Grouped<T>) -> String {
    let shown = grouped.player_count();
    if grouped.hidden == 0 {
        format!("{shown} players")
    } else {
        format!(
            "{shown} players ({} with unlisted positions not shown)",
            grouped.hidden
        )
    }
}
