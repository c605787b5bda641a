use eframe::egui;

use crate::color::SideColors;
use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, roster};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RosterViewApp {
    pub state: AppState,
    pub config: AppConfig,
    colors: SideColors,
}

impl RosterViewApp {
    /// Create the app and start loading the configured roster file.
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let mut state = AppState::default();
        let repaint = ctx.clone();
        state.start_load(&config.roster_path, move || repaint.request_repaint());
        Self {
            state,
            config,
            colors: SideColors::default(),
        }
    }
}

impl eframe::App for RosterViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_load();

        // ---- Top panel: menu bar + week selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: grouped roster ----
        egui::CentralPanel::default().show(ctx, |ui| {
            roster::roster_view(
                ui,
                &self.state,
                &self.colors,
                &self.config.placeholder_headshot,
            );
        });
    }
}
