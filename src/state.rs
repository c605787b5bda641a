use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::data::grouping::{GroupedIndices, GroupedRoster};
use crate::data::loader::load_file;
use crate::data::model::{LoadError, Roster};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

type LoadResult = Result<Roster, LoadError>;

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded roster (None until a load completes).
    pub roster: Option<Roster>,

    /// Week currently shown.
    pub selected_week: Option<String>,

    /// Grouped players of `selected_week` (cached, rebuilt on week change).
    pub view: Option<GroupedIndices>,

    /// File the roster came from, or is being loaded from.
    pub source: Option<PathBuf>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pending: Option<Receiver<LoadResult>>,
}

impl AppState {
    /// Load `path` on a worker thread. `notify` runs once the result is
    /// ready so the UI can wake up and call [`AppState::poll_load`].
    pub fn start_load<F>(&mut self, path: &Path, notify: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker_path = path.to_path_buf();
        thread::spawn(move || {
            let result = load_file(&worker_path);
            // The receiver is gone if another load replaced this one.
            let _ = tx.send(result);
            notify();
        });

        log::info!("Loading roster from {}", path.display());
        self.source = Some(path.to_path_buf());
        self.pending = Some(rx);
        self.loading = true;
        self.status_message = None;
    }

    /// Pick up a finished background load. Returns true if state changed.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.loading = false;
                self.status_message = Some("Error: roster loader stopped unexpectedly".into());
                return true;
            }
        };
        self.pending = None;
        self.finish_load(result);
        true
    }

    /// Apply the outcome of a load.
    pub fn finish_load(&mut self, result: LoadResult) {
        match result {
            Ok(roster) => {
                log::info!(
                    "Loaded {} roster rows, weeks {:?}",
                    roster.len(),
                    roster.weeks()
                );
                self.set_roster(roster);
            }
            Err(e) => {
                log::error!("Failed to load roster: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }

    /// Ingest a newly loaded roster and select its first week.
    pub fn set_roster(&mut self, roster: Roster) {
        self.selected_week = roster.weeks().first().cloned();
        self.view = self
            .selected_week
            .as_deref()
            .map(|week| roster.week_view(week));
        self.status_message = if roster.is_empty() {
            Some("Roster file has no players.".into())
        } else {
            None
        };
        self.roster = Some(roster);
        self.loading = false;
    }

    /// Switch weeks. Unknown weeks are ignored; returns whether it changed.
    pub fn select_week(&mut self, week: &str) -> bool {
        let known = self
            .roster
            .as_ref()
            .is_some_and(|r| r.weeks().iter().any(|w| w == week));
        if !known || self.selected_week.as_deref() == Some(week) {
            return false;
        }
        log::debug!("Week changed to {week}");
        self.selected_week = Some(week.to_string());
        self.view = self.roster.as_ref().map(|r| r.week_view(week));
        true
    }

    /// Grouped view of the selected week, resolved against the roster.
    pub fn grouped(&self) -> Option<GroupedRoster<'_>> {
        let roster = self.roster.as_ref()?;
        Some(self.view.as_ref()?.resolve(roster.records()))
    }
}
