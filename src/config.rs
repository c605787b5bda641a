use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_ROSTER_FILE: &str = "roster_info.csv";
pub const PLACEHOLDER_HEADSHOT: &str = "https://via.placeholder.com/48";
pub const HEADSHOT_SIZE: f32 = 48.0;
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 800.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [520.0, 360.0];

/// Start-up settings for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Roster file loaded at start-up.
    pub roster_path: PathBuf,
    /// Image shown for players without a headshot URL.
    pub placeholder_headshot: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_FILE),
            placeholder_headshot: PLACEHOLDER_HEADSHOT.to_string(),
            window_size: WINDOW_SIZE,
            min_window_size: MIN_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Defaults, with the first positional argument (if any) as roster path.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().nth(1).filter(|a| !a.trim().is_empty()) {
            config.roster_path = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = AppConfig::from_args(args(&["roster-view"]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.roster_path, PathBuf::from("roster_info.csv"));
    }

    #[test]
    fn first_argument_overrides_roster_path() {
        let config = AppConfig::from_args(args(&["roster-view", "data/week.json", "ignored"]));
        assert_eq!(config.roster_path, PathBuf::from("data/week.json"));
        assert_eq!(config.placeholder_headshot, PLACEHOLDER_HEADSHOT);
    }
}
