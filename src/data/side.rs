use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TeamSide – coarse grouping of on-field positions
// ---------------------------------------------------------------------------

/// Which unit of the team a position belongs to.
///
/// `Other` is the fallback for position codes missing from the
/// classification table. It has no display order and is never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamSide {
    Offense,
    Defense,
    #[serde(rename = "Special Teams")]
    SpecialTeams,
    Other,
}

/// Sides in the order they are displayed.
pub const SIDE_ORDER: [TeamSide; 3] = [TeamSide::Offense, TeamSide::Defense, TeamSide::SpecialTeams];

const OFFENSE_POSITIONS: &[&str] = &["QB", "RB", "WR", "TE", "OL"];
const DEFENSE_POSITIONS: &[&str] = &["DL", "LB", "DB"];
const SPECIAL_TEAMS_POSITIONS: &[&str] = &["K", "P", "LS"];

impl TeamSide {
    /// Classify a position code. Unknown codes map to `Other`.
    pub fn of(position: &str) -> TeamSide {
        match position {
            "QB" | "RB" | "WR" | "TE" | "OL" => TeamSide::Offense,
            "K" | "P" | "LS" => TeamSide::SpecialTeams,
            "DL" | "LB" | "DB" => TeamSide::Defense,
            _ => TeamSide::Other,
        }
    }

    /// Positions of this side in display order.
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            TeamSide::Offense => OFFENSE_POSITIONS,
            TeamSide::Defense => DEFENSE_POSITIONS,
            TeamSide::SpecialTeams => SPECIAL_TEAMS_POSITIONS,
            TeamSide::Other => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamSide::Offense => "Offense",
            TeamSide::Defense => "Defense",
            TeamSide::SpecialTeams => "Special Teams",
            TeamSide::Other => "Other",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
