/// Data layer: roster types, loading, week filtering and grouping.
///
/// Architecture:
/// ```text
///  roster_info.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Roster
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Roster   │  Vec<PlayerRecord>, columns, distinct weeks
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  records of the selected week
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ grouping  │  side → position → players (GroupedRoster)
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod grouping;
pub mod loader;
pub mod model;
pub mod side;
