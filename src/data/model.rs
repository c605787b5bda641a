use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::filter::{distinct_weeks, filter_by_week};
use super::grouping::{group_and_order, group_week_indices, GroupedIndices, GroupedRoster};

// ---------------------------------------------------------------------------
// Field names the view model and presentation know about
// ---------------------------------------------------------------------------

pub const WEEK: &str = "week";
pub const PLAYER_NAME: &str = "player_name";
pub const JERSEY_NUMBER: &str = "jersey_number";
pub const POSITION: &str = "position";
pub const HEADSHOT_URL: &str = "headshot_url";

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// The roster resource could not be retrieved or read.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON roster: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of objects, {0}")]
    JsonShape(String),

    #[error("roster source is empty (no header row)")]
    Empty,

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of source data
// ---------------------------------------------------------------------------

/// One row of the roster source.
///
/// Every column is kept as text, including the ones the view model never
/// looks at, so unknown columns pass through untouched. A field that the
/// source did not provide is simply absent; substituting display defaults is
/// left to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord {
    fields: BTreeMap<String, String>,
}

impl PlayerRecord {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw value of any column.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn week(&self) -> Option<&str> {
        self.get(WEEK)
    }

    pub fn player_name(&self) -> Option<&str> {
        self.get(PLAYER_NAME)
    }

    pub fn jersey_number(&self) -> Option<&str> {
        self.get(JERSEY_NUMBER)
    }

    pub fn position(&self) -> Option<&str> {
        self.get(POSITION)
    }

    /// Headshot URL as loaded. May be absent or empty.
    pub fn headshot_url(&self) -> Option<&str> {
        self.get(HEADSHOT_URL)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlayerRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Roster – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed roster. Built once when loading completes and never
/// mutated afterwards; every view query borrows from it.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<PlayerRecord>,
    /// Column names in source order.
    columns: Vec<String>,
    /// Distinct week identifiers, ascending.
    weeks: Vec<String>,
}

impl Roster {
    pub fn new(columns: Vec<String>, records: Vec<PlayerRecord>) -> Self {
        let weeks = distinct_weeks(&records);
        Roster {
            records,
            columns,
            weeks,
        }
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn weeks(&self) -> &[String] {
        &self.weeks
    }

    /// All records of one week, in load order.
    pub fn roster_for_week(&self, week: &str) -> Vec<&PlayerRecord> {
        filter_by_week(&self.records, week)
    }

    /// Recompute the grouped view for a newly selected week.
    pub fn on_week_change(&self, week: &str) -> GroupedRoster<'_> {
        group_and_order(self.roster_for_week(week))
    }

    /// Grouped view of one week as record indices, for callers that keep
    /// the result around between week changes.
    pub fn week_view(&self, week: &str) -> GroupedIndices {
        group_week_indices(&self.records, week)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
