use std::cmp::Ordering;
use std::collections::HashSet;

use super::model::PlayerRecord;

// ---------------------------------------------------------------------------
// Week selection
// ---------------------------------------------------------------------------

/// Unique week identifiers, ascending by numeric value.
///
/// Weeks that do not parse as numbers sort after all numeric ones, in
/// lexical order. Records without a week column contribute nothing.
pub fn distinct_weeks(records: &[PlayerRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut weeks: Vec<String> = records
        .iter()
        .filter_map(PlayerRecord::week)
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect();
    weeks.sort_by(|a, b| compare_weeks(a, b));
    weeks
}

fn compare_weeks(a: &str, b: &str) -> Ordering {
    match (week_number(a), week_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn week_number(week: &str) -> Option<f64> {
    // Blank weeks count as non-numeric and sort after every numbered week.
    let trimmed = week.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Records whose week equals `week` exactly, in their original order.
pub fn filter_by_week<'a>(records: &'a [PlayerRecord], week: &str) -> Vec<&'a PlayerRecord> {
    records
        .iter()
        .filter(|rec| rec.week() == Some(week))
        .collect()
}
