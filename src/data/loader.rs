use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{LoadError, PlayerRecord, Roster};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a roster from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – header row of field names, one player per line
/// * `.json`         – `[{ "week": 1, "player_name": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<Roster, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let read = || {
        std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    match ext.as_str() {
        "csv" | "txt" => parse_csv(&read()?),
        "json" => parse_json(&read()?),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse roster CSV text.
///
/// The header row is split on plain commas. Data rows go through
/// [`split_row`]; a row it rejects is split on plain commas instead. Short
/// rows are padded with empty strings, surplus values are dropped.
pub fn parse_csv(text: &str) -> Result<Roster, LoadError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut lines = text.lines();
    let headers: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, line) in lines.enumerate() {
        let values = split_row(line).unwrap_or_else(|| {
            log::debug!("row {}: unbalanced quotes, splitting on commas", row_no + 1);
            line.split(',').map(str::to_string).collect()
        });

        let mut fields = BTreeMap::new();
        for (i, header) in headers.iter().enumerate() {
            let value = values.get(i).map(|v| clean_value(v)).unwrap_or_default();
            fields.insert(header.clone(), value);
        }
        records.push(PlayerRecord::new(fields));
    }

    log::debug!("parsed {} roster rows with columns {:?}", records.len(), headers);
    Ok(Roster::new(headers, records))
}

/// Quote-aware split of one CSV row into raw tokens.
///
/// A token is any run of characters up to a comma, where a run enclosed in
/// double quotes may itself contain commas. Inside quotes `""` stands for a
/// literal quote. Quote characters are kept in the token; [`clean_value`]
/// strips the outer pair. Returns `None` if a quoted run is never closed.
pub fn split_row(row: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    token.push('"');
                    token.push('"');
                } else {
                    in_quotes = false;
                    token.push('"');
                }
            }
            '"' => {
                in_quotes = true;
                token.push('"');
            }
            ',' if !in_quotes => tokens.push(std::mem::take(&mut token)),
            _ => token.push(ch),
        }
    }

    if in_quotes {
        return None;
    }
    tokens.push(token);
    Some(tokens)
}

/// Strip one leading and one trailing quote, unescape `""`, then trim.
fn clean_value(raw: &str) -> String {
    let unquoted = raw.strip_prefix('"').unwrap_or(raw);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.replace("\"\"", "\"").trim().to_string()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "week": 1, "player_name": "Smith, John", "jersey_number": 7, "position": "QB" },
///   ...
/// ]
/// ```
///
/// Scalars are stored as text, `null` leaves the field absent. Column order
/// follows first appearance across the records.
pub fn parse_json(text: &str) -> Result<Roster, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::JsonShape("top level is not an array".into()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| LoadError::JsonShape(format!("row {i} is not an object")))?;

        let mut fields = BTreeMap::new();
        for (key, val) in obj {
            let Some(text) = json_to_text(val) else {
                continue;
            };
            if !columns.contains(key) {
                columns.push(key.clone());
            }
            fields.insert(key.clone(), text);
        }
        records.push(PlayerRecord::new(fields));
    }

    Ok(Roster::new(columns, records))
}

fn json_to_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.trim().to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
week,player_name,jersey_number,position,headshot_url
1,\"Smith, John\",7,QB,https://img.example/smith.png
1, Jane Doe ,90,DL,
2,Carl,7,QB
";

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        let roster = parse_csv(SAMPLE).unwrap();
        let first = &roster.records()[0];
        assert_eq!(first.player_name(), Some("Smith, John"));
        assert_eq!(first.jersey_number(), Some("7"));
        assert_eq!(first.position(), Some("QB"));
        assert_eq!(first.headshot_url(), Some("https://img.example/smith.png"));
    }

    #[test]
    fn values_are_trimmed_and_short_rows_padded() {
        let roster = parse_csv(SAMPLE).unwrap();
        let jane = &roster.records()[1];
        assert_eq!(jane.player_name(), Some("Jane Doe"));
        assert_eq!(jane.headshot_url(), Some(""));
        let carl = &roster.records()[2];
        assert_eq!(carl.headshot_url(), Some(""));
        assert_eq!(roster.weeks(), ["1", "2"]);
    }

    #[test]
    fn header_order_is_kept() {
        let roster = parse_csv(SAMPLE).unwrap();
        assert_eq!(
            roster.columns(),
            ["week", "player_name", "jersey_number", "position", "headshot_url"]
        );
    }

    #[test]
    fn extra_values_are_dropped_and_unknown_columns_pass_through() {
        let roster = parse_csv("week,position,team\n3,K,Hawks,surplus,more\n").unwrap();
        let rec = &roster.records()[0];
        assert_eq!(rec.get("team"), Some("Hawks"));
        assert_eq!(rec.fields().len(), 3);
    }

    #[test]
    fn empty_fields_keep_their_column() {
        let roster = parse_csv("week,player_name,jersey_number,position\n1,Ann,,LB\n").unwrap();
        let rec = &roster.records()[0];
        assert_eq!(rec.jersey_number(), Some(""));
        assert_eq!(rec.position(), Some("LB"));
    }

    #[test]
    fn unbalanced_quote_falls_back_to_comma_split() {
        assert_eq!(split_row("1,\"Bad,QB"), None);
        let roster = parse_csv("week,player_name,position\n1,\"Bad,QB\n").unwrap();
        let rec = &roster.records()[0];
        assert_eq!(rec.player_name(), Some("Bad"));
        assert_eq!(rec.position(), Some("QB"));
    }

    #[test]
    fn doubled_quotes_unescape() {
        let tokens = split_row(r#"1,"The ""Bus"", Jr.",RB"#).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(clean_value(&tokens[1]), r#"The "Bus", Jr."#);
    }

    #[test]
    fn crlf_line_endings() {
        let roster = parse_csv("week,position\r\n1,QB\r\n2,K\r\n").unwrap();
        assert_eq!(roster.records()[0].position(), Some("QB"));
        assert_eq!(roster.records()[1].week(), Some("2"));
    }

    #[test]
    fn blank_text_is_an_error() {
        assert!(matches!(parse_csv("  \n "), Err(LoadError::Empty)));
    }

    #[test]
    fn json_numbers_become_text() {
        let roster = parse_json(
            r#"[{"week": 1, "player_name": "A", "jersey_number": 7, "position": "QB", "headshot_url": null},
                {"week": "2", "player_name": "B", "position": "K", "active": true}]"#,
        )
        .unwrap();
        assert_eq!(roster.records()[0].week(), Some("1"));
        assert_eq!(roster.records()[0].jersey_number(), Some("7"));
        assert_eq!(roster.records()[0].headshot_url(), None);
        assert_eq!(roster.records()[1].get("active"), Some("true"));
        assert_eq!(roster.weeks(), ["1", "2"]);
    }

    #[test]
    fn json_columns_keep_source_order() {
        let roster = parse_json(
            r#"[{"week": 1, "player_name": "A", "position": "QB", "jersey_number": 7},
                {"week": 1, "player_name": "B", "position": "K", "team": "Hawks"}]"#,
        )
        .unwrap();
        assert_eq!(
            roster.columns(),
            ["week", "player_name", "position", "jersey_number", "team"]
        );
    }

    #[test]
    fn json_must_be_array_of_objects() {
        assert!(matches!(parse_json("{}"), Err(LoadError::JsonShape(_))));
        assert!(matches!(parse_json("[1]"), Err(LoadError::JsonShape(_))));
        assert!(matches!(parse_json("[{"), Err(LoadError::Json(_))));
    }

    #[test]
    fn load_file_rejects_unknown_extension() {
        let err = load_file(Path::new("roster.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ref e) if e == "parquet"));
    }

    #[test]
    fn load_file_reports_missing_file() {
        let err = load_file(Path::new("definitely/not/here/roster_info.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_file_reads_csv_from_disk() {
        let path = std::env::temp_dir().join(format!("roster-view-{}.csv", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let roster = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(roster.len(), 3);
    }
}
