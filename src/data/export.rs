use std::io::Write;

use super::grouping::GroupedRoster;

/// Write the displayed players as CSV, in display order.
///
/// The first column is the side label; the rest are `columns` in the given
/// order. Fields a record lacks are written empty.
pub fn write_grouped<W: Write>(
    writer: W,
    grouped: &GroupedRoster<'_>,
    columns: &[String],
) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("side");
    header.extend(columns.iter().map(String::as_str));
    wtr.write_record(&header)?;

    for (side, rec) in grouped.iter_players() {
        let mut row = Vec::with_capacity(columns.len() + 1);
        row.push(side.label());
        row.extend(columns.iter().map(|c| rec.get(c).unwrap_or_default()));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
