//! Row validation and participant record construction.

use super::column_resolver::BoundColumns;
use super::table::NormalizedTable;
use crate::models::ParticipantRecord;
use tracing::debug;

/// What happened to a single data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(ParticipantRecord),
    /// All four bound cells empty
    Blank,
    /// Some but not all bound cells empty
    Incomplete,
    /// Helmet cell is not a base-10 integer
    InvalidHelmet,
}

/// Classify one row of the table.
///
/// Footers, notes and DNS/DNF markers end up as skips, never as errors.
pub fn classify_row(row: &[String], columns: &BoundColumns) -> RowOutcome {
    let cell = |index: usize| row.get(index).map(|value| value.trim()).unwrap_or("");

    let helmet = cell(columns.helmet);
    let last_name = cell(columns.last_name);
    let first_name = cell(columns.first_name);
    let club = cell(columns.club);

    let values = [helmet, last_name, first_name, club];
    if values.iter().all(|value| value.is_empty()) {
        return RowOutcome::Blank;
    }
    if values.iter().any(|value| value.is_empty()) {
        return RowOutcome::Incomplete;
    }

    match helmet.parse::<i32>() {
        Ok(helmet) => {
            RowOutcome::Accepted(ParticipantRecord::new(helmet, last_name, first_name, club))
        }
        Err(_) => RowOutcome::InvalidHelmet,
    }
}

/// Accepted records in table order; duplicates by helmet are kept
pub fn extract(table: &NormalizedTable, columns: &BoundColumns) -> Vec<ParticipantRecord> {
    let records: Vec<ParticipantRecord> = table
        .rows()
        .iter()
        .filter_map(|row| match classify_row(row, columns) {
            RowOutcome::Accepted(record) => Some(record),
            _ => None,
        })
        .collect();

    debug!(
        "Accepted {} of {} data rows",
        records.len(),
        table.row_count()
    );
    records
}
