//! Tests for table normalization

use super::club_results_sheet;
use crate::extraction::table::normalize;
use crate::workbook::Sheet;

#[test]
fn test_columns_from_detected_header_row() {
    let table = normalize(&club_results_sheet(), Some(2));

    assert_eq!(
        table.columns(),
        &["Helmet #", "Surname", "Given Name", "Team"]
    );
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows()[0], vec!["12", "Smith", "Anna", "Nordic Club"]);
}

#[test]
fn test_header_names_are_trimmed_and_blanks_synthesized() {
    let sheet = Sheet::from_rows(
        "Entries",
        &[&["  Helmet ", "", "Club", ""], &["1", "x", "y", "z"]],
    );

    let table = normalize(&sheet, Some(0));

    assert_eq!(table.columns(), &["Helmet", "Column2", "Club", "Column4"]);
}

#[test]
fn test_short_rows_are_padded_not_dropped() {
    let sheet = Sheet::from_rows(
        "Entries",
        &[
            &["Helmet", "Last Name", "First Name", "Club"],
            &["1"],
            &[],
            &["2", "Lee", "Kim", "Club", "extra"],
        ],
    );

    let table = normalize(&sheet, Some(0));

    assert_eq!(table.column_count(), 5);
    assert_eq!(table.columns()[4], "Column5");
    assert_eq!(table.row_count(), 3);
    assert!(table.rows().iter().all(|row| row.len() == 5));
    assert_eq!(table.rows()[0], vec!["1", "", "", "", ""]);
    assert_eq!(table.rows()[1], vec!["", "", "", "", ""]);
}

#[test]
fn test_data_cells_keep_their_whitespace() {
    let table = normalize(&club_results_sheet(), Some(2));
    assert_eq!(table.rows()[3][0], "  7 ");
}

#[test]
fn test_fallback_uses_first_row() {
    let sheet = club_results_sheet();

    let table = normalize(&sheet, None);

    assert_eq!(
        table.columns(),
        &["Regional Cup 2024 - Round 3", "Column2", "Column3", "Column4"]
    );
    assert_eq!(table.row_count(), sheet.row_count() - 1);
}

#[test]
fn test_out_of_range_header_index_uses_first_row() {
    let sheet = Sheet::from_rows("Entries", &[&["a", "b"], &["1", "2"]]);

    assert_eq!(normalize(&sheet, Some(10)), normalize(&sheet, None));
}

#[test]
fn test_empty_sheet_gives_empty_table() {
    let table = normalize(&Sheet::new("Empty", Vec::new()), None);

    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_header_only_sheet_has_no_rows() {
    let sheet = Sheet::from_rows("Entries", &[&["Helmet", "Last", "First", "Club"]]);

    let table = normalize(&sheet, Some(0));

    assert_eq!(table.column_count(), 4);
    assert_eq!(table.row_count(), 0);
}
