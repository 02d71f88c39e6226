//! Tests for alias-based column resolution

use crate::extraction::column_resolver::{BoundColumns, resolve_columns};
use crate::extraction::table::normalize;
use crate::models::Field;
use crate::workbook::Sheet;

fn table_with_header(header: &[&str]) -> crate::extraction::NormalizedTable {
    normalize(&Sheet::from_rows("Entries", &[header]), Some(0))
}

#[test]
fn test_standard_names_resolve() {
    let binding = resolve_columns(&table_with_header(&[
        "Helmet",
        "Last Name",
        "First Name",
        "Club",
    ]));

    assert_eq!(
        binding.complete(),
        Some(BoundColumns {
            helmet: 0,
            last_name: 1,
            first_name: 2,
            club: 3,
        })
    );
    assert!(binding.missing().is_empty());
}

#[test]
fn test_matching_is_case_insensitive() {
    let binding = resolve_columns(&table_with_header(&[
        "CLUB NAME",
        "helmet number",
        "firstname",
        "LASTNAME",
    ]));

    assert_eq!(binding.helmet, Some(1));
    assert_eq!(binding.last_name, Some(3));
    assert_eq!(binding.first_name, Some(2));
    assert_eq!(binding.club, Some(0));
}

#[test]
fn test_earlier_alias_wins_over_earlier_column() {
    // "Surname" comes first positionally, but "Last" is earlier in the alias list
    let binding = resolve_columns(&table_with_header(&[
        "Surname", "Last", "First", "Team", "Number",
    ]));

    assert_eq!(binding.last_name, Some(1));
    assert_eq!(binding.helmet, Some(4));
}

#[test]
fn test_duplicate_columns_bind_leftmost() {
    let binding = resolve_columns(&table_with_header(&[
        "Helmet", "Club", "Last Name", "First Name", "club",
    ]));

    assert_eq!(binding.club, Some(1));
}

#[test]
fn test_matching_is_exact_not_substring() {
    let binding = resolve_columns(&table_with_header(&[
        "Helmet No.",
        "Last Name",
        "First Name",
        "Club",
    ]));

    assert_eq!(binding.helmet, None);
    assert_eq!(binding.missing(), vec![Field::Helmet]);
    assert_eq!(binding.complete(), None);
}

#[test]
fn test_unrecognized_columns_leave_every_field_missing() {
    let binding = resolve_columns(&table_with_header(&["Bib", "Name", "Forename", "Affiliation"]));

    assert_eq!(
        binding.missing(),
        vec![Field::Helmet, Field::LastName, Field::FirstName, Field::Club]
    );
}

#[test]
fn test_synthesized_names_do_not_match() {
    let binding = resolve_columns(&table_with_header(&["", "", "", ""]));
    assert_eq!(binding.missing().len(), 4);
}
