//! Binding semantic fields to table columns through ordered alias lists.

use super::table::NormalizedTable;
use crate::constants::column_aliases;
use crate::models::Field;

/// Accepted column names for a field, in preference order
pub fn aliases(field: Field) -> &'static [&'static str] {
    match field {
        Field::Helmet => column_aliases::HELMET,
        Field::LastName => column_aliases::LAST_NAME,
        Field::FirstName => column_aliases::FIRST_NAME,
        Field::Club => column_aliases::CLUB,
    }
}

/// Column position per field, `None` when no alias matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnBinding {
    pub helmet: Option<usize>,
    pub last_name: Option<usize>,
    pub first_name: Option<usize>,
    pub club: Option<usize>,
}

/// A binding with every field resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundColumns {
    pub helmet: usize,
    pub last_name: usize,
    pub first_name: usize,
    pub club: usize,
}

impl ColumnBinding {
    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Helmet => self.helmet,
            Field::LastName => self.last_name,
            Field::FirstName => self.first_name,
            Field::Club => self.club,
        }
    }

    /// Fields left unresolved, in field order
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// All four positions, if every field was resolved
    pub fn complete(&self) -> Option<BoundColumns> {
        Some(BoundColumns {
            helmet: self.helmet?,
            last_name: self.last_name?,
            first_name: self.first_name?,
            club: self.club?,
        })
    }
}

/// Resolve every field against the table's column names.
///
/// Matching is case-insensitive and exact. Aliases are tried in order and the
/// first one present wins; with duplicate column names the leftmost is bound.
pub fn resolve_columns(table: &NormalizedTable) -> ColumnBinding {
    let lowered: Vec<String> = table
        .columns()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();

    let find = |field: Field| {
        aliases(field).iter().find_map(|alias| {
            let alias = alias.to_lowercase();
            lowered.iter().position(|name| *name == alias)
        })
    };

    ColumnBinding {
        helmet: find(Field::Helmet),
        last_name: find(Field::LastName),
        first_name: find(Field::FirstName),
        club: find(Field::Club),
    }
}
