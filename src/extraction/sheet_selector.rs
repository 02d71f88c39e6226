//! Choosing the sheet to extract from.

use super::diagnostics::SelectionReason;
use crate::constants::PREFERRED_SHEET_KEYWORD;
use crate::workbook::{Sheet, Workbook};
use crate::{Error, Result};
use tracing::debug;

/// The chosen sheet and why it was chosen
#[derive(Debug, Clone, Copy)]
pub struct SheetSelection<'a> {
    pub sheet: &'a Sheet,
    pub reason: SelectionReason,
}

/// Pick a sheet: exact requested name, else first name containing "club"
/// (case-insensitive), else the first sheet.
pub fn select_sheet<'a>(
    workbook: &'a Workbook,
    requested: Option<&str>,
) -> Result<SheetSelection<'a>> {
    if workbook.is_empty() {
        return Err(Error::no_sheets_found(workbook.source()));
    }

    if let Some(requested) = requested {
        if let Some(sheet) = workbook.sheets().iter().find(|s| s.name() == requested) {
            return Ok(SheetSelection {
                sheet,
                reason: SelectionReason::Requested,
            });
        }
        debug!(
            "Requested sheet '{}' not in {:?}",
            requested,
            workbook.sheet_names()
        );
    }

    Ok(default_sheet(workbook))
}

/// Heuristic choice ignoring any requested name. The workbook must not be empty.
fn default_sheet(workbook: &Workbook) -> SheetSelection<'_> {
    let sheets = workbook.sheets();
    match sheets.iter().find(|s| is_preferred_name(s.name())) {
        Some(sheet) => SheetSelection {
            sheet,
            reason: SelectionReason::ContainsClub,
        },
        None => SheetSelection {
            sheet: &sheets[0],
            reason: SelectionReason::FirstSheet,
        },
    }
}

/// Name of the sheet that would be used when none is requested
pub fn default_sheet_name(workbook: &Workbook) -> Option<&str> {
    if workbook.is_empty() {
        return None;
    }
    Some(default_sheet(workbook).sheet.name())
}

fn is_preferred_name(name: &str) -> bool {
    name.to_lowercase().contains(PREFERRED_SHEET_KEYWORD)
}
