use std::path::Path;

use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook};
use tracing::{info, instrument};

use crate::error::Result;
use crate::model::{Cell, MemberRow, Report};

const SHEET_NAME: &str = "CWL Stats";

/// Write the report as a single-sheet workbook with a header row.
#[instrument(skip(report), fields(rows = report.len()))]
pub fn write_xlsx(report: &Report, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in (0u16..).zip(MemberRow::COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row_idx, row) in (1u32..).zip(&report.rows) {
        for (col, cell) in (0u16..).zip(row.cells()) {
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(row_idx, col, text)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row_idx, col, n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save(path)?;
    info!(path = %path.display(), "spreadsheet written");
    Ok(())
}

/// `"<YYYYMMDD-HHMMSS> <clan name> CWL Stats.xlsx"`.
///
/// Characters that cannot appear in a file name are replaced with `_`.
pub fn output_file_name(timestamp: NaiveDateTime, clan_name: &str) -> String {
    let clan_name: String = clan_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!(
        "{} {} CWL Stats.xlsx",
        timestamp.format("%Y%m%d-%H%M%S"),
        clan_name.trim()
    )
}
