//! Workbook ingestion: `.xlsx` worksheets into [`SheetTable`]s.
//!
//! Two readers for the two workbook shapes. Template workbooks treat row 0 as
//! the required-chunk meta row and stop collecting data at the first fully
//! blank row. Version workbooks keep every data row; blank label cells are
//! filtered later by extraction.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tracing::debug;

use sentify_model::{Result, SentifyError, SheetTable};

/// Read a sentence-template workbook.
///
/// Each worksheet becomes one [`SheetTable`] in workbook order. Rows after
/// the first fully blank data row are ignored (the blank row is the
/// end-of-data sentinel).
pub fn read_template_workbook(path: &Path) -> Result<Vec<SheetTable>> {
    read_workbook(path, true)
}

/// Read a version-extraction workbook: header row plus every data row.
pub fn read_version_workbook(path: &Path) -> Result<Vec<SheetTable>> {
    read_workbook(path, false)
}

fn read_workbook(path: &Path, stop_at_blank_row: bool) -> Result<Vec<SheetTable>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| SentifyError::Workbook(format!("open {}: {e}", path.display())))?;
    let sheet_names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| SentifyError::Workbook(format!("sheet `{name}`: {e}")))?;
        let mut sheet = SheetTable::new(name);
        // Worksheet ranges start at the first used cell; pad so cell indices
        // stay absolute column numbers, and account for blank leading rows so
        // a blank meta row never steals the first data row.
        let (row_offset, column_offset) = range
            .start()
            .map_or((0, 0), |(row, col)| (row as usize, col as usize));
        let mut rows = range.rows().map(|row| stringify_row(row, column_offset));
        if row_offset == 0 {
            sheet.meta = rows.next().unwrap_or_default();
        }
        // A blank row between the meta row and the first used row is already
        // the end-of-data sentinel in template mode.
        let data_region_open = row_offset <= 1 || !stop_at_blank_row;
        if data_region_open {
            for row in rows {
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    if stop_at_blank_row {
                        break;
                    }
                    continue;
                }
                sheet.rows.push(row);
            }
        }
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "read sheet");
        sheets.push(sheet);
    }
    Ok(sheets)
}

fn stringify_row(row: &[Data], column_offset: usize) -> Vec<String> {
    let mut cells = vec![String::new(); column_offset];
    cells.extend(row.iter().map(stringify_cell));
    cells
}

fn stringify_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => normalize_cell(s),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_cell(s),
        Data::Error(e) => format!("#ERR {e}"),
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
