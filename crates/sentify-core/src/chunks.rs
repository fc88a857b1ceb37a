//! Chunk range scanning and alternative expansion.
//!
//! A sheet's first data row defines the column tiling: every blank cell is a
//! delimiter between two chunk ranges. The meta row marks required chunks (any
//! non-empty cell inside a range makes the whole chunk required). Expansion
//! turns each range into the de-duplicated set of surface strings found across
//! the data rows, plus an empty alternative for optional chunks.

use sentify_model::{ChunkRange, Language, Result, SentifyError, SheetTable};

/// The chunk structure of one sheet, ready for assembly.
#[derive(Debug, Clone)]
pub struct SheetChunks {
    pub ranges: Vec<ChunkRange>,
    pub required: Vec<bool>,
    /// One alternative list per range, first-occurrence order, de-duplicated.
    pub alternatives: Vec<Vec<String>>,
}

pub(crate) fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Partition a row's column span into chunk ranges.
///
/// A blank cell ends the current range and the next range starts after it;
/// the trailing range always runs to the last column. A row with no blank
/// cells yields a single range spanning the whole row. A delimiter with no
/// columns before it (a leading blank or two adjacent blanks) leaves an
/// empty range; the offending column is returned as the error.
pub fn scan_ranges(row: &[String]) -> std::result::Result<Vec<ChunkRange>, usize> {
    let mut ranges = Vec::new();
    let mut start = 0usize;
    for (i, cell) in row.iter().enumerate() {
        if is_blank(cell) {
            if i == start {
                return Err(i);
            }
            ranges.push(ChunkRange::new(start, i - 1));
            start = i + 1;
        }
    }
    if start < row.len() {
        ranges.push(ChunkRange::new(start, row.len() - 1));
    }
    Ok(ranges)
}

/// Required flag per range: true iff any meta cell inside the range is set.
pub fn required_flags(meta: &[String], ranges: &[ChunkRange]) -> Vec<bool> {
    ranges
        .iter()
        .map(|range| {
            range
                .columns()
                .any(|col| meta.get(col).is_some_and(|cell| !is_blank(cell)))
        })
        .collect()
}

/// Check that every data row is blank at each delimiter column.
///
/// The tiling is derived from the first data row only; a later row carrying
/// data in a delimiter column would otherwise be silently dropped.
fn validate_delimiters(sheet: &SheetTable, ranges: &[ChunkRange]) -> Result<()> {
    let width = sheet.rows.first().map_or(0, Vec::len);
    let mut delimiter = vec![true; width];
    for range in ranges {
        for col in range.columns() {
            if col < width {
                delimiter[col] = false;
            }
        }
    }
    for row in &sheet.rows {
        for (col, is_delim) in delimiter.iter().enumerate() {
            if *is_delim && row.get(col).is_some_and(|cell| !is_blank(cell)) {
                return Err(SentifyError::MalformedSheet {
                    sheet: sheet.name.clone(),
                    column: col,
                });
            }
        }
    }
    Ok(())
}

impl SheetChunks {
    /// Derive the chunk structure of `sheet` and expand every range.
    ///
    /// Returns an empty structure for a sheet with no data rows.
    pub fn from_sheet(sheet: &SheetTable, language: &Language) -> Result<Self> {
        let Some(first_row) = sheet.rows.first() else {
            return Ok(Self {
                ranges: Vec::new(),
                required: Vec::new(),
                alternatives: Vec::new(),
            });
        };
        let ranges = scan_ranges(first_row).map_err(|column| SentifyError::MalformedSheet {
            sheet: sheet.name.clone(),
            column,
        })?;
        validate_delimiters(sheet, &ranges)?;
        let required = required_flags(&sheet.meta, &ranges);
        let separator = language.chunk_separator();

        let mut alternatives = Vec::with_capacity(ranges.len());
        for (range, is_required) in ranges.iter().zip(&required) {
            let mut variants: Vec<String> = Vec::new();
            for row in &sheet.rows {
                let joined = join_range(row, range, separator);
                if !joined.is_empty() && !variants.contains(&joined) {
                    variants.push(joined);
                }
            }
            if !is_required {
                variants.push(String::new());
            }
            alternatives.push(variants);
        }
        Ok(Self {
            ranges,
            required,
            alternatives,
        })
    }
}

/// Join a row's cells inside `range`, skipping blank cells.
fn join_range(row: &[String], range: &ChunkRange, separator: &str) -> String {
    let mut joined = String::new();
    for col in range.columns() {
        let Some(cell) = row.get(col) else { continue };
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(cell);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn scan_splits_on_blank_columns() {
        let row = cells(&["a", "b", "", "c"]);
        let ranges = scan_ranges(&row).expect("ranges");
        assert_eq!(ranges, vec![ChunkRange::new(0, 1), ChunkRange::new(3, 3)]);
    }

    #[test]
    fn scan_without_blanks_yields_single_range() {
        let row = cells(&["a", "b", "c"]);
        assert_eq!(scan_ranges(&row).expect("ranges"), vec![ChunkRange::new(0, 2)]);
    }

    #[test]
    fn scan_rejects_leading_and_doubled_delimiters() {
        assert_eq!(scan_ranges(&cells(&["", "a"])), Err(0));
        assert_eq!(scan_ranges(&cells(&["a", "", "", "b"])), Err(2));
    }

    #[test]
    fn required_flag_set_by_any_meta_cell_in_range() {
        let meta = cells(&["", "x", "", ""]);
        let ranges = vec![ChunkRange::new(0, 1), ChunkRange::new(3, 3)];
        assert_eq!(required_flags(&meta, &ranges), vec![true, false]);
    }

    #[test]
    fn optional_chunk_gains_empty_alternative() {
        let mut sheet = SheetTable::new("S");
        sheet.meta = cells(&["x", "", ""]);
        sheet.rows = vec![cells(&["a", "", "z"]), cells(&["b", "", "z"])];
        let chunks = SheetChunks::from_sheet(&sheet, &Language::from_tag("en")).expect("chunks");
        assert_eq!(chunks.required, vec![true, false]);
        assert_eq!(chunks.alternatives[0], vec!["a", "b"]);
        assert_eq!(chunks.alternatives[1], vec!["z", ""]);
    }

    #[test]
    fn required_chunk_never_contains_empty() {
        let mut sheet = SheetTable::new("S");
        sheet.meta = cells(&["x"]);
        sheet.rows = vec![cells(&["a"]), cells(&["a"]), cells(&["b"])];
        let chunks = SheetChunks::from_sheet(&sheet, &Language::from_tag("en")).expect("chunks");
        assert_eq!(chunks.alternatives, vec![vec!["a", "b"]]);
    }

    #[test]
    fn tibetan_joins_without_separator() {
        let mut sheet = SheetTable::new("S");
        sheet.meta = cells(&["x", "x"]);
        sheet.rows = vec![cells(&["ང་", "འགྲོ"])];
        let chunks = SheetChunks::from_sheet(&sheet, &Language::Tibetan).expect("chunks");
        assert_eq!(chunks.alternatives[0], vec!["ང་འགྲོ"]);
    }

    #[test]
    fn data_in_delimiter_column_is_malformed() {
        let mut sheet = SheetTable::new("bad");
        sheet.meta = cells(&["x", "", ""]);
        sheet.rows = vec![cells(&["a", "", "z"]), cells(&["b", "!", "z"])];
        let err = SheetChunks::from_sheet(&sheet, &Language::from_tag("en"))
            .expect_err("delimiter column holds data");
        match err {
            SentifyError::MalformedSheet { sheet, column } => {
                assert_eq!(sheet, "bad");
                assert_eq!(column, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sheet_without_rows_is_empty() {
        let sheet = SheetTable::new("empty");
        let chunks = SheetChunks::from_sheet(&sheet, &Language::Tibetan).expect("chunks");
        assert!(chunks.ranges.is_empty());
        assert!(chunks.alternatives.is_empty());
    }
}
