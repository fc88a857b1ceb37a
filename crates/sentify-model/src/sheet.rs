//! Raw sheet data as read from a workbook, before any expansion.

/// One worksheet: a meta row plus the contiguous block of data rows.
///
/// `meta` marks which columns belong to required chunks (any non-empty cell
/// inside a chunk's column range makes the whole chunk required). `rows` are
/// the alternative phrasings; ingestion stops at the first fully-blank row.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SheetTable {
    pub name: String,
    pub meta: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// An inclusive `(start, end)` column span holding one chunk.
///
/// Ranges tile a sheet's full column span left to right, separated by single
/// blank delimiter columns that are not part of any range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChunkRange {
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn columns(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
