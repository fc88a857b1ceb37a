use std::path::PathBuf;

#[derive(Debug)]
pub struct GenerateResult {
    pub out: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

#[derive(Debug)]
pub struct SheetSummary {
    pub sheet: String,
    /// Grouped sentence variants, not counting the original.
    pub variants: usize,
    pub groups: usize,
}

#[derive(Debug)]
pub struct VersionsResult {
    pub out: PathBuf,
    /// Label and fragment count, in first-seen order.
    pub labels: Vec<(String, usize)>,
}
