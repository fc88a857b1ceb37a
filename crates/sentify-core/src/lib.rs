//! Core pipeline: chunk extraction, expansion, assembly, grouping, and the
//! independent version-extraction path.

pub mod assemble;
pub mod chunks;
pub mod collation;
pub mod group;
pub mod versions;

use tracing::debug;

use sentify_model::{Language, Result, SentenceGroups, SheetSentences, SheetTable};

pub use assemble::{assemble, cleanup};
pub use chunks::SheetChunks;
pub use collation::{Collation, Lexicographic, TibetanCollation, collation_for};
pub use group::group_sentences;
pub use versions::{FRAGMENT_COLUMN, apply_tibetan_formatting, extract_versions, format_tibetan};

/// Expand one sheet's template into grouped, sorted sentence variants.
pub fn expand_sheet(sheet: &SheetTable, language: &Language) -> Result<SentenceGroups> {
    let chunks = SheetChunks::from_sheet(sheet, language)?;
    let sentences: Vec<String> = assemble(&chunks.alternatives)
        .iter()
        .map(|sentence| cleanup(sentence, language))
        .collect();
    debug!(
        sheet = %sheet.name,
        chunks = chunks.ranges.len(),
        variants = sentences.len(),
        "expanded sheet"
    );
    let collation = collation_for(language);
    Ok(group_sentences(sentences, collation.as_ref()))
}

/// Expand every sheet of a workbook, preserving sheet order.
pub fn expand_workbook(sheets: &[SheetTable], language: &Language) -> Result<Vec<SheetSentences>> {
    sheets
        .iter()
        .map(|sheet| {
            Ok(SheetSentences {
                sheet: sheet.name.clone(),
                groups: expand_sheet(sheet, language)?,
            })
        })
        .collect()
}
