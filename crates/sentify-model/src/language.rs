//! Language variants and the per-language surface rules.
//!
//! Each supported language bundles the data the pipeline needs: the separator
//! used when joining sub-cells inside a chunk, whether sentences get the
//! Latin-style punctuation-spacing cleanup, and the localized label used for
//! group-size subheadings in exports.

use std::fmt;

/// A closed set of language variants.
///
/// `"bo"` selects Tibetan (no inter-chunk separator, Tibetan collation and
/// surface formatting). Every other tag takes the generic path: space-joined
/// chunks, punctuation-spacing cleanup, lexicographic collation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    Tibetan,
    Generic(String),
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "bo" => Language::Tibetan,
            other => Language::Generic(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Language::Tibetan => "bo",
            Language::Generic(tag) => tag,
        }
    }

    /// Separator used when joining the cells of one chunk range.
    pub fn chunk_separator(&self) -> &'static str {
        match self {
            Language::Tibetan => "",
            Language::Generic(_) => " ",
        }
    }

    /// Whether assembled sentences get the space-before-punctuation cleanup.
    ///
    /// Tibetan text uses its own punctuation (shad) and is left untouched.
    pub fn fixes_punctuation_spacing(&self) -> bool {
        matches!(self, Language::Generic(_))
    }

    /// Localized subheading text for a group of sentences with `size` chunks.
    pub fn group_label(&self, size: usize) -> String {
        match self {
            Language::Tibetan => format!("དུམ་བུ་ {size}ཡོད་པ།"),
            Language::Generic(_) => format!("Chunks: {size}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
