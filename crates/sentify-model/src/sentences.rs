//! Assembled-sentence containers and export format selection.

use std::collections::BTreeMap;

use crate::error::SentifyError;

/// Sentences of one sheet, grouped by chunk count.
///
/// `original` is the canonical reference phrasing (the first assembled
/// sentence); it is kept out of the groups and shown in export headers.
/// `by_size` iterates in ascending group size; members are already in
/// collation order.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SentenceGroups {
    pub original: String,
    pub by_size: BTreeMap<usize, Vec<String>>,
}

impl SentenceGroups {
    pub fn sentence_count(&self) -> usize {
        self.by_size.values().map(Vec::len).sum()
    }
}

/// Grouped sentences for one sheet, in input workbook order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SheetSentences {
    pub sheet: String,
    pub groups: SentenceGroups,
}

/// Version label -> fragments, iterating in first-seen label order.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct VersionMap {
    entries: Vec<(String, Vec<String>)>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to `label`'s list, creating the list on first use.
    pub fn push(&mut self, label: &str, fragment: String) {
        match self.entries.iter_mut().find(|(name, _)| name == label) {
            Some((_, fragments)) => fragments.push(fragment),
            None => self.entries.push((label.to_string(), vec![fragment])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, fragments)| (name.as_str(), fragments.as_slice()))
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, fragments)| fragments.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replace every label's fragment list through `f`, keeping label order.
    pub fn map_fragments<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for (_, fragments) in &mut self.entries {
            for fragment in fragments.iter_mut() {
                *fragment = f(fragment);
            }
        }
    }
}

/// Supported export formats for the sentence pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    Xlsx,
    Docx,
}

impl OutputFormat {
    /// Parse a requested format name, rejecting anything outside the
    /// supported set before any output is written.
    pub fn parse(requested: &str) -> Result<Self, SentifyError> {
        match requested.trim().to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "docx" => Ok(OutputFormat::Docx),
            _ => Err(SentifyError::UnsupportedFormat {
                requested: requested.to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Docx => "docx",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_map_keeps_first_seen_order() {
        let mut versions = VersionMap::new();
        versions.push("B", "one".to_string());
        versions.push("A", "two".to_string());
        versions.push("B", "three".to_string());
        let labels: Vec<&str> = versions.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert_eq!(versions.get("B"), Some(&["one".to_string(), "three".to_string()][..]));
    }

    #[test]
    fn unsupported_format_names_allowed_set() {
        let err = OutputFormat::parse("pdf").expect_err("pdf must be rejected");
        let message = err.to_string();
        assert!(message.contains("pdf"));
        assert!(message.contains("xlsx"));
        assert!(message.contains("docx"));
    }

    #[test]
    fn groups_serialize() {
        let mut groups = SentenceGroups::default();
        groups.original = "x z".to_string();
        groups.by_size.insert(2, vec!["x z".to_string()]);
        let json = serde_json::to_string(&groups).expect("serialize groups");
        let round: SentenceGroups = serde_json::from_str(&json).expect("deserialize groups");
        assert_eq!(round.original, "x z");
        assert_eq!(round.sentence_count(), 1);
    }
}
