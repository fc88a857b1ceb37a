//! Grouping assembled sentences by chunk count and sorting each group.

use std::collections::BTreeMap;

use sentify_model::SentenceGroups;

use crate::collation::Collation;

/// Group sentences by token count and sort each group.
///
/// The first sentence is the canonical reference phrasing; it is recorded as
/// `original` and kept out of the groups. Tokens are the non-empty
/// whitespace-separated pieces of a sentence, so the group key always equals
/// what re-splitting the sentence would yield.
pub fn group_sentences(sentences: Vec<String>, collation: &dyn Collation) -> SentenceGroups {
    let mut iter = sentences.into_iter();
    let Some(original) = iter.next() else {
        return SentenceGroups::default();
    };
    let mut by_size: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for sentence in iter {
        let tokens = sentence.split_whitespace().count();
        by_size.entry(tokens).or_default().push(sentence);
    }
    for group in by_size.values_mut() {
        collation.sort(group);
    }
    SentenceGroups { original, by_size }
}
