//! Language-specific collation providers.
//!
//! Sorting is a strategy selected once per pipeline run: Tibetan gets the
//! syllable-wise alphabetic order below, every other language a plain
//! lexicographic order. Both are deterministic total orders, so re-sorting a
//! sorted group is a no-op.

use std::cmp::Ordering;

use sentify_model::Language;

/// A deterministic total order over strings of one language.
pub trait Collation: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Stable in-place sort under this order.
    fn sort(&self, items: &mut [String]) {
        items.sort_by(|a, b| self.compare(a.as_str(), b.as_str()));
    }
}

/// Select the collation for a language.
pub fn collation_for(language: &Language) -> Box<dyn Collation> {
    match language {
        Language::Tibetan => Box::new(TibetanCollation),
        Language::Generic(_) => Box::new(Lexicographic),
    }
}

/// Plain `str` ordering, used for generic language tags.
pub struct Lexicographic;

impl Collation for Lexicographic {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Alphabetic Tibetan collation.
///
/// Strings compare syllable by syllable (syllables are delimited by the tsheg
/// `་`, the shad `།`, and whitespace). Within a syllable, characters compare
/// by an alphabet weight: letters and vowel signs of the Tibetan block keep
/// their dictionary order (the block lays out consonants and vowel signs
/// alphabetically), a bare consonant sorts before the same consonant with a
/// vowel sign, and anything outside the block sorts after all Tibetan text.
pub struct TibetanCollation;

const TIBETAN_BLOCK_START: u32 = 0x0F40;
const TIBETAN_BLOCK_END: u32 = 0x0FBC;

fn weight(ch: char) -> u32 {
    let cp = ch as u32;
    if (TIBETAN_BLOCK_START..=TIBETAN_BLOCK_END).contains(&cp) {
        cp - TIBETAN_BLOCK_START
    } else {
        0x1_0000 + cp
    }
}

fn syllables(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| ch == '་' || ch == '།' || ch.is_whitespace())
        .filter(|syllable| !syllable.is_empty())
}

fn compare_syllable(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(weight)
        .cmp(b.chars().map(weight))
}

impl Collation for TibetanCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut left = syllables(a);
        let mut right = syllables(b);
        loop {
            match (left.next(), right.next()) {
                (None, None) => return a.cmp(b),
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(l), Some(r)) => match compare_syllable(l, r) {
                    Ordering::Equal => {}
                    other => return other,
                },
            }
        }
    }
}
