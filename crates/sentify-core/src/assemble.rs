//! Cross-product sentence assembly and surface cleanup.

use sentify_model::Language;

/// Build every combination of one alternative per chunk, joined by spaces.
///
/// Accumulates suffixes from the last alternative list backwards, so the
/// depth of the template never touches the stack. The output length is
/// exactly the product of the list cardinalities; duplicates that stringify
/// identically are kept.
pub fn assemble(alternatives: &[Vec<String>]) -> Vec<String> {
    let Some(last) = alternatives.last() else {
        return Vec::new();
    };
    let mut suffixes = last.clone();
    for set in alternatives.iter().rev().skip(1) {
        let mut combined = Vec::with_capacity(set.len() * suffixes.len());
        for alternative in set {
            for suffix in &suffixes {
                combined.push(format!("{alternative} {suffix}"));
            }
        }
        suffixes = combined;
    }
    suffixes
}

/// Normalize one assembled sentence for the given language.
///
/// Runs of whitespace collapse to single spaces (omitted optional chunks
/// leave doubled or trailing spaces behind). Non-Tibetan text additionally
/// loses the space before `,`/`.`/`;` and has `" - "` tightened to a bare
/// hyphen.
pub fn cleanup(sentence: &str, language: &Language) -> String {
    let collapsed = collapse_whitespace(sentence);
    if !language.fixes_punctuation_spacing() {
        return collapsed;
    }
    strip_space_before_punctuation(&collapsed).replace(" - ", "-")
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

fn strip_space_before_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ' ' && matches!(chars.peek(), Some(',' | '.' | ';')) {
            continue;
        }
        out.push(ch);
    }
    out
}
