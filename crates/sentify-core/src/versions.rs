//! Per-version fragment extraction and Tibetan surface formatting.
//!
//! The version workbook shape is flat: column 0 of each data row holds one or
//! more whitespace-separated version labels, the fragment text sits in a fixed
//! later column. A row tagged with several labels contributes its fragment to
//! each of them, preserving row order across all sheets.

use sentify_model::{SheetTable, VersionMap};

/// Column holding the fragment text in version workbooks.
pub const FRAGMENT_COLUMN: usize = 3;

/// Collect fragments per version label across all sheets.
///
/// Rows with a blank label cell or no fragment text contribute nothing.
pub fn extract_versions(sheets: &[SheetTable]) -> VersionMap {
    let mut versions = VersionMap::new();
    for sheet in sheets {
        for row in &sheet.rows {
            let Some(label_cell) = row.first() else {
                continue;
            };
            if label_cell.trim().is_empty() {
                continue;
            }
            let fragment = row
                .get(FRAGMENT_COLUMN)
                .map(|cell| cell.trim())
                .unwrap_or_default();
            if fragment.is_empty() {
                continue;
            }
            for label in label_cell.split_whitespace() {
                versions.push(label, fragment.to_string());
            }
        }
    }
    versions
}

/// Rewrite every fragment with [`format_tibetan`].
pub fn apply_tibetan_formatting(versions: &mut VersionMap) {
    versions.map_fragments(format_tibetan);
}

/// Letters that absorb the tsheg in front of a closing shad.
const MERGE_BEFORE_SHAD: &[char] = &[
    'ག', 'ད', 'ན', 'བ', 'མ', 'འ', 'ར', 'ལ', 'ས', 'ི', 'ེ', 'ོ', 'ུ',
];

/// Normalize one fragment to Tibetan orthography.
///
/// Removes the `་-` editing sequence, strips internal spaces, trims the
/// tsheg at either end, turns underscores into real spaces, drops the tsheg
/// between a closing letter and a shad, and appends a shad unless the
/// fragment already ends in `།` or `ག`.
pub fn format_tibetan(fragment: &str) -> String {
    let mut text = fragment.replace("་-", "").replace(' ', "");
    text = text.trim_matches('་').replace('_', " ");
    text = merge_tsheg_before_shad(&text);
    if !text.ends_with('།') && !text.ends_with('ག') {
        text.push('།');
    }
    text
}

fn merge_tsheg_before_shad(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len()
            && MERGE_BEFORE_SHAD.contains(&chars[i])
            && chars[i + 1] == '་'
            && chars[i + 2] == '།'
        {
            out.push(chars[i]);
            out.push('།');
            i += 3;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn row_with_two_labels_feeds_both() {
        let mut sheet = SheetTable::new("S");
        sheet.rows = vec![
            cells(&["A B", "", "", "first"]),
            cells(&["B", "", "", "second"]),
        ];
        let versions = extract_versions(&[sheet]);
        assert_eq!(versions.get("A"), Some(&["first".to_string()][..]));
        assert_eq!(
            versions.get("B"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
    }

    #[test]
    fn blank_label_cell_skips_row() {
        let mut sheet = SheetTable::new("S");
        sheet.rows = vec![cells(&["", "", "", "ignored"]), cells(&["A", "", "", "kept"])];
        let versions = extract_versions(&[sheet]);
        assert_eq!(versions.len(), 1);
        assert_eq!(versions.get("A"), Some(&["kept".to_string()][..]));
    }

    #[test]
    fn labeled_row_without_fragment_is_skipped() {
        let mut sheet = SheetTable::new("S");
        sheet.rows = vec![
            cells(&["A"]),
            cells(&["A", "", "", "  "]),
            cells(&["A", "", "", "kept"]),
        ];
        let versions = extract_versions(&[sheet]);
        assert_eq!(versions.get("A"), Some(&["kept".to_string()][..]));
    }

    #[test]
    fn labels_keep_first_seen_order_across_sheets() {
        let mut first = SheetTable::new("one");
        first.rows = vec![cells(&["Z", "", "", "za"])];
        let mut second = SheetTable::new("two");
        second.rows = vec![cells(&["A", "", "", "aa"]), cells(&["Z", "", "", "zb"])];
        let versions = extract_versions(&[first, second]);
        let labels: Vec<&str> = versions.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Z", "A"]);
        assert_eq!(
            versions.get("Z"),
            Some(&["za".to_string(), "zb".to_string()][..])
        );
    }

    #[test]
    fn format_strips_spaces_and_maps_underscores() {
        // Spaces vanish, the underscore becomes the real space, and the
        // fragment gains a closing shad.
        assert_eq!(format_tibetan("ང་_འགྲོ"), "ང་ འགྲོ།");
    }

    #[test]
    fn format_trims_tsheg_and_merges_before_shad() {
        assert_eq!(format_tibetan("་ཡིན་"), "ཡིན།");
        assert_eq!(format_tibetan("ཡིན་།"), "ཡིན།");
    }

    #[test]
    fn format_keeps_existing_terminator() {
        assert_eq!(format_tibetan("ཡིན།"), "ཡིན།");
        assert_eq!(format_tibetan("ཡིག"), "ཡིག");
    }

    #[test]
    fn format_drops_editing_dash() {
        assert_eq!(format_tibetan("ཡིན་-པ"), "ཡིནཔ།");
    }
}
