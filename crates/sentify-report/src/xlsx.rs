//! Spreadsheet export via `rust_xlsxwriter`.
//!
//! One worksheet per input sheet, same name and order. Fixed cell layout:
//! `A1` holds the selection label, `B1` the original sentence, then per group
//! size a heading in column C followed by one sentence per row in column D.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use sentify_model::{Language, Result, SentifyError, SheetSentences};

fn selection_label(language: &Language) -> &'static str {
    match language {
        Language::Tibetan => "འདམ་ཀ",
        Language::Generic(_) => "Template",
    }
}

pub(crate) fn write_sentences(
    sheets: &[SheetSentences],
    language: &Language,
    out: &Path,
) -> Result<()> {
    let font = "Jomolhari";
    let original_format = Format::new()
        .set_font_name(font)
        .set_font_size(20)
        .set_bold()
        .set_font_color(Color::RGB(0x0000CC))
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);
    let section_format = Format::new()
        .set_font_name(font)
        .set_font_size(15)
        .set_italic()
        .set_font_color(Color::RGB(0x6600CC))
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);
    let sentence_format = Format::new()
        .set_font_name(font)
        .set_font_size(12)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);

    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet.sheet)
            .map_err(|e| SentifyError::Export(format!("sheet `{}`: {e}", sheet.sheet)))?;
        worksheet
            .write_string_with_format(0, 0, selection_label(language), &sentence_format)
            .and_then(|ws| {
                ws.write_string_with_format(0, 1, &sheet.groups.original, &original_format)
            })
            .map_err(|e| SentifyError::Export(e.to_string()))?;
        let mut row: u32 = 2;
        for (size, sentences) in &sheet.groups.by_size {
            worksheet
                .write_string_with_format(row, 2, language.group_label(*size), &section_format)
                .map_err(|e| SentifyError::Export(e.to_string()))?;
            row += 1;
            for sentence in sentences {
                worksheet
                    .write_string_with_format(row, 3, sentence, &sentence_format)
                    .map_err(|e| SentifyError::Export(e.to_string()))?;
                row += 1;
            }
        }
    }
    workbook
        .save(out)
        .map_err(|e| SentifyError::Export(format!("save {}: {e}", out.display())))?;
    Ok(())
}
