//! Document export via `docx-rs`.
//!
//! Sentence mode: one level-1 heading per sheet (sheet name plus original
//! sentence), a level-2 heading per group size, one bulleted paragraph per
//! sentence. Version mode: one level-1 heading per label, fragments joined
//! into a single paragraph.

use std::fs::File;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use sentify_model::{Language, Result, SentifyError, SheetSentences, VersionMap};

const BULLET_NUMBERING: usize = 1;

fn base_document() -> Docx {
    Docx::new()
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(40)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(30)
                .italic(),
        )
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(720), None, None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

fn heading(text: &str, style: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text)).style(style)
}

pub(crate) fn write_sentences(
    sheets: &[SheetSentences],
    language: &Language,
    out: &Path,
) -> Result<()> {
    let mut docx = base_document();
    for sheet in sheets {
        let title = format!("{} {}", sheet.sheet, sheet.groups.original);
        docx = docx.add_paragraph(heading(&title, "Heading1"));
        docx = docx.add_paragraph(Paragraph::new());
        for (size, sentences) in &sheet.groups.by_size {
            docx = docx.add_paragraph(heading(&language.group_label(*size), "Heading2"));
            for sentence in sentences {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(sentence))
                        .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
                );
            }
        }
    }
    save(docx, out)
}

pub(crate) fn write_versions(versions: &VersionMap, out: &Path) -> Result<()> {
    let mut docx = base_document();
    for (label, fragments) in versions.iter() {
        docx = docx.add_paragraph(heading(label, "Heading1"));
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(fragments.join(" "))),
        );
    }
    save(docx, out)
}

fn save(docx: Docx, out: &Path) -> Result<()> {
    let file = File::create(out)
        .map_err(|e| SentifyError::Export(format!("create {}: {e}", out.display())))?;
    docx.build()
        .pack(file)
        .map_err(|e| SentifyError::Export(format!("write {}: {e}", out.display())))?;
    Ok(())
}
