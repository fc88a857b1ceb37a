//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use sentify_core::{apply_tibetan_formatting, expand_workbook, extract_versions};
use sentify_ingest::{read_template_workbook, read_version_workbook};
use sentify_model::{Language, OutputFormat};
use sentify_report::{export_sentences, export_versions};

use crate::cli::{GenerateArgs, VersionsArgs};
use crate::summary::apply_table_style;
use crate::types::{GenerateResult, SheetSummary, VersionsResult};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    // Reject unsupported formats before anything is read or written.
    let format = OutputFormat::parse(&args.format)?;
    let language = Language::from_tag(&args.lang);
    check_input(&args.input)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| derived_output(&args.input, "sentences", format.extension()));

    let ingest_span = info_span!("ingest", input = %args.input.display());
    let sheets = ingest_span
        .in_scope(|| read_template_workbook(&args.input))
        .with_context(|| format!("read template workbook {}", args.input.display()))?;

    let expand_span = info_span!("expand", lang = %language);
    let expanded = expand_span
        .in_scope(|| expand_workbook(&sheets, &language))
        .context("expand sentence templates")?;

    let export_span = info_span!("export", out = %out.display());
    export_span
        .in_scope(|| export_sentences(&expanded, &language, format, &out))
        .context("write sentence export")?;

    let sheets = expanded
        .iter()
        .map(|sheet| SheetSummary {
            sheet: sheet.sheet.clone(),
            variants: sheet.groups.sentence_count(),
            groups: sheet.groups.by_size.len(),
        })
        .collect();
    Ok(GenerateResult { out, sheets })
}

pub fn run_versions(args: &VersionsArgs) -> Result<VersionsResult> {
    let language = Language::from_tag(&args.lang);
    check_input(&args.input)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| derived_output(&args.input, "versions", "docx"));

    let ingest_span = info_span!("ingest", input = %args.input.display());
    let sheets = ingest_span
        .in_scope(|| read_version_workbook(&args.input))
        .with_context(|| format!("read version workbook {}", args.input.display()))?;

    let mut versions = extract_versions(&sheets);
    if language == Language::Tibetan && !args.no_formatting {
        apply_tibetan_formatting(&mut versions);
        info!(labels = versions.len(), "applied Tibetan formatting");
    }

    export_versions(&versions, &out).context("write version export")?;

    let labels = versions
        .iter()
        .map(|(label, fragments)| (label.to_string(), fragments.len()))
        .collect();
    Ok(VersionsResult { out, labels })
}

pub fn run_languages() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Chunk separator", "Collation", "Post-formatting"]);
    apply_table_style(&mut table);
    table.add_row(vec!["bo", "(none)", "Tibetan alphabetic", "Tibetan orthography"]);
    table.add_row(vec![
        "<other>",
        "space",
        "lexicographic",
        "punctuation spacing",
    ]);
    println!("{table}");
    Ok(())
}

fn check_input(input: &Path) -> Result<()> {
    if !input.is_file() {
        bail!("input file not found: {}", input.display());
    }
    Ok(())
}

fn derived_output(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_{suffix}.{extension}"))
}
