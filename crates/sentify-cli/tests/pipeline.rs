use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use sentify_cli::cli::{GenerateArgs, VersionsArgs};
use sentify_cli::commands::{run_generate, run_versions};

fn write_template_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("templates.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name("greeting").expect("name");
    sheet.write_string(0, 0, "1").expect("meta");
    sheet.write_string(1, 0, "x").expect("cell");
    sheet.write_string(1, 2, "z").expect("cell");
    sheet.write_string(2, 0, "y").expect("cell");
    sheet.write_string(2, 2, "z").expect("cell");
    workbook.save(&path).expect("save fixture");
    path
}

fn generate_args(input: PathBuf, out: Option<PathBuf>, format: &str) -> GenerateArgs {
    GenerateArgs {
        input,
        out,
        lang: "en".to_string(),
        format: format.to_string(),
    }
}

#[test]
fn generate_writes_workbook_and_summarizes() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_template_fixture(dir.path());
    let out = dir.path().join("result.xlsx");
    let result = run_generate(&generate_args(input, Some(out.clone()), "xlsx")).expect("generate");

    assert_eq!(result.out, out);
    assert!(out.exists());
    assert_eq!(result.sheets.len(), 1);
    let summary = &result.sheets[0];
    assert_eq!(summary.sheet, "greeting");
    // 2 x 2 variants, minus the original held out of the groups.
    assert_eq!(summary.variants, 3);
    assert_eq!(summary.groups, 2);
}

#[test]
fn generate_derives_output_path() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_template_fixture(dir.path());
    let result = run_generate(&generate_args(input, None, "docx")).expect("generate");
    assert_eq!(result.out, dir.path().join("templates_sentences.docx"));
    assert!(result.out.exists());
}

#[test]
fn unsupported_format_fails_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_template_fixture(dir.path());
    let out = dir.path().join("result.pdf");
    let error = run_generate(&generate_args(input, Some(out.clone()), "pdf"))
        .expect_err("pdf is not supported");
    let message = format!("{error:#}");
    assert!(message.contains("pdf"));
    assert!(message.contains("xlsx"));
    assert!(!out.exists());
}

#[test]
fn missing_input_is_fatal() {
    let args = generate_args(PathBuf::from("/nonexistent/templates.xlsx"), None, "xlsx");
    let error = run_generate(&args).expect_err("missing input");
    assert!(format!("{error:#}").contains("templates.xlsx"));
}

#[test]
fn versions_pipeline_groups_by_label() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("versions.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name("v").expect("name");
    sheet.write_string(0, 0, "version").expect("header");
    sheet.write_string(1, 0, "A B").expect("cell");
    sheet.write_string(1, 3, "ང་_འགྲོ").expect("cell");
    sheet.write_string(2, 0, "B").expect("cell");
    sheet.write_string(2, 3, "ཡིན་").expect("cell");
    workbook.save(&input).expect("save fixture");

    let out = dir.path().join("versions.docx");
    let result = run_versions(&VersionsArgs {
        input,
        out: Some(out.clone()),
        lang: "bo".to_string(),
        no_formatting: false,
    })
    .expect("versions");

    assert!(out.exists());
    // A row tagged "A B" contributes to both labels, in first-seen order.
    assert_eq!(
        result.labels,
        vec![("A".to_string(), 1), ("B".to_string(), 2)]
    );
}
