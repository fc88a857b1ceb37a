use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::{GenerateResult, VersionsResult};

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Output: {}", result.out.display());
    let mut table = Table::new();
    table.set_header(vec!["Sheet", "Variants", "Groups"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in &result.sheets {
        table.add_row(vec![
            Cell::new(&sheet.sheet),
            Cell::new(sheet.variants),
            Cell::new(sheet.groups),
        ]);
    }
    println!("{table}");
}

pub fn print_versions_summary(result: &VersionsResult) {
    println!("Output: {}", result.out.display());
    let mut table = Table::new();
    table.set_header(vec!["Version", "Fragments"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in &result.labels {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
