//! Table builder
//!
//! Builds a bordered grid from a [`TableSpec`]: a caption line, a bold
//! header row and centered data cells, with uniform single-line borders
//! applied through the raw-markup capability in [`crate::ooxml`]. Row shape
//! is validated before anything is appended.

use crate::error::BuildError;
use crate::numbering;
use crate::ooxml;
use crate::paper::TableSpec;
use crate::styles::StyleRole;
use docx_rs::{Docx, Table, TableAlignmentType, TableCell, TableRow};

/// Append a captioned, bordered table to the document
///
/// Validates the spec first; on a row/header mismatch the document is
/// returned to the caller untouched inside the error path (nothing has been
/// appended). `number` is the 1-based document-global table index.
pub fn append_table(docx: Docx, number: u32, spec: &TableSpec) -> Result<Docx, BuildError> {
    spec.validate()?;

    let preset = StyleRole::TableCaption.preset();
    let caption = table_caption_text(number, &spec.caption);
    let docx = docx.add_paragraph(preset.paragraph().add_run(preset.run(&caption)));

    Ok(docx.add_table(build_grid(spec)))
}

/// Caption line for table `number`, e.g. `TABLE II: R2 SCORES`
pub fn table_caption_text(number: u32, caption: &str) -> String {
    format!(
        "TABLE {}: {}",
        numbering::roman(number),
        caption.to_uppercase()
    )
}

/// Build the `1 + rows` × `headers` grid with uniform borders
fn build_grid(spec: &TableSpec) -> Table {
    let mut rows = Vec::with_capacity(1 + spec.rows.len());

    let header_cells = spec
        .headers
        .iter()
        .map(|label| cell(label, StyleRole::TableHeader))
        .collect();
    rows.push(TableRow::new(header_cells));

    for row in &spec.rows {
        let cells = row
            .iter()
            .map(|value| cell(&value.to_string(), StyleRole::TableCell))
            .collect();
        rows.push(TableRow::new(cells));
    }

    Table::new(rows)
        .align(TableAlignmentType::Center)
        .set_borders(ooxml::uniform_single_borders())
}

fn cell(text: &str, role: StyleRole) -> TableCell {
    let preset = role.preset();
    TableCell::new().add_paragraph(preset.paragraph().add_run(preset.run(text)))
}
