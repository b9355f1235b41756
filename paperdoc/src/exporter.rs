//! Document driver
//!
//! Orchestrates emission order and serializes the result: title, author
//! block, abstract+keywords, the numbered sections with their blocks in
//! caller order, the acknowledgment, the reference list and finally the
//! footer page-number field. Construction is a single forward pass over one
//! document handle; nothing is edited or reordered after append.

use crate::doc_config::DocConfig;
use crate::emit;
use crate::error::BuildError;
use crate::numbering;
use crate::paper::{Block, Paper};
use crate::table;
use docx_rs::{Docx, Footer, Paragraph, RunFonts};
use std::fs;
use std::path::Path;

/// Assemble and serialize a paper to a .docx file
///
/// Serialization is one blocking write at the end of the pass; any IO or
/// packing failure is fatal and no partial output is considered valid.
pub fn to_docx(paper: &Paper, config: &DocConfig, output_path: &Path) -> Result<(), BuildError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let docx = assemble(paper, config)?;

    log::info!("writing DOCX to: {}", output_path.display());
    let file = fs::File::create(output_path)?;
    docx.build()
        .pack(file)
        .map_err(|e| BuildError::Docx(e.to_string()))?;

    log::info!(
        "wrote {} sections, {} figures, {} tables",
        paper.sections.len(),
        paper.figure_count(),
        paper.table_count()
    );
    Ok(())
}

/// Assemble the in-memory document without serializing it
///
/// Split out from [`to_docx`] so the block order and content can be
/// inspected in tests.
pub fn assemble(paper: &Paper, config: &DocConfig) -> Result<Docx, BuildError> {
    let mut docx = Docx::new()
        .page_margin(config.page_margin())
        .default_fonts(RunFonts::new().ascii(crate::styles::FONT_FAMILY));

    docx = emit::title(docx, &paper.title);
    for author in &paper.authors {
        docx = emit::author_block(docx, author);
    }
    docx = emit::abstract_and_keywords(docx, &paper.abstract_text, &paper.keywords);

    // Figure and table numbering is document-global; subsection letters
    // restart per section.
    let mut figure_no = 0u32;
    let mut table_no = 0u32;

    for (section_idx, section) in paper.sections.iter().enumerate() {
        let heading = format!(
            "{}. {}",
            numbering::roman(section_idx as u32 + 1),
            section.title
        );
        docx = emit::section_heading(docx, &heading);

        let mut subsection_no = 0u32;
        for block in &section.blocks {
            docx = match block {
                Block::Subheading { text } => {
                    subsection_no += 1;
                    let lettered = format!("{}. {}", numbering::letter(subsection_no), text);
                    emit::subsection_heading(docx, &lettered)
                }
                Block::Paragraph { text, indent } => emit::paragraph(docx, text, *indent),
                Block::Bullet { text } => emit::bullet_item(docx, text),
                Block::Numbered { number, text } => emit::numbered_item(docx, *number, text),
                Block::Figure(spec) => {
                    figure_no += 1;
                    emit::figure(docx, figure_no, spec)
                }
                Block::Table(spec) => {
                    table_no += 1;
                    let docx = table::append_table(docx, table_no, spec)?;
                    emit::spacer(docx)
                }
            };
        }
    }

    if let Some(text) = &paper.acknowledgment {
        docx = emit::section_heading(docx, "Acknowledgment");
        docx = emit::paragraph(docx, text, true);
    }

    if !paper.references.is_empty() {
        docx = emit::section_heading(docx, "References");
        for entry in &paper.references {
            docx = emit::reference(docx, entry);
        }
    }

    let footer_para = Paragraph::new()
        .align(docx_rs::AlignmentType::Center)
        .add_run(crate::ooxml::page_number_run());
    docx = docx.footer(Footer::new().add_paragraph(footer_para));

    Ok(docx)
}
