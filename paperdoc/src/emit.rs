//! Block emitters
//!
//! One function per semantic block type. Each resolves its style preset,
//! builds one or more styled runs grouped into a paragraph, and appends the
//! result to the document. The `Docx` handle is threaded by value through
//! every call; there is no shared document state anywhere else.
//!
//! List prefixes ("• ", "N) ") are literal characters, not semantic list
//! markers, so the caller supplies correct numbers and order.

use crate::paper::{Author, FigureSpec, ReferenceEntry};
use crate::styles::StyleRole;
use docx_rs::{Docx, LineSpacing, Pic, Run};

/// EMUs (English Metric Units) per inch - Word uses this for measurements
const EMUS_PER_INCH: u32 = 914400;

/// Append the paper title
pub fn title(docx: Docx, text: &str) -> Docx {
    let preset = StyleRole::Title.preset();
    docx.add_paragraph(preset.paragraph().add_run(preset.run(text)))
}

/// Append one author block: name, affiliation and email lines
pub fn author_block(docx: Docx, author: &Author) -> Docx {
    let name = StyleRole::AuthorName.preset();
    let detail = StyleRole::AuthorDetail.preset();

    let docx = docx.add_paragraph(name.paragraph().add_run(name.run(&author.name)));
    let docx = docx.add_paragraph(detail.paragraph().add_run(detail.run(&author.affiliation)));

    // The email line closes the author block with wider spacing below.
    let email = detail
        .paragraph()
        .line_spacing(LineSpacing::new().after(240))
        .add_run(detail.run(&author.email));
    docx.add_paragraph(email)
}

/// Append the abstract and keywords paragraphs
///
/// The abstract paragraph is three runs: a bold-italic "Abstract" label, an
/// italic em-dash, and the italic body. Keywords follow in a second
/// paragraph with a bold-italic "Keywords: " label.
pub fn abstract_and_keywords(docx: Docx, abstract_text: &str, keywords: &str) -> Docx {
    let preset = StyleRole::Abstract.preset();

    let abstract_para = preset
        .paragraph()
        .add_run(preset.run("Abstract").bold())
        .add_run(preset.run("\u{2014}"))
        .add_run(preset.run(abstract_text));
    let docx = docx.add_paragraph(abstract_para);

    let keywords_para = preset
        .paragraph()
        .line_spacing(LineSpacing::new().after(240))
        .add_run(preset.run("Keywords: ").bold())
        .add_run(preset.run(keywords));
    docx.add_paragraph(keywords_para)
}

/// Append a section heading, uppercased
pub fn section_heading(docx: Docx, text: &str) -> Docx {
    let preset = StyleRole::SectionHeading.preset();
    docx.add_paragraph(preset.paragraph().add_run(preset.run(&text.to_uppercase())))
}

/// Append a lettered subsection heading
pub fn subsection_heading(docx: Docx, text: &str) -> Docx {
    let preset = StyleRole::SubsectionHeading.preset();
    docx.add_paragraph(preset.paragraph().add_run(preset.run(text)))
}

/// Append a body paragraph
///
/// `indent` disables the first-line indent for paragraphs that introduce a
/// list.
pub fn paragraph(docx: Docx, text: &str, indent: bool) -> Docx {
    let preset = StyleRole::Body.preset();
    docx.add_paragraph(preset.paragraph_indented(indent).add_run(preset.run(text)))
}

/// Append a bullet list item with a literal "• " prefix
pub fn bullet_item(docx: Docx, text: &str) -> Docx {
    let preset = StyleRole::ListItem.preset();
    let rendered = format!("\u{2022} {}", text);
    docx.add_paragraph(preset.paragraph().add_run(preset.run(&rendered)))
}

/// Append a numbered list item with a literal "N) " prefix
pub fn numbered_item(docx: Docx, number: u32, text: &str) -> Docx {
    let preset = StyleRole::ListItem.preset();
    let rendered = format!("{}) {}", number, text);
    docx.add_paragraph(preset.paragraph().add_run(preset.run(&rendered)))
}

/// Append a figure: embedded image followed by its caption
///
/// The image file is read within this call and released on return. A
/// missing, unreadable or undecodable file is not an error: the figure
/// degrades to its caption paragraph alone, with a warning in the log.
pub fn figure(docx: Docx, number: u32, spec: &FigureSpec) -> Docx {
    // Embedding requires a decodable image; the docx engine rejects
    // anything it cannot decode, so the dimension probe doubles as the
    // decodability gate.
    let loaded = std::fs::read(&spec.path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| match imagesize::blob_size(&bytes) {
            Ok(size) if size.width > 0 && size.height > 0 => Ok((bytes, size)),
            Ok(_) => Err("image has zero dimensions".to_string()),
            Err(e) => Err(e.to_string()),
        });

    let docx = match loaded {
        Ok((bytes, size)) => {
            let (width_emu, height_emu) = image_extent(size, spec.width);
            let pic = Pic::new(&bytes).size(width_emu, height_emu);
            let preset = StyleRole::Caption.preset();
            let image_para = preset
                .paragraph()
                .line_spacing(LineSpacing::new().before(120).after(60))
                .add_run(Run::new().add_image(pic));
            docx.add_paragraph(image_para)
        }
        Err(reason) => {
            log::warn!(
                "figure {}: cannot embed image {}: {} (emitting caption only)",
                number,
                spec.path.display(),
                reason
            );
            docx
        }
    };

    let preset = StyleRole::Caption.preset();
    let caption = figure_caption_text(number, &spec.caption);
    docx.add_paragraph(preset.paragraph().add_run(preset.run(&caption)))
}

/// Append one reference entry with its "[n]" marker
pub fn reference(docx: Docx, entry: &ReferenceEntry) -> Docx {
    let preset = StyleRole::Reference.preset();
    let rendered = format!("[{}] {}", entry.index, entry.text);
    docx.add_paragraph(preset.paragraph().add_run(preset.run(&rendered)))
}

/// Append an empty spacer paragraph (used after tables)
pub fn spacer(docx: Docx) -> Docx {
    docx.add_paragraph(docx_rs::Paragraph::new())
}

/// Caption text for figure `number`
pub fn figure_caption_text(number: u32, caption: &str) -> String {
    format!("Fig. {}. {}", number, caption)
}

/// Image extent in EMUs at the requested display width
///
/// The height preserves the image's pixel aspect ratio.
fn image_extent(size: imagesize::ImageSize, width_in: f64) -> (u32, u32) {
    let aspect = size.height as f64 / size.width as f64;
    let width_emu = (width_in * f64::from(EMUS_PER_INCH)) as u32;
    let height_emu = (width_in * aspect * f64::from(EMUS_PER_INCH)) as u32;
    (width_emu, height_emu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};
    use std::path::PathBuf;

    /// Collect the plain text of a paragraph's runs
    fn para_text(para: &docx_rs::Paragraph) -> String {
        let mut out = String::new();
        for child in &para.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        out.push_str(&t.text);
                    }
                }
            }
        }
        out
    }

    fn texts(docx: &Docx) -> Vec<String> {
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(para_text(p)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_missing_figure_degrades_to_caption_only() {
        let spec = FigureSpec {
            path: PathBuf::from("does/not/exist.png"),
            caption: "Sample".to_string(),
            width: 6.0,
        };
        let docx = figure(Docx::new(), 1, &spec);
        let texts = texts(&docx);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0], "Fig. 1. Sample");
    }

    #[test]
    fn test_undecodable_image_degrades_to_caption_only() {
        let path = std::env::temp_dir().join(format!(
            "paperdoc-not-an-image-{}.png",
            std::process::id()
        ));
        std::fs::write(&path, b"this is not an image").unwrap();

        let spec = FigureSpec {
            path: path.clone(),
            caption: "Sample".to_string(),
            width: 6.0,
        };
        let docx = figure(Docx::new(), 1, &spec);
        let _ = std::fs::remove_file(&path);

        let texts = texts(&docx);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0], "Fig. 1. Sample");
    }

    #[test]
    fn test_image_extent_preserves_aspect_ratio() {
        let size = imagesize::ImageSize {
            width: 200,
            height: 100,
        };
        let (w, h) = image_extent(size, 2.0);
        assert_eq!(w, 2 * EMUS_PER_INCH);
        assert_eq!(h, EMUS_PER_INCH);
    }

    #[test]
    fn test_figure_caption_format() {
        assert_eq!(figure_caption_text(3, "Model evaluation."), "Fig. 3. Model evaluation.");
    }

    #[test]
    fn test_list_prefixes_are_literal() {
        let docx = bullet_item(Docx::new(), "first point");
        assert_eq!(texts(&docx)[0], "\u{2022} first point");

        let docx = numbered_item(Docx::new(), 4, "fourth point");
        assert_eq!(texts(&docx)[0], "4) fourth point");
    }

    #[test]
    fn test_section_heading_is_uppercased() {
        let docx = section_heading(Docx::new(), "I. Introduction");
        assert_eq!(texts(&docx)[0], "I. INTRODUCTION");
    }

    #[test]
    fn test_abstract_emits_two_paragraphs_with_labels() {
        let docx = abstract_and_keywords(Docx::new(), "Body text.", "stlf, ml");
        let texts = texts(&docx);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], "Abstract\u{2014}Body text.");
        assert_eq!(texts[1], "Keywords: stlf, ml");
    }

    #[test]
    fn test_author_block_is_three_paragraphs() {
        let author = Author {
            name: "A. Author".to_string(),
            affiliation: "Example University".to_string(),
            email: "a@example.com".to_string(),
        };
        let docx = author_block(Docx::new(), &author);
        let texts = texts(&docx);
        assert_eq!(
            texts,
            vec!["A. Author", "Example University", "a@example.com"]
        );
    }

    #[test]
    fn test_emission_is_order_preserving() {
        let mut docx = Docx::new();
        docx = paragraph(docx, "one", true);
        docx = bullet_item(docx, "two");
        docx = numbered_item(docx, 3, "three");
        docx = paragraph(docx, "four", false);
        assert_eq!(texts(&docx), vec!["one", "\u{2022} two", "3) three", "four"]);
    }

    #[test]
    fn test_reference_renders_marker_and_text() {
        let entry = ReferenceEntry {
            index: 7,
            text: "H. M. Al-Hamadi, 2004.".to_string(),
        };
        let docx = reference(Docx::new(), &entry);
        assert_eq!(texts(&docx)[0], "[7] H. M. Al-Hamadi, 2004.");
    }
}
