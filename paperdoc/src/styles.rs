//! Style registry: named text/paragraph presets
//!
//! Every semantic block role maps to one immutable [`StylePreset`]. Presets
//! are fixed at compile time; emitters resolve them through
//! [`StyleRole::preset`] and never set fonts or geometry ad hoc. The values
//! reproduce the IEEE conference layout: Times New Roman throughout, 10 pt
//! body, 9 pt tables and references.

use docx_rs::{AlignmentType, LineSpacing, Paragraph, Run, RunFonts, SpecialIndentType};

/// Font family used for every preset
pub const FONT_FAMILY: &str = "Times New Roman";

/// Twips (twentieths of a point) per inch
pub const TWIPS_PER_INCH: i32 = 1440;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Flush left
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
    /// Justified on both edges
    Justify,
}

impl Alignment {
    /// Convert to the docx-rs alignment type (`w:jc` value)
    pub fn to_docx(self) -> AlignmentType {
        match self {
            Alignment::Left => AlignmentType::Left,
            Alignment::Center => AlignmentType::Center,
            Alignment::Right => AlignmentType::Right,
            Alignment::Justify => AlignmentType::Both,
        }
    }
}

/// An immutable bundle of font and paragraph-geometry attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    /// Font family name
    pub font: &'static str,
    /// Font size in points
    pub size_pt: u32,
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
    /// Paragraph alignment
    pub align: Alignment,
    /// Space before the paragraph in points
    pub space_before_pt: u32,
    /// Space after the paragraph in points
    pub space_after_pt: u32,
    /// Left indent in twips
    pub left_indent: i32,
    /// First-line indent in twips; negative means a hanging indent
    pub first_line_indent: i32,
}

impl StylePreset {
    /// Create a run carrying this preset's character formatting, no text yet
    pub fn styled_run(&self) -> Run {
        let mut run = Run::new()
            .size((self.size_pt * 2) as usize) // docx-rs uses half-points
            .fonts(
                RunFonts::new()
                    .ascii(self.font)
                    .hi_ansi(self.font)
                    .east_asia(self.font),
            );
        if self.bold {
            run = run.bold();
        }
        if self.italic {
            run = run.italic();
        }
        run
    }

    /// Create a styled run containing `text`
    pub fn run(&self, text: &str) -> Run {
        self.styled_run().add_text(text)
    }

    /// Create an empty paragraph with this preset's geometry applied
    pub fn paragraph(&self) -> Paragraph {
        self.paragraph_indented(true)
    }

    /// Create an empty paragraph, optionally suppressing the first-line indent
    ///
    /// Body paragraphs that open a list (e.g. "The main contributions are:")
    /// are emitted without the indent, matching the source layout.
    pub fn paragraph_indented(&self, first_line: bool) -> Paragraph {
        let mut para = Paragraph::new().align(self.align.to_docx());

        if self.space_before_pt > 0 || self.space_after_pt > 0 {
            para = para.line_spacing(
                LineSpacing::new()
                    .before(self.space_before_pt * 20)
                    .after(self.space_after_pt * 20),
            );
        }

        let special = match self.first_line_indent {
            0 => None,
            n if n < 0 => Some(SpecialIndentType::Hanging(-n)),
            n if first_line => Some(SpecialIndentType::FirstLine(n)),
            _ => None,
        };
        if self.left_indent != 0 || special.is_some() {
            para = para.indent(Some(self.left_indent), special, None, None);
        }

        para
    }
}

/// Semantic role of a block, used to look up its preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// Paper title
    Title,
    /// Author name line
    AuthorName,
    /// Author affiliation / email lines
    AuthorDetail,
    /// Abstract and keywords paragraphs
    Abstract,
    /// Numbered section heading (rendered uppercase)
    SectionHeading,
    /// Lettered subsection heading
    SubsectionHeading,
    /// Body paragraph
    Body,
    /// Bullet or numbered list item
    ListItem,
    /// Figure caption
    Caption,
    /// Table caption line
    TableCaption,
    /// Table header cell
    TableHeader,
    /// Table data cell
    TableCell,
    /// Reference list entry
    Reference,
    /// Footer page-number run
    Footer,
}

impl StyleRole {
    /// Resolve this role to its preset
    ///
    /// Pure lookup with no side effects. The role set is a closed enum, so
    /// an unknown role cannot be requested at runtime.
    pub fn preset(self) -> &'static StylePreset {
        match self {
            StyleRole::Title => &TITLE,
            StyleRole::AuthorName => &AUTHOR_NAME,
            StyleRole::AuthorDetail => &AUTHOR_DETAIL,
            StyleRole::Abstract => &ABSTRACT,
            StyleRole::SectionHeading => &SECTION_HEADING,
            StyleRole::SubsectionHeading => &SUBSECTION_HEADING,
            StyleRole::Body => &BODY,
            StyleRole::ListItem => &LIST_ITEM,
            StyleRole::Caption => &CAPTION,
            StyleRole::TableCaption => &TABLE_CAPTION,
            StyleRole::TableHeader => &TABLE_HEADER,
            StyleRole::TableCell => &TABLE_CELL,
            StyleRole::Reference => &REFERENCE,
            StyleRole::Footer => &FOOTER,
        }
    }
}

const TITLE: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 24,
    bold: true,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 12,
    left_indent: 0,
    first_line_indent: 0,
};

const AUTHOR_NAME: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 11,
    bold: false,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 3,
    left_indent: 0,
    first_line_indent: 0,
};

const AUTHOR_DETAIL: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: true,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 3,
    left_indent: 0,
    first_line_indent: 0,
};

const ABSTRACT: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: true,
    align: Alignment::Justify,
    space_before_pt: 0,
    space_after_pt: 6,
    left_indent: 0,
    first_line_indent: 0,
};

const SECTION_HEADING: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: true,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 12,
    space_after_pt: 6,
    left_indent: 0,
    first_line_indent: 0,
};

const SUBSECTION_HEADING: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: true,
    align: Alignment::Left,
    space_before_pt: 6,
    space_after_pt: 3,
    left_indent: 0,
    first_line_indent: 0,
};

const BODY: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: false,
    align: Alignment::Justify,
    space_before_pt: 0,
    space_after_pt: 3,
    left_indent: 0,
    first_line_indent: 360, // 0.25"
};

const LIST_ITEM: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: false,
    align: Alignment::Justify,
    space_before_pt: 0,
    space_after_pt: 2,
    left_indent: 216, // 0.15"
    first_line_indent: 0,
};

const CAPTION: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 6,
    left_indent: 0,
    first_line_indent: 0,
};

const TABLE_CAPTION: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: true,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 6,
    space_after_pt: 3,
    left_indent: 0,
    first_line_indent: 0,
};

const TABLE_HEADER: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 9,
    bold: true,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 0,
    left_indent: 0,
    first_line_indent: 0,
};

const TABLE_CELL: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 9,
    bold: false,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 0,
    left_indent: 0,
    first_line_indent: 0,
};

const REFERENCE: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 9,
    bold: false,
    italic: false,
    align: Alignment::Justify,
    space_before_pt: 0,
    space_after_pt: 2,
    left_indent: 216,
    first_line_indent: -216, // hanging indent for the "[n]" marker
};

const FOOTER: StylePreset = StylePreset {
    font: FONT_FAMILY,
    size_pt: 10,
    bold: false,
    italic: false,
    align: Alignment::Center,
    space_before_pt: 0,
    space_after_pt: 0,
    left_indent: 0,
    first_line_indent: 0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_preset() {
        let preset = StyleRole::Title.preset();
        assert_eq!(preset.font, "Times New Roman");
        assert_eq!(preset.size_pt, 24);
        assert!(preset.bold);
        assert_eq!(preset.align, Alignment::Center);
    }

    #[test]
    fn test_table_presets_are_nine_point() {
        assert_eq!(StyleRole::TableHeader.preset().size_pt, 9);
        assert_eq!(StyleRole::TableCell.preset().size_pt, 9);
        assert!(StyleRole::TableHeader.preset().bold);
        assert!(!StyleRole::TableCell.preset().bold);
    }

    #[test]
    fn test_reference_has_hanging_indent() {
        let preset = StyleRole::Reference.preset();
        assert_eq!(preset.left_indent, 216);
        assert_eq!(preset.first_line_indent, -216);
    }

    #[test]
    fn test_body_first_line_indent_is_quarter_inch() {
        assert_eq!(StyleRole::Body.preset().first_line_indent, 360);
    }

    #[test]
    fn test_justify_maps_to_both() {
        assert!(matches!(Alignment::Justify.to_docx(), AlignmentType::Both));
    }
}
