//! Low-level OOXML constructs
//!
//! Two features of the output format have no paragraph-level API: uniform
//! table borders and the dynamic page-number field. Both are built here from
//! their raw WordprocessingML parts so no other module touches format
//! internals. Everything else in the crate goes through the high-level
//! docx-rs object model.

use crate::styles::StyleRole;
use docx_rs::{
    BorderType, FieldCharType, InstrText, Run, TableBorder, TableBorderPosition, TableBorders,
};

/// Border line width in eighths of a point (`w:sz="4"` = 0.5 pt)
const BORDER_SIZE: usize = 4;

/// Border color
const BORDER_COLOR: &str = "000000";

/// Uniform single-line borders for all six table edges
///
/// Covers the outer top/left/bottom/right edges plus the inner horizontal
/// and vertical separators, mirroring the `w:tblBorders` element.
pub fn uniform_single_borders() -> TableBorders {
    let positions = [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
        TableBorderPosition::InsideH,
        TableBorderPosition::InsideV,
    ];

    let mut borders = TableBorders::new();
    for position in positions {
        borders = borders.set(
            TableBorder::new(position)
                .border_type(BorderType::Single)
                .size(BORDER_SIZE)
                .color(BORDER_COLOR),
        );
    }
    borders
}

/// A run holding the dynamic current-page-number field
///
/// The field is the three-token sequence the format requires, in this exact
/// order inside a single run: a begin field marker, the instruction text
/// `PAGE`, and an end field marker. The renderer resolves the value at
/// display/print time; nothing is computed here.
pub fn page_number_run() -> Run {
    StyleRole::Footer
        .preset()
        .styled_run()
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::Unsupported("PAGE".to_string()))
        .add_field_char(FieldCharType::End, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::RunChild;

    #[test]
    fn test_page_field_token_order() {
        let run = page_number_run();
        assert_eq!(run.children.len(), 3);
        assert!(matches!(run.children[0], RunChild::FieldChar(_)));
        assert!(matches!(run.children[1], RunChild::InstrText(_)));
        assert!(matches!(run.children[2], RunChild::FieldChar(_)));
    }

    #[test]
    fn test_all_six_borders_are_set() {
        use docx_rs::BuildXML;

        let xml = String::from_utf8(uniform_single_borders().build()).unwrap();
        for edge in [
            "<w:top", "<w:left", "<w:bottom", "<w:right", "<w:insideH", "<w:insideV",
        ] {
            assert!(xml.contains(edge), "missing {} in {}", edge, xml);
        }
        assert!(xml.contains("single"), "expected single-line borders: {}", xml);
    }
}
