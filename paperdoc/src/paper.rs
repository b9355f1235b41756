//! Paper content model
//!
//! The structured representation of a paper's literal content: title block,
//! abstract, sections with their ordered blocks, and references. Content is
//! data, not behavior; the engine never interprets or rewrites it. Papers
//! can be built in code or deserialized from a TOML file.

use crate::error::{BuildError, PaperError};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A complete paper: title block plus ordered sections and references
#[derive(Debug, Clone, Deserialize)]
pub struct Paper {
    /// Paper title
    pub title: String,

    /// Authors, each rendered as three centered lines
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Abstract body text (without the "Abstract—" label)
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Comma-separated keywords (without the "Keywords: " label)
    pub keywords: String,

    /// Numbered sections in reading order
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Optional acknowledgment paragraph
    #[serde(default)]
    pub acknowledgment: Option<String>,

    /// Reference entries, in citation-index order
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

impl Paper {
    /// Load a paper from a TOML content file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PaperError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PaperError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PaperError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Number of figures across all sections
    pub fn figure_count(&self) -> usize {
        self.blocks().filter(|b| matches!(b, Block::Figure(_))).count()
    }

    /// Number of tables across all sections
    pub fn table_count(&self) -> usize {
        self.blocks().filter(|b| matches!(b, Block::Table(_))).count()
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.sections.iter().flat_map(|s| &s.blocks)
    }
}

/// Author identity rendered below the title
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    /// Full name
    pub name: String,
    /// Institutional affiliation
    pub affiliation: String,
    /// Contact email
    pub email: String,
}

/// A numbered section: heading plus ordered content blocks
///
/// A section with no blocks is valid and renders as a bare heading.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Section title, without its Roman numeral (added at emission)
    pub title: String,

    /// Content blocks in reading order; append order is document order
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One semantic unit of section content
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Lettered subsection heading, without its letter (added at emission)
    Subheading {
        /// Heading text
        text: String,
    },

    /// Body paragraph
    Paragraph {
        /// Paragraph text
        text: String,
        /// First-line indent; disabled for paragraphs that introduce a list
        #[serde(default = "default_indent")]
        indent: bool,
    },

    /// Bullet list item, rendered with a literal "• " prefix
    Bullet {
        /// Item text
        text: String,
    },

    /// Numbered list item, rendered with a literal "N) " prefix
    ///
    /// The caller supplies the number; there is no automatic renumbering.
    Numbered {
        /// Item number as it should appear
        number: u32,
        /// Item text
        text: String,
    },

    /// Figure with caption
    Figure(FigureSpec),

    /// Bordered table with caption
    Table(TableSpec),
}

fn default_indent() -> bool {
    true
}

/// A figure: image resource plus caption
#[derive(Debug, Clone, Deserialize)]
pub struct FigureSpec {
    /// Path to the image file
    pub path: PathBuf,

    /// Caption text (without the "Fig. n." prefix)
    pub caption: String,

    /// Display width in inches
    #[serde(default = "default_figure_width")]
    pub width: f64,
}

fn default_figure_width() -> f64 {
    6.0
}

/// A table: caption, header labels and data rows
#[derive(Debug, Clone, Deserialize)]
pub struct TableSpec {
    /// Caption text (without the "TABLE n:" prefix, uppercased at emission)
    pub caption: String,

    /// Ordered header labels; their count fixes the column count
    pub headers: Vec<String>,

    /// Ordered data rows; every row must match the header count
    pub rows: Vec<Vec<CellValue>>,
}

impl TableSpec {
    /// Check that every row has exactly as many cells as the header
    ///
    /// Runs before any document mutation so a malformed table never
    /// reaches the output.
    pub fn validate(&self) -> Result<(), BuildError> {
        let expected = self.headers.len();
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(BuildError::RowShape {
                    caption: self.caption.clone(),
                    row: idx + 1,
                    expected,
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }
}

/// A cell value from the closed set of acceptable types
///
/// Coercion to display text happens in exactly one place, the [`fmt::Display`]
/// impl, so the styling layer can never mutate content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer value
    Int(i64),
    /// Decimal value
    Float(f64),
    /// Literal text
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

/// One entry of the reference list
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceEntry {
    /// 1-based citation index, matching "[n]" markers in the prose
    pub index: u32,

    /// Literal citation text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<CellValue>>) -> TableSpec {
        TableSpec {
            caption: "Model Performance".to_string(),
            headers: vec!["Model".to_string(), "RMSE".to_string()],
            rows,
        }
    }

    #[test]
    fn test_cell_value_coercion() {
        assert_eq!(CellValue::from("XGBoost").to_string(), "XGBoost");
        assert_eq!(CellValue::from(42i64).to_string(), "42");
        assert_eq!(CellValue::from(6.827).to_string(), "6.827");
        assert_eq!(CellValue::from(-3i64).to_string(), "-3");
    }

    #[test]
    fn test_valid_table_passes_validation() {
        let spec = table(vec![
            vec!["XGBoost".into(), 6.827.into()],
            vec!["LightGBM".into(), 7.015.into()],
        ]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_mismatched_row_is_rejected_with_positions() {
        let spec = table(vec![
            vec!["XGBoost".into(), 6.827.into()],
            vec!["LightGBM".into()],
        ]);
        match spec.validate() {
            Err(BuildError::RowShape {
                row,
                expected,
                actual,
                ..
            }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected RowShape error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert!(table(vec![]).validate().is_ok());
    }

    #[test]
    fn test_paper_from_toml_preserves_literal_text() {
        let toml_src = r#"
title = "Test Paper"
abstract = "An abstract."
keywords = "one, two"

[[authors]]
name = "A. Author"
affiliation = "Example University"
email = "a@example.com"

[[sections]]
title = "Introduction"

  [[sections.blocks]]
  type = "paragraph"
  text = "Test body."

  [[sections.blocks]]
  type = "table"
  caption = "Results"
  headers = ["A", "B"]
  rows = [["1", "2"]]

  [[sections.blocks]]
  type = "figure"
  path = "missing.png"
  caption = "Sample"

[[references]]
index = 1
text = "T. Chen, \"XGBoost\", 2016."
"#;
        let paper: Paper = toml::from_str(toml_src).unwrap();
        assert_eq!(paper.title, "Test Paper");
        assert_eq!(paper.authors[0].name, "A. Author");
        assert_eq!(paper.sections.len(), 1);
        assert_eq!(paper.figure_count(), 1);
        assert_eq!(paper.table_count(), 1);

        let section = &paper.sections[0];
        assert_eq!(section.blocks.len(), 3);
        match &section.blocks[0] {
            Block::Paragraph { text, indent } => {
                assert_eq!(text, "Test body.");
                assert!(indent);
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
        match &section.blocks[1] {
            Block::Table(spec) => {
                assert_eq!(spec.headers, vec!["A", "B"]);
                assert_eq!(spec.rows[0][0], CellValue::Text("1".to_string()));
            }
            other => panic!("expected table, got {:?}", other),
        }
        match &section.blocks[2] {
            Block::Figure(spec) => {
                assert_eq!(spec.caption, "Sample");
                assert_eq!(spec.width, 6.0);
            }
            other => panic!("expected figure, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_toml_cells_stay_numeric() {
        let toml_src = r#"
caption = "R2 Scores"
headers = ["Model", "Rank", "R2"]
rows = [["XGBoost", 1, 0.8094]]
"#;
        let spec: TableSpec = toml::from_str(toml_src).unwrap();
        assert_eq!(spec.rows[0][1], CellValue::Int(1));
        assert_eq!(spec.rows[0][2], CellValue::Float(0.8094));
        assert_eq!(spec.rows[0][2].to_string(), "0.8094");
    }
}
