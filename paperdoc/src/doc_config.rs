//! Page geometry configuration
//!
//! Optional TOML-backed configuration for the output page. Defaults match
//! the IEEE conference layout (0.75" top, 1" bottom, 0.625" sides).

use crate::error::PaperError;
use crate::styles::TWIPS_PER_INCH;
use docx_rs::PageMargin;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Page geometry for the assembled document
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Top margin in inches
    pub top_margin: f64,
    /// Bottom margin in inches
    pub bottom_margin: f64,
    /// Left margin in inches
    pub left_margin: f64,
    /// Right margin in inches
    pub right_margin: f64,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            top_margin: 0.75,
            bottom_margin: 1.0,
            left_margin: 0.625,
            right_margin: 0.625,
        }
    }
}

impl DocConfig {
    /// Load configuration from a TOML file
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

    /// Page margins in twips for the docx section properties
    pub fn page_margin(&self) -> PageMargin {
        PageMargin::new()
            .top(inches_to_twips(self.top_margin))
            .bottom(inches_to_twips(self.bottom_margin))
            .left(inches_to_twips(self.left_margin))
            .right(inches_to_twips(self.right_margin))
    }
}

fn inches_to_twips(inches: f64) -> i32 {
    (inches * f64::from(TWIPS_PER_INCH)) as i32
}
