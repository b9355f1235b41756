//! paperdoc - research paper assembly engine
//!
//! A library for assembling a formatted, multi-section research paper
//! (IEEE conference layout) into a Microsoft Word (.docx) file using the
//! `docx-rs` crate. The caller supplies literal content (a [`paper::Paper`]);
//! the engine turns semantic blocks into correctly styled, correctly ordered
//! output, including the low-level OOXML constructs that the high-level
//! document API does not model (uniform table borders, dynamic page-number
//! fields).

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod doc_config;
pub mod emit;
pub mod error;
pub mod exporter;
pub mod numbering;
pub mod ooxml;
pub mod paper;
pub mod styles;
pub mod table;
