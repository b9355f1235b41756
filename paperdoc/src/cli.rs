//! Command-line interface definitions for paperdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the paperdoc application
#[derive(Parser)]
#[command(name = "paperdoc")]
#[command(version)]
#[command(about = "Assembles research papers into .docx files", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for paperdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Build a paper content file into a .docx document
    Build {
        /// Paper content file (TOML)
        #[arg(value_name = "PAPER")]
        input: PathBuf,

        /// Output .docx path
        #[arg(short, long, default_value = "paper.docx")]
        output: PathBuf,

        /// Page geometry configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Enable verbose output and logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a paper content file without writing output
    Validate {
        /// Paper content file (TOML)
        #[arg(value_name = "PAPER")]
        input: PathBuf,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    /// Whether the selected subcommand asked for verbose output
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Build { verbose, .. } => *verbose,
            Commands::Validate { verbose, .. } => *verbose,
        }
    }
}
