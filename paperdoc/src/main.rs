//! paperdoc - research paper assembly tool
//!
//! A CLI tool for building formatted research papers (IEEE conference
//! layout) from TOML content files into Microsoft Word documents.

#![deny(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use paperdoc::doc_config::DocConfig;
use paperdoc::paper::{Block, Paper};

/// Main entry point for the paperdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Every subcommand shares the verbose flag; the library logs through
    // `log`, so the logger must be live before any subcommand runs.
    if cli.command.verbose() {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    match cli.command {
        Commands::Build {
            input,
            output,
            config,
            verbose,
        } => handle_build_command(input, output, config, verbose),
        Commands::Validate { input, verbose } => handle_validate_command(input, verbose),
    }
}

/// Handle the build command
fn handle_build_command(
    input: std::path::PathBuf,
    output: std::path::PathBuf,
    config_path: Option<std::path::PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("Building paper...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    let paper = Paper::load(&input)
        .with_context(|| format!("Failed to load paper from {}", input.display()))?;

    let config = match config_path {
        Some(path) => DocConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DocConfig::default(),
    };

    if verbose {
        println!("  - {} sections", paper.sections.len());
        println!("  - {} figures", paper.figure_count());
        println!("  - {} tables", paper.table_count());
        println!("  - {} references", paper.references.len());
    }

    paperdoc::exporter::to_docx(&paper, &config, &output)
        .with_context(|| format!("Failed to write DOCX to {}", output.display()))?;

    println!("✓ Successfully wrote: {}", output.display());
    Ok(())
}

/// Handle the validate command
///
/// Table shape mismatches are errors; missing figure resources only warn,
/// since the build degrades those to caption-only figures.
fn handle_validate_command(input: std::path::PathBuf, verbose: bool) -> Result<()> {
    println!("Validating paper content...");
    println!("Input: {}", input.display());

    let paper = Paper::load(&input)
        .with_context(|| format!("Failed to load paper from {}", input.display()))?;

    let mut errors = 0usize;
    let mut warnings = 0usize;

    for section in &paper.sections {
        for block in &section.blocks {
            match block {
                Block::Table(spec) => {
                    if let Err(e) = spec.validate() {
                        eprintln!("error: section '{}': {}", section.title, e);
                        errors += 1;
                    } else if verbose {
                        println!(
                            "  table '{}': {} columns, {} rows",
                            spec.caption,
                            spec.headers.len(),
                            spec.rows.len()
                        );
                    }
                }
                Block::Figure(spec) => {
                    if spec.path.exists() {
                        if verbose {
                            println!("  figure '{}': {}", spec.caption, spec.path.display());
                        }
                    } else {
                        println!(
                            "warning: section '{}': missing image {} (figure will be caption-only)",
                            section.title,
                            spec.path.display()
                        );
                        warnings += 1;
                    }
                }
                _ => {}
            }
        }
    }

    println!(
        "\n{} error(s), {} warning(s) in {} section(s)",
        errors,
        warnings,
        paper.sections.len()
    );

    if errors > 0 {
        anyhow::bail!("validation failed with {} error(s)", errors);
    }
    println!("✓ Paper content is valid");
    Ok(())
}
