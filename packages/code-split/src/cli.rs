//! Command-line interface for the code splitter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use console::style;

use crate::error::Result;
use crate::split_code;

/// Code Split - split a Python code file into one file per class and function.
#[derive(Parser)]
#[command(name = "code-split")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Python code file to be split
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination folder for the split code (default: current directory)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Set log level to INFO (-vv for DEBUG)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Set log level to DEBUG
    #[arg(long)]
    pub very_verbose: bool,
}

impl Cli {
    /// Log filter directive selected by the verbosity flags.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.very_verbose || self.verbose >= 2 {
            "debug"
        } else if self.verbose == 1 {
            "info"
        } else {
            "warn"
        }
    }
}

/// Run the CLI with already parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    tracing::info!(
        "Split code file '{}' into folder '{}'",
        cli.input.display(),
        cli.folder
            .as_deref()
            .map(|f| f.display().to_string())
            .unwrap_or_default()
    );

    let report = split_code(&cli.input, cli.folder.as_deref())?;

    if !report.outputs.is_empty() {
        println!(
            "{} {} into {} files",
            style("Split").bold(),
            style(cli.input.display()).cyan(),
            style(report.outputs.len()).green()
        );
        for output in &report.outputs {
            println!("  {}", output.path.display());
        }
    }

    tracing::info!(
        read = report.lines_read,
        written = report.lines_written,
        dropped = report.lines_dropped(),
        "Script ends here"
    );
    Ok(())
}
