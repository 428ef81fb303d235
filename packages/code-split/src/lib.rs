//! Code Split - split a Python source file into one file per definition.
//!
//! Every top-level `def` or `class` becomes `<name>.py` in the output
//! folder, together with its decorators, an immediately preceding comment
//! block and the blank lines inside its body. Module-level code is dropped.
//!
//! # Example
//!
//! ```
//! use code_split::classify::{classify, definition_name, LineKind};
//!
//! assert_eq!(classify("@dataclass\n"), LineKind::Decorator);
//! assert_eq!(definition_name("class MyData:\n"), Some("MyData"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, split options and path resolution
//! - [`classify`]: Prefix-based line classification
//! - [`sink`]: Output destinations
//! - [`splitter`]: The line routing state machine
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod sink;
pub mod splitter;

use std::path::Path;

// Re-export commonly used items
pub use config::SplitConfig;
pub use error::{Result, SplitError};
pub use sink::{FolderSink, OutputSink};
pub use splitter::{SplitOutput, SplitReport, Splitter};

/// Split `input` into one file per definition inside `folder`.
///
/// Relative paths resolve against the current working directory; a missing
/// or empty `folder` means the current working directory, and it is created
/// when absent. An input file that cannot be opened is logged at error level
/// and yields an empty report instead of an error.
pub fn split_code(input: &Path, folder: Option<&Path>) -> Result<SplitReport> {
    split_code_with(input, folder, SplitConfig::default())
}

/// [`split_code`] with explicit options.
pub fn split_code_with(
    input: &Path,
    folder: Option<&Path>,
    config: SplitConfig,
) -> Result<SplitReport> {
    let input = config::resolve_path(input)?;
    let folder = config::resolve_folder(folder)?;
    let mut sink = FolderSink::create(folder)?;

    match Splitter::new(config).split_file(&input, &mut sink) {
        Err(e) if e.is_input_unavailable() => {
            tracing::error!("{e}");
            Ok(SplitReport::default())
        }
        result => result,
    }
}
