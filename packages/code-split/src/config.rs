//! Configuration constants, split options and path resolution.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::Result;

/// Keywords that open a top-level definition.
pub const DEFINITION_KEYWORDS: [&str; 2] = ["def", "class"];

/// Sigil that starts a decorator line.
pub const DECORATOR_SIGIL: char = '@';

/// Sigil that starts a comment line.
pub const COMMENT_SIGIL: char = '#';

/// Extension used for output files when the input path has none.
pub const DEFAULT_EXTENSION: &str = "py";

/// Definition keyword at column 0, not followed by another word character.
#[allow(clippy::expect_used)] // Built from static keywords, guaranteed to be valid
pub(crate) static DEFINITION_START_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{})\b", DEFINITION_KEYWORDS.join("|"))).expect("valid regex")
});

/// Definition header: keyword, whitespace, then the identifier.
///
/// Captures: (1) the defined name.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static DEFINITION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+\s+(\w+)").expect("valid regex"));

/// Options for a single split run.
#[derive(Debug, Clone, Default)]
pub struct SplitConfig {
    /// Extension for output files (without the leading dot).
    ///
    /// `None` derives it from the input file name.
    pub extension: Option<String>,
}

impl SplitConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the output file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = Some(extension.trim_start_matches('.').to_string());
        self
    }

    /// Resolve the extension to use for outputs split from `input`.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use code_split::config::SplitConfig;
    ///
    /// let config = SplitConfig::new();
    /// assert_eq!(config.extension_for(Path::new("src/tool.pyw")), "pyw");
    /// assert_eq!(config.extension_for(Path::new("script")), "py");
    /// assert_eq!(config.with_extension(".txt").extension_for(Path::new("a.py")), "txt");
    /// ```
    #[must_use]
    pub fn extension_for(&self, input: &Path) -> String {
        if let Some(ext) = &self.extension {
            return ext.clone();
        }
        input
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_EXTENSION)
            .to_string()
    }
}

/// Resolve `path` against the current working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let resolved = std::env::current_dir()?.join(path);
    tracing::debug!(path = %resolved.display(), "Resolved relative path against CWD");
    Ok(resolved)
}

/// Resolve the output folder; an absent or empty folder means the current directory.
pub fn resolve_folder(folder: Option<&Path>) -> Result<PathBuf> {
    match folder {
        Some(f) if !f.as_os_str().is_empty() => resolve_path(f),
        _ => Ok(std::env::current_dir()?),
    }
}
