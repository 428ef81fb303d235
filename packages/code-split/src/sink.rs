//! Output sinks receiving one stream per definition.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// Destination for split definitions.
///
/// The splitter asks for at most one output at a time and drops it before
/// opening the next.
pub trait OutputSink {
    /// Writable stream for a single definition.
    type Output: Write;

    /// Open (create or truncate) the output named `file_name`.
    fn open(&mut self, file_name: &str) -> io::Result<Self::Output>;

    /// Human-readable location of `file_name`, used in logs and reports.
    fn location(&self, file_name: &str) -> PathBuf {
        PathBuf::from(file_name)
    }
}

/// Sink writing each definition to `<folder>/<file_name>`.
#[derive(Debug, Clone)]
pub struct FolderSink {
    folder: PathBuf,
}

impl FolderSink {
    /// Create a sink for an existing folder.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Create a sink, creating `folder` (recursively) when it does not exist.
    pub fn create(folder: impl Into<PathBuf>) -> Result<Self> {
        let folder = folder.into();
        if !folder.is_dir() {
            tracing::info!("Create output folder {}", folder.display());
            fs::create_dir_all(&folder).map_err(|source| SplitError::CreateFolder {
                path: folder.clone(),
                source,
            })?;
        }
        Ok(Self { folder })
    }

    /// Folder receiving the outputs.
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl OutputSink for FolderSink {
    type Output = BufWriter<File>;

    fn open(&mut self, file_name: &str) -> io::Result<Self::Output> {
        File::create(self.folder.join(file_name)).map(BufWriter::new)
    }

    fn location(&self, file_name: &str) -> PathBuf {
        self.folder.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_makes_nested_folder() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b");

        let sink = FolderSink::create(&target).unwrap();

        assert!(target.is_dir());
        assert_eq!(sink.folder(), target);
    }

    #[test]
    fn test_create_fails_on_file_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "x").unwrap();

        let err = FolderSink::create(&file).unwrap_err();
        assert!(matches!(err, SplitError::CreateFolder { .. }));
    }

    #[test]
    fn test_open_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let mut sink = FolderSink::new(dir.path());
        fs::write(dir.path().join("f.py"), "old content that is longer\n").unwrap();

        {
            let mut out = sink.open("f.py").unwrap();
            out.write_all(b"def f():\n").unwrap();
            out.flush().unwrap();
        }

        assert_eq!(
            fs::read_to_string(dir.path().join("f.py")).unwrap(),
            "def f():\n"
        );
        assert_eq!(sink.location("f.py"), dir.path().join("f.py"));
    }
}
