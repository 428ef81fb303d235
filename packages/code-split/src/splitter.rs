//! Line-by-line splitter routing each line to at most one definition output.
//!
//! Lines whose destination is not known yet are held in three pending
//! buffers:
//!
//! - decorators, written as the prefix of the next definition;
//! - a comment block, written before those decorators unless a blank line
//!   intervened;
//! - a run of blank lines, written only when another body line of the open
//!   definition follows.
//!
//! Everything else outside a definition (module docstrings, imports,
//! executable statements) is dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::classify::{classify, definition_name, LineKind};
use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::sink::OutputSink;

/// One output created during a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    /// Defined identifier (`MyData`, `my_function`, ...).
    pub name: String,

    /// Location reported by the sink.
    pub path: PathBuf,

    /// Lines written to this output.
    pub lines: usize,
}

/// Summary of a split run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Outputs in creation order; a redefined name appears once per creation.
    pub outputs: Vec<SplitOutput>,

    /// Lines read from the input.
    pub lines_read: usize,

    /// Lines written to any output.
    pub lines_written: usize,
}

impl SplitReport {
    /// Lines written nowhere (module code, detached comments, separating blanks).
    #[must_use]
    pub fn lines_dropped(&self) -> usize {
        self.lines_read - self.lines_written
    }
}

/// Splits one source file into one output per top-level definition.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a new splitter.
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Split `input` into outputs opened on `sink`.
    ///
    /// The input must be a resolved path; see [`crate::config::resolve_path`].
    pub fn split_file<S: OutputSink>(&self, input: &Path, sink: &mut S) -> Result<SplitReport> {
        let file = File::open(input).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SplitError::InputNotFound {
                path: input.to_path_buf(),
            },
            _ => SplitError::OpenInput {
                path: input.to_path_buf(),
                source,
            },
        })?;

        let extension = self.config.extension_for(input);
        self.split_reader(BufReader::new(file), &extension, sink)
    }

    /// Split lines from `reader`, naming outputs `<identifier>.<extension>`.
    ///
    /// Any open output is dropped (and its handle released) when an error
    /// aborts the run.
    pub fn split_reader<R: BufRead, S: OutputSink>(
        &self,
        mut reader: R,
        extension: &str,
        sink: &mut S,
    ) -> Result<SplitReport> {
        let mut state = SplitState::new(extension, sink);
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            state.feed(std::mem::take(&mut line))?;
        }

        state.finish()
    }
}

/// The currently open definition output.
struct ActiveOutput<W: Write> {
    file_name: String,
    writer: W,
    index: usize,
}

/// Per-run state; nothing here outlives one call to [`Splitter::split_reader`].
struct SplitState<'a, S: OutputSink> {
    sink: &'a mut S,
    extension: &'a str,
    pending_decorators: Vec<String>,
    pending_comment: Vec<String>,
    pending_blanks: Vec<String>,
    active: Option<ActiveOutput<S::Output>>,
    report: SplitReport,
}

impl<'a, S: OutputSink> SplitState<'a, S> {
    fn new(extension: &'a str, sink: &'a mut S) -> Self {
        Self {
            sink,
            extension,
            pending_decorators: Vec::new(),
            pending_comment: Vec::new(),
            pending_blanks: Vec::new(),
            active: None,
            report: SplitReport::default(),
        }
    }

    /// Route one raw line.
    fn feed(&mut self, line: String) -> Result<()> {
        self.report.lines_read += 1;
        let kind = classify(&line);

        match kind {
            LineKind::Decorator => {
                tracing::debug!("@ {}", line.trim());
                self.pending_decorators.push(line);
                return Ok(());
            }
            LineKind::Definition => {
                let Some(name) = definition_name(&line) else {
                    return Err(SplitError::MalformedDefinition {
                        line_number: self.report.lines_read,
                        line: line.trim_end().to_string(),
                    });
                };
                let name = name.to_string();
                self.open(name)?;
            }
            // Class or function ended: either comments or main code follow
            kind if kind.ends_definition() && self.active.is_some() => self.close()?,
            _ => {}
        }

        if kind == LineKind::Blank {
            self.pending_blanks.push(line);
            self.pending_comment.clear();
        } else if self.active.is_some() {
            let blanks = std::mem::take(&mut self.pending_blanks);
            for blank in &blanks {
                self.write(blank)?;
            }
            tracing::debug!("> {}", line.trim());
            self.write(&line)?;
        } else if matches!(kind, LineKind::Comment { .. }) {
            tracing::debug!("# {}", line.trim());
            self.pending_comment.push(line);
        } else {
            tracing::debug!("- {}", line.trim());
        }

        Ok(())
    }

    /// Close any open output and start a new one for `name`.
    fn open(&mut self, name: String) -> Result<()> {
        self.close()?;

        let file_name = format!("{name}.{}", self.extension);
        let path = self.sink.location(&file_name);
        tracing::info!("NEW output file: {}", file_name);

        let writer = self.sink.open(&file_name).map_err(|source| SplitError::WriteOutput {
            path: path.display().to_string(),
            source,
        })?;

        self.report.outputs.push(SplitOutput {
            name,
            path,
            lines: 0,
        });
        self.active = Some(ActiveOutput {
            file_name,
            writer,
            index: self.report.outputs.len() - 1,
        });

        let prefix: Vec<String> = self
            .pending_comment
            .drain(..)
            .chain(self.pending_decorators.drain(..))
            .collect();
        for line in &prefix {
            self.write(line)?;
        }
        self.pending_blanks.clear();

        Ok(())
    }

    /// Write a line to the open output.
    fn write(&mut self, line: &str) -> Result<()> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        active
            .writer
            .write_all(line.as_bytes())
            .map_err(|source| SplitError::WriteOutput {
                path: self.sink.location(&active.file_name).display().to_string(),
                source,
            })?;
        self.report.outputs[active.index].lines += 1;
        self.report.lines_written += 1;
        Ok(())
    }

    /// Flush and release the open output, if any.
    fn close(&mut self) -> Result<()> {
        if let Some(mut active) = self.active.take() {
            active.writer.flush().map_err(|source| SplitError::WriteOutput {
                path: self.sink.location(&active.file_name).display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Close the last output at end of input.
    fn finish(mut self) -> Result<SplitReport> {
        self.close()?;
        if !self.pending_decorators.is_empty() {
            tracing::warn!(
                count = self.pending_decorators.len(),
                "Decorators at end of input are not attached to any definition"
            );
        }
        Ok(self.report)
    }
}
