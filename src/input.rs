//! Document input: sentinel-terminated console text or a file on disk.

use anyhow::{Context, Result};
use std::fmt;
use std::io::{BufRead, StdinLock};
use std::path::PathBuf;

use crate::config::constants::INPUT_SENTINEL;

/// The raw ToR content. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text has no non-whitespace content
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Producer of the document text for one run
pub trait DocumentSource {
    fn read_document(&mut self) -> Result<DocumentText>;

    /// Where the text comes from, for logs
    fn describe(&self) -> String;
}

/// Reads lines until one equals the sentinel (`END`, any case, surrounding
/// whitespace ignored) or the stream ends. Lines are joined with `\n`; the
/// sentinel itself is dropped.
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ConsoleInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> DocumentSource for ConsoleInput<R> {
    fn read_document(&mut self) -> Result<DocumentText> {
        let mut lines = Vec::new();
        for line in (&mut self.reader).lines() {
            let line = line.context("Failed to read document text from console")?;
            if is_sentinel(&line) {
                break;
            }
            lines.push(line);
        }
        Ok(DocumentText(lines.join("\n")))
    }

    fn describe(&self) -> String {
        "console".to_string()
    }
}

/// Reads the whole document from a UTF-8 text file
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileInput {
    fn read_document(&mut self) -> Result<DocumentText> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read document from {}", self.path.display()))?;
        Ok(DocumentText(text))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn is_sentinel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(INPUT_SENTINEL)
}
