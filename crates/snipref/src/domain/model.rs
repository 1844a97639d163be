//! Selection snapshots, line ranges, and locators.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::errors::LocatorError;

/// Inclusive span of 1-indexed lines, normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Build a range from two line numbers in either order. Zero is clamped
    /// to line 1.
    pub fn new(a: usize, b: usize) -> Self {
        let start = a.min(b).max(1);
        let end = a.max(b).max(1);
        Self { start, end }
    }

    /// Range covering a single line.
    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered by the range.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Clamp the range to a document of `total_lines` lines. Returns `None`
    /// when the range lies entirely past the end of the document.
    pub fn clamp_to(&self, total_lines: usize) -> Option<Self> {
        if total_lines == 0 || self.start > total_lines {
            return None;
        }
        Some(Self::new(self.start, self.end.min(total_lines)))
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for LineRange {
    type Err = LocatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || LocatorError::InvalidRange(value.to_string());
        let (start, end) = match value.split_once('-') {
            Some((start, end)) => (start, end),
            None => (value, value),
        };
        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;
        if start == 0 || end == 0 {
            return Err(invalid());
        }
        Ok(LineRange::new(start, end))
    }
}

/// A selection target as typed on the command line: `FILE[:START[-END]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub path: PathBuf,
    pub range: Option<LineRange>,
}

impl FromStr for Locator {
    type Err = LocatorError;

    /// The suffix after the last `:` is treated as a line range only when it
    /// parses as one; otherwise the whole string is the file path.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(LocatorError::EmptyPath);
        }

        if let Some((path, suffix)) = value.rsplit_once(':')
            && !path.is_empty()
            && let Ok(range) = suffix.parse::<LineRange>()
        {
            return Ok(Locator {
                path: PathBuf::from(path),
                range: Some(range),
            });
        }

        Ok(Locator {
            path: PathBuf::from(value),
            range: None,
        })
    }
}

/// Transient per-invocation view of the active selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// Path of the document relative to the workspace root.
    pub relative_path: String,
    /// Lines covered by the selection.
    pub range: LineRange,
    /// Exact text contents of the selection span.
    pub text: String,
    /// Markdown fence tag guessed from the file name.
    pub language: String,
}

impl SelectionSnapshot {
    /// `<relativePath>:<lineRange>` reference for the selection.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.relative_path, self.range)
    }

    /// Reference plus a fenced code block holding the selected text.
    pub fn to_markdown(&self) -> String {
        format!(
            "{}\n```{}\n{}\n```",
            self.reference(),
            self.language,
            self.text
        )
    }

    /// Whether the selection carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
