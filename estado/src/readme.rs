//! Readme document handling
//!
//! The readme carries a fixed sentinel heading; the line immediately after it
//! is the status slot. Parsing makes that position an explicit part of the
//! document structure instead of ad hoc indexing, and mutation is pure
//! (lines in, lines out) with a single write-back.

use crate::status::{Outcome, Status};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The heading line used to anchor the status slot
pub const SENTINEL: &str = "## Estado de los tests";

/// Errors that can occur while handling the readme
#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("sentinel heading '{0}' not found in readme")]
    SentinelNotFound(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReadmeResult<T> = Result<T, ReadmeError>;

/// Parsed readme with the sentinel and status-slot positions made explicit
#[derive(Debug, Clone)]
pub struct ReadmeDoc {
    lines: Vec<String>,
    sentinel_index: usize,
}

impl ReadmeDoc {
    /// Parse readme content, locating the sentinel heading
    pub fn parse(content: &str) -> ReadmeResult<Self> {
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        let sentinel_index = lines
            .iter()
            .position(|line| line.trim() == SENTINEL)
            .ok_or(ReadmeError::SentinelNotFound(SENTINEL))?;

        Ok(Self {
            lines,
            sentinel_index,
        })
    }

    /// Load and parse a readme from disk
    pub fn load(path: impl AsRef<Path>) -> ReadmeResult<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Index of the status slot: the line immediately after the sentinel,
    /// or `None` when the sentinel is the final line
    fn status_index(&self) -> Option<usize> {
        let index = self.sentinel_index + 1;
        (index < self.lines.len()).then_some(index)
    }

    /// The outcome currently recorded in the status slot, if the slot
    /// exists and carries a marker
    pub fn current_outcome(&self) -> Option<Outcome> {
        self.status_index()
            .and_then(|i| Outcome::from_line(&self.lines[i]))
    }

    /// Overwrite the status slot with the new status, appending a status
    /// line when none exists yet. Idempotent for an identical status.
    pub fn set_status(&mut self, status: &Status) {
        let rendered = status.render();
        match self.status_index() {
            Some(i) => self.lines[i] = rendered,
            None => self.lines.push(rendered),
        }
    }

    /// Serialize the document back to markdown text
    pub fn serialize(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// Write the document back to disk in one step
    pub fn store(&self, path: impl AsRef<Path>) -> ReadmeResult<()> {
        fs::write(path, self.serialize())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Proyecto\n\n## Estado de los tests\n(sin datos)\n\n## Uso\nTexto.\n";

    #[test]
    fn test_parse_locates_sentinel() {
        let doc = ReadmeDoc::parse(README).unwrap();
        assert_eq!(doc.sentinel_index, 2);
    }

    #[test]
    fn test_parse_missing_sentinel() {
        let result = ReadmeDoc::parse("# Proyecto\n\nSin estado.\n");
        assert!(matches!(result, Err(ReadmeError::SentinelNotFound(_))));
    }

    #[test]
    fn test_set_status_overwrites_slot_only() {
        let mut doc = ReadmeDoc::parse(README).unwrap();
        doc.set_status(&Status::bare(Outcome::Success));

        let expected = "# Proyecto\n\n## Estado de los tests\n✅ - Tests correctos\n\n## Uso\nTexto.\n";
        assert_eq!(doc.serialize(), expected);
    }

    #[test]
    fn test_set_status_appends_when_sentinel_is_last_line() {
        let mut doc = ReadmeDoc::parse("# Proyecto\n\n## Estado de los tests\n").unwrap();
        doc.set_status(&Status::bare(Outcome::Failure));

        assert_eq!(
            doc.serialize(),
            "# Proyecto\n\n## Estado de los tests\n❌ - Tests fallidos\n"
        );
    }

    #[test]
    fn test_set_status_is_idempotent() {
        let status = Status::now(Outcome::Success);

        let mut doc = ReadmeDoc::parse(README).unwrap();
        doc.set_status(&status);
        let once = doc.serialize();

        doc.set_status(&status);
        assert_eq!(doc.serialize(), once);
    }

    #[test]
    fn test_current_outcome() {
        let mut doc = ReadmeDoc::parse(README).unwrap();
        assert_eq!(doc.current_outcome(), None);

        doc.set_status(&Status::now(Outcome::Failure));
        assert_eq!(doc.current_outcome(), Some(Outcome::Failure));
    }

    #[test]
    fn test_indented_sentinel_is_still_found() {
        let doc = ReadmeDoc::parse("  ## Estado de los tests  \nviejo\n").unwrap();
        assert_eq!(doc.sentinel_index, 0);
    }
}
