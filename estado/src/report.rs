//! Report history log handling
//!
//! The report is a chronological, append-only log of run outcomes. Line
//! index 1 holds a running summary and is the only line ever rewritten;
//! historical counts are derived by scanning the log for markers rather
//! than trusting the summary.

use crate::status::{Outcome, Status};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Line index of the running summary
pub const SUMMARY_INDEX: usize = 1;

/// Errors that can occur while handling the report log
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report has no summary line (found only {found} lines)")]
    MissingSummary { found: usize },

    #[error("no status marker found in report")]
    NoMarker,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Cumulative counts derived from the report history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCounts {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl HistoryCounts {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.passed += 1,
            Outcome::Failure => self.failed += 1,
        }
        self.total = self.passed + self.failed;
    }

    /// Render the running-summary line for these counts
    pub fn summary_line(&self) -> String {
        format!(
            "### Test realizados hasta ahora: {} ({} correctos, {} fallidos)",
            self.total, self.passed, self.failed
        )
    }
}

/// Parsed report log
#[derive(Debug, Clone)]
pub struct ReportDoc {
    lines: Vec<String>,
}

impl ReportDoc {
    /// Parse report content, requiring the summary line to be addressable
    pub fn parse(content: &str) -> ReportResult<Self> {
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        if lines.len() <= SUMMARY_INDEX {
            return Err(ReportError::MissingSummary { found: lines.len() });
        }
        Ok(Self { lines })
    }

    /// Load and parse a report from disk
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Derive historical counts by scanning every log line for markers.
    /// The summary line is excluded from the scan so counts never double.
    pub fn counts(&self) -> HistoryCounts {
        let mut counts = HistoryCounts {
            total: 0,
            passed: 0,
            failed: 0,
        };
        for (index, line) in self.lines.iter().enumerate() {
            if index == SUMMARY_INDEX {
                continue;
            }
            if let Some(outcome) = Outcome::from_line(line) {
                counts.add(outcome);
            }
        }
        counts
    }

    /// The most recent recorded status: scans from the end backward and
    /// returns the first marker found. Errors when the log has no entries.
    pub fn last_status(&self) -> ReportResult<Status> {
        self.lines
            .iter()
            .enumerate()
            .rev()
            .filter(|(index, _)| *index != SUMMARY_INDEX)
            .find_map(|(_, line)| Outcome::from_line(line))
            .map(Status::bare)
            .ok_or(ReportError::NoMarker)
    }

    /// Record a new outcome: rewrite the summary line and append a log
    /// entry at the end, preceded by a blank separator line
    pub fn record(&mut self, status: &Status) {
        let mut counts = self.counts();
        counts.add(status.outcome);

        self.lines[SUMMARY_INDEX] = counts.summary_line();
        self.lines.push(String::new());
        self.lines.push(status.render());
    }

    /// Serialize the document back to markdown text
    pub fn serialize(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// Write the document back to disk in one step
    pub fn store(&self, path: impl AsRef<Path>) -> ReportResult<()> {
        fs::write(path, self.serialize())?;
        Ok(())
    }
}
