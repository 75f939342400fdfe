use chrono::{DateTime, Local};
use std::fmt;

/// Outcome of a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Test command exited with code 0
    Success,
    /// Test command exited with a nonzero code (or died to a signal)
    Failure,
}

impl Outcome {
    /// Get the emoji marker used to encode this outcome in markdown
    pub fn marker(&self) -> &'static str {
        match self {
            Outcome::Success => "✅",
            Outcome::Failure => "❌",
        }
    }

    /// Get the human-readable message for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success => "Tests correctos",
            Outcome::Failure => "Tests fallidos",
        }
    }

    /// Classify a line of text by the marker it carries, if any
    pub fn from_line(line: &str) -> Option<Outcome> {
        if line.contains(Outcome::Success.marker()) {
            Some(Outcome::Success)
        } else if line.contains(Outcome::Failure.marker()) {
            Some(Outcome::Failure)
        } else {
            None
        }
    }
}

/// A classified test outcome, optionally stamped with the local time it was
/// observed. Renders as `<emoji> [<timestamp>] - <message>` when stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub outcome: Outcome,
    pub timestamp: Option<DateTime<Local>>,
}

impl Status {
    /// Create a status stamped with the current local time
    pub fn now(outcome: Outcome) -> Self {
        Self {
            outcome,
            timestamp: Some(Local::now()),
        }
    }

    /// Create an unstamped status (e.g. recovered from a report line)
    pub fn bare(outcome: Outcome) -> Self {
        Self {
            outcome,
            timestamp: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// Render the status as a single markdown line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.timestamp {
            Some(ts) => write!(
                f,
                "{} [{}] - {}",
                self.outcome.marker(),
                ts.format("%Y-%m-%d %H:%M:%S"),
                self.outcome.message()
            ),
            None => write!(f, "{} - {}", self.outcome.marker(), self.outcome.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_markers() {
        assert_eq!(Outcome::Success.marker(), "✅");
        assert_eq!(Outcome::Failure.marker(), "❌");
    }

    #[test]
    fn test_outcome_from_line() {
        assert_eq!(
            Outcome::from_line("✅ [2024-01-01 10:00:00] - Tests correctos"),
            Some(Outcome::Success)
        );
        assert_eq!(
            Outcome::from_line("❌ [2024-01-01 10:00:00] - Tests fallidos"),
            Some(Outcome::Failure)
        );
        assert_eq!(Outcome::from_line("## Estado de los tests"), None);
        assert_eq!(Outcome::from_line(""), None);
    }

    #[test]
    fn test_stamped_rendering() {
        let status = Status::now(Outcome::Success);
        let rendered = status.render();
        assert!(rendered.starts_with("✅ ["));
        assert!(rendered.ends_with("] - Tests correctos"));
    }

    #[test]
    fn test_bare_rendering() {
        assert_eq!(
            Status::bare(Outcome::Failure).render(),
            "❌ - Tests fallidos"
        );
    }

    #[test]
    fn test_rendered_status_classifies_back() {
        let status = Status::now(Outcome::Failure);
        assert_eq!(Outcome::from_line(&status.render()), Some(Outcome::Failure));
    }
}
