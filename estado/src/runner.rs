//! Test command execution

use crate::status::{Outcome, Status};
use std::process::Command;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running the test command
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Nothing to execute
    #[error("test command is empty")]
    EmptyCommand,

    /// The command could not be spawned at all (e.g. not installed)
    #[error("failed to spawn test command '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

pub type RunnerResult<T> = Result<T, RunnerError>;

/// Runs the configured test command and classifies its exit code
#[derive(Debug, Clone)]
pub struct TestRunner {
    command: Vec<String>,
}

impl TestRunner {
    pub fn new(command: Vec<String>) -> RunnerResult<Self> {
        if command.is_empty() {
            return Err(RunnerError::EmptyCommand);
        }
        Ok(Self { command })
    }

    /// Spawn the test command with inherited stdout/stderr and block until
    /// it exits. Exit code 0 is a success; any other exit, including death
    /// by signal, is a failure. A failed spawn is an error, not a failure
    /// status. No retry, no timeout.
    pub fn run(&self) -> RunnerResult<Status> {
        info!(command = %self.command.join(" "), "running test command");

        let exit = Command::new(&self.command[0])
            .args(&self.command[1..])
            .status()
            .map_err(|source| RunnerError::Spawn {
                command: self.command.join(" "),
                source,
            })?;

        let outcome = if exit.success() {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        info!(?outcome, code = ?exit.code(), "test command finished");

        Ok(Status::now(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(
            TestRunner::new(vec![]),
            Err(RunnerError::EmptyCommand)
        ));
    }

    #[test]
    fn test_exit_zero_is_success() {
        let runner = TestRunner::new(vec!["true".to_string()]).unwrap();
        let status = runner.run().unwrap();
        assert_eq!(status.outcome, Outcome::Success);
        assert!(status.render().contains("✅"));
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        let runner = TestRunner::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "exit 3".to_string(),
        ])
        .unwrap();
        let status = runner.run().unwrap();
        assert_eq!(status.outcome, Outcome::Failure);
        assert!(status.render().contains("❌"));
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let runner =
            TestRunner::new(vec!["definitely-not-a-real-test-runner".to_string()]).unwrap();
        assert!(matches!(runner.run(), Err(RunnerError::Spawn { .. })));
    }
}
