pub mod config;
pub mod readme;
pub mod report;
pub mod runner;
pub mod status;

pub use config::{ConfigError, UpdaterConfig};
pub use readme::{ReadmeDoc, ReadmeError, ReadmeResult, SENTINEL};
pub use report::{HistoryCounts, ReportDoc, ReportError, ReportResult, SUMMARY_INDEX};
pub use runner::{RunnerError, RunnerResult, TestRunner};
pub use status::{Outcome, Status};
