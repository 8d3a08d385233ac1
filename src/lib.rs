pub mod aggregate;
pub mod audit;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod exclude;
pub mod reporter;
pub mod rules;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use aggregate::{ScanResult, SeverityBuckets, aggregate};
pub use audit::DependencyAuditor;
pub use cli::{Cli, Command, OutputFormat, ScanArgs};
pub use discovery::FileEnumerator;
pub use error::{Result, ScanError};
pub use exclude::ExclusionPolicy;
pub use reporter::{JsonReporter, Report, Reporter, TerminalReporter, persist_report};
pub use rules::{Category, Finding, LineMatcher, Rule, Severity};
pub use run::{ScanOptions, run_scan};
