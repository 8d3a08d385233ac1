use crate::rules::types::Severity;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human summary with per-severity counts and example findings
    #[default]
    Terminal,
    /// Full structured report, identical in shape to the persisted document
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "codesweep",
    version,
    about = "Pattern-based security scanner for project source trees",
    long_about = "codesweep walks a project tree, matches categorized detection rules \
                  (secrets, vulnerability signatures, compliance patterns) against every line, \
                  merges npm advisory data, and reports findings bucketed by severity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a project directory (default command)
    Scan(ScanArgs),
    /// List the built-in detection rules
    Rules,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Console output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Also write the full report to disk
    #[arg(short, long)]
    pub detailed: bool,

    /// Report path (defaults to security-scan-report.json under the project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum severity shown in the terminal summary
    #[arg(long, value_enum, default_value_t = Severity::Info)]
    pub min_severity: Severity,

    /// Collapse duplicate findings for the same file, line, and category
    #[arg(long)]
    pub dedupe: bool,

    /// Scan files that look like tests instead of skipping them
    #[arg(long)]
    pub include_tests: bool,

    /// Timeout in seconds for the dependency audit subprocess
    #[arg(long, default_value_t = 30)]
    pub audit_timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args_defaults_to_scan() {
        let cli = Cli::try_parse_from(["codesweep"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_scan_path() {
        let cli = Cli::try_parse_from(["codesweep", "scan", "./project"]).unwrap();
        match cli.command {
            Some(Command::Scan(args)) => {
                assert_eq!(args.path, PathBuf::from("./project"));
                assert!(!args.detailed);
                assert!(!args.dedupe);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_parse_format_json() {
        let cli = Cli::try_parse_from(["codesweep", "scan", "--format", "json", "."]).unwrap();
        match cli.command {
            Some(Command::Scan(args)) => assert!(matches!(args.format, OutputFormat::Json)),
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_parse_detailed_with_output() {
        let cli = Cli::try_parse_from([
            "codesweep",
            "scan",
            "--detailed",
            "--output",
            "report.json",
            ".",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Scan(args)) => {
                assert!(args.detailed);
                assert_eq!(args.output, Some(PathBuf::from("report.json")));
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_parse_min_severity() {
        let cli =
            Cli::try_parse_from(["codesweep", "scan", "--min-severity", "high", "."]).unwrap();
        match cli.command {
            Some(Command::Scan(args)) => assert_eq!(args.min_severity, Severity::High),
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_parse_rules_command() {
        let cli = Cli::try_parse_from(["codesweep", "rules"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Rules)));
    }
}
