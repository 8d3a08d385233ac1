use clap::Parser;
use codesweep::cli::{Cli, Command, OutputFormat, ScanArgs};
use codesweep::reporter::{persist_report, JsonReporter, Reporter, TerminalReporter};
use codesweep::rules::builtin;
use codesweep::run::{run_scan, ScanOptions};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Rules) => {
            print_rules();
            ExitCode::SUCCESS
        }
        Some(Command::Scan(args)) => run_scan_command(&args),
        None => {
            // Default: scan the current directory with default options.
            let args = ScanArgs {
                path: ".".into(),
                format: OutputFormat::Terminal,
                detailed: false,
                output: None,
                min_severity: codesweep::rules::Severity::Info,
                dedupe: false,
                include_tests: false,
                audit_timeout: 30,
            };
            run_scan_command(&args)
        }
    }
}

fn run_scan_command(args: &ScanArgs) -> ExitCode {
    let mut options = ScanOptions::new(&args.path);
    options.dedupe = args.dedupe;
    options.include_test_files = args.include_tests;
    options.audit_timeout = Duration::from_secs(args.audit_timeout);

    let result = match run_scan(&options) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(2);
        }
    };

    let rendered = match args.format {
        OutputFormat::Terminal => TerminalReporter::new()
            .with_min_severity(args.min_severity)
            .report(&result),
        OutputFormat::Json => JsonReporter::new().report(&result),
    };
    print!("{}", rendered);

    if args.detailed {
        match persist_report(&result, &options.root, args.output.as_deref()) {
            Ok(path) => eprintln!("Report written to {}", path.display()),
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::from(2);
            }
        }
    }

    if result.findings.critical.is_empty() && result.findings.high.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn print_rules() {
    for rule in builtin::all_rules() {
        println!(
            "{:<8} {:<13} {:<9} {}",
            rule.id,
            rule.category,
            rule.severity.as_str(),
            rule.name
        );
    }
}
