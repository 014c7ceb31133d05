use clap::{Parser, Subcommand};
use log_analyzer_core::analyzer::{RunOptions, RunOutcome};
use log_analyzer_core::cli::analyze::run_analyze;
use log_analyzer_core::cli::config::{ConfigCmd, DEFAULT_CONFIG_PATH, run_config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "log-analyzer",
    version,
    about = "Per-URL request latency reports from nginx access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(clap::Args, Debug, Clone)]
struct RunArgs {
    /// Path to the config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Rewrite the report even if it already exists
    #[arg(long)]
    force: bool,

    /// Analyze this log instead of the newest one in LOG_DIR
    #[arg(long)]
    file: Option<PathBuf>,

    /// Custom path for the report
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a log and write its report (default)
    Run(RunArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let options = RunOptions {
        log: args.file,
        report: args.report,
        force: args.force,
    };

    match run_analyze(&args.config, options)? {
        RunOutcome::Generated { report, .. } => println!("✔ Report written to {}", report.display()),
        RunOutcome::AlreadyExists { report, .. } => {
            println!("✔ Report {} already exists (use --force to rewrite)", report.display())
        }
        RunOutcome::NoLogFound { log_dir } => {
            println!("No log to analyze in {}", log_dir.display())
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Config { cmd }) => run_config(cmd),
        Some(Command::Run(args)) => run(args),
        None => run(cli.run),
    };

    if let Err(e) = result {
        eprintln!("log-analyzer error: {e:#}");
        std::process::exit(1);
    }
}
