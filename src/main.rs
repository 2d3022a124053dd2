//! make-meta CLI
//!
//! Entry point for the `make-meta` command-line tool.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use make_meta::{MetaPipeline, PatchPaths, PipelineError};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "make-meta")]
#[command(about = "Write the project version into <BUILD_DIR>/manifest.json", version)]
struct Cli {
    /// Build output directory containing manifest.json
    #[arg(value_name = "BUILD_DIR")]
    build_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let paths = PatchPaths::from_current_dir(&cli.build_dir)?;
    let report = MetaPipeline::new(paths).run()?;

    tracing::debug!(
        manifest = %report.manifest_file.display(),
        version = %report.version,
        version_name = report.version_name.as_deref().unwrap_or("-"),
        "manifest written"
    );
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
