use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mega_sena_lib::cli::{self, Args};
use mega_sena_lib::{config, reports, BetReport, CheckerError, CheckerResult, MegaSenaChecker};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) if e.is_user_input() => return Ok(report_user_error(&e)),
        Err(e) => return Err(e).context("Cannot check the bet"),
    };

    if args.json {
        println!("{}", reports::render_json(&report)?);
    } else {
        print!("{}", reports::render_text(&report));
    }

    Ok(ExitCode::SUCCESS)
}

/// The bet is validated before the archive is touched.
fn run(args: &Args) -> CheckerResult<BetReport> {
    let bet = cli::parse_bet(&args.numbers)?;

    let cfg = config::load_with(args.archive.clone(), args.separator.as_deref())?;
    tracing::debug!("Archive: {:?} (separator {:?})", cfg.archive_path, cfg.separator);

    let checker = MegaSenaChecker::from_file(&cfg.archive_path, cfg.separator)?;
    Ok(checker.report(bet))
}

fn report_user_error(e: &CheckerError) -> ExitCode {
    tracing::debug!("rejected bet: {:?}", e);
    match e {
        CheckerError::InvalidArgumentCount(_) => println!("{}", cli::usage()),
        _ => eprintln!("Error: {}", e),
    }
    ExitCode::from(1)
}
