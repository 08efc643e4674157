use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser};
use env_logger::{Builder, Env, Target};
use log::{error, info, Level, LevelFilter};

use tsplib_nn::config::{Heuristic, SolveConfig};
use tsplib_nn::instance::read_instance_file;
use tsplib_nn::models::InstanceReport;
use tsplib_nn::solver::solve;

/// Builds a tour for each explicit-weight TSPLIB file and reports its length.
#[derive(Debug, Parser)]
#[command(name = "tsplib-nn", version, about)]
struct Args {
    /// Instance files, processed in the order given.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Construction heuristic.
    #[arg(long, value_enum, default_value_t = Heuristic::NearestNeighbor)]
    heuristic: Heuristic,

    /// Node every tour starts and ends at.
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Print one JSON object per instance instead of text.
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace). Defaults to RUST_LOG or warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logger(args.verbose)?;

    let config = SolveConfig::new(args.heuristic, args.start);
    let mut failures = 0usize;

    for path in &args.files {
        match process(path, &config) {
            Ok(report) => print_report(&report, args.json)?,
            Err(e) => {
                error!("{}: {e:#}", path.display());
                failures += 1;
            }
        }
    }

    info!(
        "processed {} instance(s), {failures} failed",
        args.files.len()
    );
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn process(path: &Path, config: &SolveConfig) -> anyhow::Result<InstanceReport> {
    info!("processing {}", path.display());
    let instance = read_instance_file(path).context("failed to decode instance")?;

    let started = Instant::now();
    let solution = solve(&instance, config).context("failed to build tour")?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    Ok(InstanceReport::new(
        path.display().to_string(),
        &instance,
        config.heuristic,
        solution,
        elapsed_ms,
    ))
}

fn print_report(report: &InstanceReport, json: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
        return Ok(());
    }
    match &report.name {
        Some(name) => writeln!(out, "Instance: {} ({name})", report.source)?,
        None => writeln!(out, "Instance: {}", report.source)?,
    }
    writeln!(out, "Dimension: {}", report.dimension)?;
    writeln!(out, "Edge weight format: {}", report.format)?;
    writeln!(out, "Heuristic: {}", report.heuristic)?;
    writeln!(out, "Tour: {}", report.tour)?;
    writeln!(out, "Length: {}", report.length)?;
    writeln!(out, "Elapsed: {:.3} ms", report.elapsed_ms)?;
    writeln!(out)?;
    Ok(())
}

fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose > 0 {
        builder.filter_level(match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()));
    builder.try_init().context("logger init failed")
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
