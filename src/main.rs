use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use vietqr_encoder::engine::BatchEngine;
use vietqr_encoder::models::{BankDirectory, EncodedRow};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: vietqr-encoder [input].csv [log_level:optional] [banks].json:optional > [output].csv");
        eprintln!("Input columns: bank,account,holder,amount,content,format");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let mut engine = BatchEngine::new();

    if let Some(directory_path) = args.get(3) {
        let directory = BankDirectory::from_path(directory_path)
            .with_context(|| format!("Unable to load bank directory from {directory_path}"))?;
        info!("Loaded {} banks from {directory_path}", directory.len());
        engine = engine.with_directory(Arc::new(directory));
    }

    let timer = Instant::now();
    let rows = engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Encoded {} payloads in: {duration:?}", rows.len());

    write_results_to_stdout(&rows)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV output, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(rows: &[EncodedRow]) -> Result<()> {
    //NOTE: Messages may contain commas or quotes, so rows go through the csv writer rather than writeln!
    let mut writer = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    if rows.is_empty() {
        writer.write_record(["row", "bank", "account_number", "payload"])?;
    }

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
