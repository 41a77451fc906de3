mod analytics;
mod error;
mod extract;
mod ingest;
mod invariants;
mod models;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::{task::JoinHandle, try_join};
use tracing_subscriber::EnvFilter;

use analytics::{CountEntry, count_by_endpoint, count_by_minute, count_by_status};
use error::AnalyzerError;
use models::LogRecord;
use report::CallReport;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Access log to summarize
    #[arg(long, default_value = "prod-api-prod-out.log")]
    file: PathBuf,

    /// Exit nonzero when the run fails instead of only reporting the error
    #[arg(long)]
    strict_exit: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(&args).await {
        eprintln!("{e}");
        if args.strict_exit {
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> Result<(), AnalyzerError> {
    let text = ingest::read_log(&args.file).await?;
    let records: Arc<[LogRecord]> = extract::extract_records(&text).into();
    tracing::debug!("extracted {} records", records.len());

    let (by_endpoint, by_minute, by_status) = try_join!(
        spawn_counter(&records, count_by_endpoint),
        spawn_counter(&records, count_by_minute),
        spawn_counter(&records, count_by_status),
    )?;

    let report = CallReport {
        by_endpoint,
        by_minute,
        by_status,
    };
    println!("{report}");
    Ok(())
}

fn spawn_counter<K: Send + 'static>(
    records: &Arc<[LogRecord]>,
    count: fn(&[LogRecord]) -> Vec<CountEntry<K>>,
) -> JoinHandle<Vec<CountEntry<K>>> {
    let records = records.clone();
    tokio::task::spawn_blocking(move || count(&records))
}
