use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake API access logs for testing", long_about = None)]
pub struct CliArgs {
    /// File the generated lines are appended to
    #[arg(long, default_value = "prod-api-prod-out.log")]
    out: String,

    /// Number of lines to write, 0 means stream until CTRL+C
    #[arg(long, default_value_t = 10_000)]
    count: u64,

    /// Lines per second, 0 disables throttling
    #[arg(long, default_value_t = 0)]
    rate: u64,

    #[arg(long, value_enum, default_value_t = LogFormat::Api)]
    format: LogFormat,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Api,
    Json,
}
