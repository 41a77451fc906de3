mod args;
mod generator;
mod stream;

use args::CliArgs;
use clap::Parser;
use stream::run_log_stream;
use tokio::signal;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let args = CliArgs::parse();
    println!(
        "Writing {:?} log lines to {} ({} requested, rate {}/sec)",
        args.format(),
        args.out(),
        args.count(),
        args.rate()
    );

    tokio::select! {
        result = run_log_stream(
            args.out(),
            *args.count(),
            *args.rate(),
            *args.format(),
            *args.seed(),
        ) => {
            if let Err(e) = result {
                eprintln!("log generation error: {e}");
            }
        }
        _ = signal::ctrl_c() => {
            println!("\nStopping log generation...");
        }
    }
}
