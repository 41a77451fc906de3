use rand::{SeedableRng, rngs::StdRng};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::time::{Duration, sleep};

use crate::args::LogFormat;
use crate::generator::{generate_api_log, generate_json_log};

const BATCH_SIZE: u64 = 1_000;

/// Appends generated lines to `out` in batches. A `count` of zero streams
/// until the task is dropped; a nonzero `rate` throttles to roughly that
/// many lines per second.
pub async fn run_log_stream(
    out: &str,
    count: u64,
    rate: u64,
    format: LogFormat,
    seed: Option<u64>,
) -> Result<(), std::io::Error> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(out)
        .await?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut written = 0u64;
    loop {
        let batch = if count == 0 {
            BATCH_SIZE
        } else {
            BATCH_SIZE.min(count - written)
        };

        let mut buffer = String::with_capacity(batch as usize * 128);
        for _ in 0..batch {
            let log_line = match format {
                LogFormat::Api => generate_api_log(&mut rng),
                LogFormat::Json => generate_json_log(&mut rng),
            };
            buffer.push_str(&log_line);
            buffer.push('\n');
        }
        file.write_all(buffer.as_bytes()).await?;

        written += batch;
        if count != 0 && written >= count {
            break;
        }
        if rate > 0 {
            sleep(Duration::from_secs_f64(batch as f64 / rate as f64)).await;
        }
    }

    file.flush().await?;
    Ok(())
}
