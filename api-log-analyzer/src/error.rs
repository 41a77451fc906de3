use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("unable to read log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("aggregation task failed: {0}")]
    Join(#[from] JoinError),
}
