use std::path::Path;

use crate::error::AnalyzerError;

/// Reads the whole log file into memory. The file is the single external
/// input of a run; nothing is streamed or retried.
pub async fn read_log(path: &Path) -> Result<String, AnalyzerError> {
    let text = tokio::fs::read_to_string(path).await?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
