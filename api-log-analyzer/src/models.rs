/// One successfully extracted log line.
///
/// `endpoint` holds the HTTP method token from the request quote. The
/// upstream log producer labels that column "endpoint" and the grouping
/// tables key on it under that name, so the name stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub endpoint: Option<String>,
    pub status: Option<u16>,
}
