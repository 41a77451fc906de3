use std::sync::LazyLock;

use regex::Regex;

use crate::models::LogRecord;

// Request lines look like:
// 2024-01-01 10:15 +00:00: 10.0.0.7 "GET /api/users HTTP/1.1" 200
// The pattern is deliberately unanchored so prefix or suffix text added by
// collectors does not reject a line. The path group is matched but dropped.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<date>\d{4}-\d{2}-\d{2} \d{2}:\d{2} \+\d{2}:\d{2}):.*(?P<endpoint>GET|POST|PUT|DELETE) (.*) HTTP/1\.\d" (?P<status>\d{3})"#,
    )
    .expect("valid pattern")
});

/// Turns the raw text of a log file into records, one per matching line,
/// in input order. Lines that do not match are skipped without comment.
pub fn extract_records(text: &str) -> Vec<LogRecord> {
    text.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<LogRecord> {
    let captures = LINE_PATTERN.captures(line)?;
    Some(LogRecord {
        timestamp: captures["date"].to_string(),
        endpoint: captures
            .name("endpoint")
            .map(|token| token.as_str().to_string()),
        status: captures
            .name("status")
            .and_then(|digits| digits.as_str().parse().ok()),
    })
}
