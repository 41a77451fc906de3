use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    invariants::{Endpoint, Minute, Status},
    models::LogRecord,
};

/// One row of an aggregation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry<K> {
    pub key: K,
    pub count: u64,
}

/// Order-preserving tally. Every key keeps the position of its first
/// observation; lookups go through a side index instead of a scan over the
/// rows.
struct Counter<K> {
    index: HashMap<K, usize>,
    entries: Vec<CountEntry<K>>,
}

impl<K: Clone + Eq + Hash> Counter<K> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn record(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(CountEntry { key, count: 1 });
            }
        }
    }

    fn into_entries(self) -> Vec<CountEntry<K>> {
        self.entries
    }
}

/// Calls per method token, in order of first appearance. Records without a
/// method all land on the `"Unknown"` row.
pub fn count_by_endpoint(records: &[LogRecord]) -> Vec<CountEntry<Endpoint>> {
    let mut counter = Counter::new();
    for record in records {
        counter.record(Endpoint::from(record.endpoint.as_deref()));
    }
    counter.into_entries()
}

/// Calls per minute of the normalized timestamp, in order of first
/// appearance.
pub fn count_by_minute(records: &[LogRecord]) -> Vec<CountEntry<Minute>> {
    let mut counter = Counter::new();
    for record in records {
        counter.record(Minute::from(record.timestamp.as_str()));
    }
    counter.into_entries()
}

/// Calls per status bucket, in order of first appearance. Records without
/// a status share the `0` row.
pub fn count_by_status(records: &[LogRecord]) -> Vec<CountEntry<Status>> {
    let mut counter = Counter::new();
    for record in records {
        counter.record(Status::from(record.status));
    }
    counter.into_entries()
}

#[cfg(test)]
mod test {
    use super::*;
    use asserting::prelude::*;

    fn record(timestamp: &str, endpoint: Option<&str>, status: Option<u16>) -> LogRecord {
        LogRecord {
            timestamp: timestamp.to_string(),
            endpoint: endpoint.map(str::to_string),
            status,
        }
    }

    #[test]
    fn endpoint_counts_keep_first_seen_order() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", Some("POST"), Some(201)),
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(200)),
            record("2024-01-01 10:16 +00:00", Some("POST"), Some(201)),
        ];

        let entries = count_by_endpoint(&records);
        assert_that!(entries.len()).is_equal_to(2);
        assert_eq!(entries[0].key.as_str(), "POST");
        assert_eq!(entries[0].count, 2);
        assert_eq!(entries[1].key.as_str(), "GET");
        assert_eq!(entries[1].count, 1);
    }

    #[test]
    fn records_without_endpoint_share_the_unknown_row() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", None, Some(200)),
            record("2024-01-01 10:15 +00:00", None, Some(200)),
        ];

        let entries = count_by_endpoint(&records);
        assert_that!(entries.len()).is_equal_to(1);
        assert_eq!(entries[0].key.as_str(), "Unknown");
        assert_eq!(entries[0].count, 2);
    }

    #[test]
    fn minute_counts_merge_timestamps_in_the_same_minute() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(200)),
            record("2024-01-01 10:15 +01:00", Some("POST"), Some(500)),
            record("2024-01-01 10:16 +00:00", Some("GET"), Some(200)),
        ];

        let entries = count_by_minute(&records);
        assert_that!(entries.len()).is_equal_to(2);
        assert_eq!(entries[0].key.as_str(), "2024-01-01 10:15");
        assert_eq!(entries[0].count, 2);
        assert_eq!(entries[1].key.as_str(), "2024-01-01 10:16");
        assert_eq!(entries[1].count, 1);
    }

    #[test]
    fn status_zero_and_missing_status_share_one_row() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(0)),
            record("2024-01-01 10:15 +00:00", Some("GET"), None),
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(200)),
        ];

        let entries = count_by_status(&records);
        assert_that!(entries.len()).is_equal_to(2);
        assert_eq!(entries[0].key.as_u16(), 0);
        assert_eq!(entries[0].count, 2);
        assert_eq!(entries[1].key.as_u16(), 200);
        assert_eq!(entries[1].count, 1);
    }

    #[test]
    fn counts_sum_to_the_number_of_records() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(200)),
            record("2024-01-01 10:15 +00:00", Some("POST"), Some(500)),
            record("2024-01-01 10:17 +00:00", None, None),
            record("2024-01-01 10:17 +00:00", Some("GET"), Some(200)),
        ];

        let total = records.len() as u64;
        let by_endpoint: u64 = count_by_endpoint(&records).iter().map(|e| e.count).sum();
        let by_minute: u64 = count_by_minute(&records).iter().map(|e| e.count).sum();
        let by_status: u64 = count_by_status(&records).iter().map(|e| e.count).sum();
        assert_eq!(by_endpoint, total);
        assert_eq!(by_minute, total);
        assert_eq!(by_status, total);
    }

    #[test]
    fn counting_is_deterministic() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(200)),
            record("2024-01-01 10:15 +00:00", Some("POST"), Some(500)),
            record("2024-01-01 10:16 +00:00", Some("GET"), Some(404)),
        ];

        assert_eq!(count_by_endpoint(&records), count_by_endpoint(&records));
        assert_eq!(count_by_minute(&records), count_by_minute(&records));
        assert_eq!(count_by_status(&records), count_by_status(&records));
    }

    #[test]
    fn two_line_example_produces_the_expected_tables() {
        let records = vec![
            record("2024-01-01 10:15 +00:00", Some("GET"), Some(200)),
            record("2024-01-01 10:15 +00:00", Some("POST"), Some(500)),
        ];

        let by_endpoint = count_by_endpoint(&records);
        assert_eq!(
            by_endpoint
                .iter()
                .map(|e| (e.key.as_str(), e.count))
                .collect::<Vec<_>>(),
            vec![("GET", 1), ("POST", 1)]
        );

        let by_minute = count_by_minute(&records);
        assert_eq!(
            by_minute
                .iter()
                .map(|e| (e.key.as_str(), e.count))
                .collect::<Vec<_>>(),
            vec![("2024-01-01 10:15", 2)]
        );

        let by_status = count_by_status(&records);
        assert_eq!(
            by_status
                .iter()
                .map(|e| (e.key.as_u16(), e.count))
                .collect::<Vec<_>>(),
            vec![(200, 1), (500, 1)]
        );
    }
}
