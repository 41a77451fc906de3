use chrono::Utc;
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api/users", 50),
    ("/api/orders", 20),
    ("/admin", 5),
    ("/health", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const SERVICE: [(&str, u8); 4] = [("auth", 1), ("api", 5), ("frontend", 10), ("db", 10)];
const LEVEL: [(&str, u8); 3] = [("INFO", 30), ("WARN", 5), ("ERROR", 1)];
const MESSAGE: [(&str, u8); 5] = [
    ("User logged in", 5),
    ("DB query executed", 50),
    ("Cache miss", 10),
    ("Permission denied", 10),
    ("Token refreshed", 8),
];

/// A request line in the analyzer's input format:
/// `2024-01-01 10:15 +00:00: 10.0.0.7 "GET /api/users HTTP/1.1" 200`
pub fn generate_api_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M %:z");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!("{timestamp}: {ip} \"{method} {path} HTTP/1.1\" {status}")
}

/// A structured service line. The analyzer skips these, which makes them
/// useful noise between request lines.
pub fn generate_json_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ts = Utc::now().to_rfc3339();
    let service = SERVICE.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let level = LEVEL.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let msg = MESSAGE.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!("{{\"ts\":\"{ts}\",\"service\":\"{service}\",\"level\":\"{level}\",\"msg\":\"{msg}\"}}")
}
