use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One narrative line in the player's life log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    /// Player age at the time of the entry.
    pub age: u32,
    pub tags: Vec<String>,
    /// Wall-clock capture time, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, age: u32, tags: &[&str]) -> Self {
        Self {
            text: text.into(),
            age,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamp_ms: now_ms(),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
