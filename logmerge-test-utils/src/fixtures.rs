// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logmerge_core::Record;

/// A log line stamped with epoch milliseconds.
pub type LogEntry = Record<u64, String>;

#[must_use]
pub fn entry(timestamp: u64, message: &str) -> LogEntry {
    Record::new(timestamp, message.to_string())
}

/// One entry per timestamp, each with a message naming its timestamp.
#[must_use]
pub fn entries(timestamps: &[u64]) -> Vec<LogEntry> {
    timestamps
        .iter()
        .map(|&timestamp| entry(timestamp, &format!("log@{timestamp}")))
        .collect()
}

#[must_use]
pub fn timestamps(entries: &[LogEntry]) -> Vec<u64> {
    entries.iter().map(|entry| entry.timestamp).collect()
}
