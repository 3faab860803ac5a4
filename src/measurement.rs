use std::time::Duration;

use chrono::{DateTime, Local};

/// Marks the byte count and duration of a run that has not finished.
pub const INCOMPLETE: i64 = -1;

/// One download attempt: what was fetched, when, how many bytes and how long.
///
/// `bytes` and `milliseconds` are either both [`INCOMPLETE`] or both
/// non-negative. A pending record is turned into a completed one by
/// [`Measurement::complete`], which consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    url: String,
    started_at: DateTime<Local>,
    bytes: i64,
    milliseconds: i64,
}

impl Measurement {
    pub fn begin(url: &str) -> Self {
        Self {
            url: url.to_string(),
            started_at: Local::now(),
            bytes: INCOMPLETE,
            milliseconds: INCOMPLETE,
        }
    }

    pub fn from_parts(
        url: &str,
        started_at: DateTime<Local>,
        bytes: u64,
        milliseconds: u64,
    ) -> Self {
        Self {
            url: url.to_string(),
            started_at,
            bytes: saturating_i64(bytes),
            milliseconds: saturating_i64(milliseconds),
        }
    }

    pub fn complete(self, bytes: usize, elapsed: Duration) -> Self {
        Self {
            bytes: saturating_i64(bytes as u64),
            milliseconds: saturating_i64(elapsed.as_millis().min(u64::MAX as u128) as u64),
            ..self
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn is_complete(&self) -> bool {
        self.bytes >= 0 && self.milliseconds >= 0
    }

    pub fn bytes(&self) -> Option<u64> {
        self.is_complete().then_some(self.bytes as u64)
    }

    pub fn milliseconds(&self) -> Option<u64> {
        self.is_complete().then_some(self.milliseconds as u64)
    }

    /// Raw byte count, [`INCOMPLETE`] for a pending record.
    pub fn raw_bytes(&self) -> i64 {
        self.bytes
    }

    /// Raw duration in milliseconds, [`INCOMPLETE`] for a pending record.
    pub fn raw_milliseconds(&self) -> i64 {
        self.milliseconds
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
