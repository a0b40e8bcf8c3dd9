#![forbid(unsafe_code)]

//! Process-wide trace log used for structured search logging.
//!
//! Records are appended under a mutex and drained by the caller; a poisoned
//! lock degrades to dropping records rather than failing the search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Unique id of the form `<prefix>-<16 hex digits>`.
#[must_use]
pub fn next_operation_id(prefix: &str) -> String {
    let next = OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{next:016x}")
}

/// Append-only log of trace records, meant to live in a `static`.
#[derive(Debug)]
pub struct TraceSink<T> {
    records: OnceLock<Mutex<Vec<T>>>,
}

impl<T> TraceSink<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: OnceLock::new(),
        }
    }

    fn log(&self) -> &Mutex<Vec<T>> {
        self.records.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn record(&self, trace: T) {
        if let Ok(mut log) = self.log().lock() {
            log.push(trace);
        }
    }

    /// Drain every record collected so far.
    #[must_use]
    pub fn take(&self) -> Vec<T> {
        if let Ok(mut log) = self.log().lock() {
            let mut out = Vec::with_capacity(log.len());
            std::mem::swap(&mut *log, &mut out);
            return out;
        }
        Vec::new()
    }
}

impl<T> Default for TraceSink<T> {
    fn default() -> Self {
        Self::new()
    }
}
