#![forbid(unsafe_code)]

//! Ambient runtime support for the FFT size advisor.
//!
//! ## Module layout
//!
//! | Module  | Contents                                                     |
//! |---------|--------------------------------------------------------------|
//! | `trace` | [`TraceSink`] process-wide JSON-line trace log, operation ids |
//! | `log`   | [`TestLogEntry`] structured test log lines                    |

pub mod log;
pub mod trace;

pub use log::{TestLogEntry, TestLogLevel, TestResult};
pub use trace::{TraceSink, next_operation_id, now_unix_ms};
