//! Log line formatting
//!
//! Lines look like `[2024-01-01 12:00:00] INFO: message {"key":"value"}`.
//! The JSON context keeps insertion order and is omitted when empty.

use chrono::{Local, NaiveDateTime};
use serde_json::{Map, Value};

use crate::core::models::LogLevel;

/// Timestamp layout used in log lines and probe values
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `log` target used for probe records
pub const PROBE_TARGET: &str = "diagpage::probe";

/// Structured context attached to a log line
pub type LogContext = Map<String, Value>;

/// Build a context from key/value pairs, keeping their order
pub fn context<I, K, V>(pairs: I) -> LogContext
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Format a log line stamped with the current local time
#[must_use]
pub fn format_line(level: LogLevel, message: &str, context: &LogContext) -> String {
    format_line_at(Local::now().naive_local(), level, message, context)
}

/// Format a log line with an explicit timestamp
#[must_use]
pub fn format_line_at(
    timestamp: NaiveDateTime,
    level: LogLevel,
    message: &str,
    context: &LogContext,
) -> String {
    let mut line = format!("[{}] {level}: {message}", timestamp.format(TIMESTAMP_FORMAT));
    if !context.is_empty() {
        line.push(' ');
        line.push_str(&serde_json::to_string(context).unwrap_or_default());
    }
    line
}

/// Format a line, emit it through the `log` facade and return it
pub fn record(level: LogLevel, message: &str, context: &LogContext) -> String {
    let line = format_line(level, message, context);
    log::log!(target: PROBE_TARGET, log::Level::from(level), "{line}");
    line
}
