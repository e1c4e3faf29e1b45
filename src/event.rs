//! Log callback hook.
//!
//! The library never links a logging framework. Hosts that want diagnostics
//! register a callback and forward messages to whatever sink they use.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Emit a log message to the registered callback, if any.
///
/// A callback that panicked earlier does not silence later messages.
pub fn emit_log(level: LogLevel, message: &str) {
    let guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = guard.as_ref() {
        callback(level, message);
    }
}
