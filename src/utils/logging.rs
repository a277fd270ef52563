//! Conditional logging macros gated on a module-level `ENABLE_LOGS` const.
//!
//! Modules that use them declare the flag themselves:
//! ```rust
//! const ENABLE_LOGS: bool = true;
//! ```
//! which lets a chatty module be silenced at compile time without touching
//! its call sites.

/// Logs at info level when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Logs at warn level when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Logs at error level when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
