#![deny(missing_docs)]
//! Shared logging utilities for the sweeper workspace.
//!
//! This crate provides the `sweep_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the scan tick of the thread that logs it, so removal lines
//! can be grouped by the scan that produced them.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the current scan tick count.
    static SCAN_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the scan tick count for the current thread.
/// The filter loop calls this once per scan.
pub fn set_scan_tick(tick: u64) {
    SCAN_TICK.with(|v| v.set(tick));
}

/// Retrieves the scan tick count for the current thread.
/// Returns 0 before the first scan.
pub fn scan_tick() -> u64 {
    SCAN_TICK.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current scan tick.
#[macro_export]
macro_rules! sweep_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[tick {}] {}", $crate::scan_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current scan tick.
#[macro_export]
macro_rules! sweep_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[tick {}] {}", $crate::scan_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current scan tick.
#[macro_export]
macro_rules! sweep_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[tick {}] {}", $crate::scan_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current scan tick.
#[macro_export]
macro_rules! sweep_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[tick {}] {}", $crate::scan_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current scan tick.
#[macro_export]
macro_rules! sweep_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[tick {}] {}", $crate::scan_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have won the race to install the logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
