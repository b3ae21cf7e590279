#![deny(missing_docs)]
//! Shared logging utilities for the program directory workspace.
//!
//! This crate provides the `directory_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. The macros
//! log under the [`TARGET`] target so the directory pipeline can be filtered
//! separately from HTTP client noise.

use std::sync::Once;

#[doc(hidden)]
pub use log;

/// Log target shared by every `directory_*` macro.
pub const TARGET: &str = "directory";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! directory_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! directory_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! directory_info {
    ($($arg:tt)*) => {{
        $crate::log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! directory_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! directory_error {
    ($($arg:tt)*) => {{
        $crate::log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test: the logger is installed at most once per
/// process, and an already-installed logger is left in place.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_without_direct_log_dependency() {
        super::initialize_for_tests();
        super::initialize_for_tests();
        directory_debug!("rows fetched: {}", 3);
        directory_info!("loaded {count} programs", count = 3);
        directory_trace!("trace");
        directory_warn!("warn");
        directory_error!("error");
    }
}
