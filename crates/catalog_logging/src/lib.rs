#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! Library crates log through the `catalog_*` macros so the binary decides
//! where records go. Tests install a terminal logger with
//! [`initialize_for_tests`].

use std::cell::Cell;

thread_local! {
    /// Number of messages dispatched through the update loop on this thread.
    static DISPATCH_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Advances the dispatch sequence for the current thread and returns the new value.
///
/// The app's update loop calls this once per message so log lines can be
/// correlated with the message that produced them.
pub fn next_dispatch_seq() -> u64 {
    DISPATCH_SEQ.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Returns the dispatch sequence for the current thread, 0 before the first message.
pub fn dispatch_seq() -> u64 {
    DISPATCH_SEQ.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
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

    // Another test in the same binary may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_seq_counts_per_thread() {
        let before = dispatch_seq();
        assert_eq!(next_dispatch_seq(), before + 1);
        assert_eq!(next_dispatch_seq(), before + 2);
        assert_eq!(dispatch_seq(), before + 2);

        let other = std::thread::spawn(dispatch_seq).join().unwrap();
        assert_eq!(other, 0);
    }
}
