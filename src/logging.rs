//! Logging macros for the scheduling pipeline with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Verbosity levels:
//! - 0: SILENT (only errors)
//! - 1: STAGES (pipeline stage summaries)
//! - 2: EVENTS (per-event scheduling decisions)
//! - 3: TRACE (full algorithm internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_STAGES: u8 = 1;
pub const VERBOSITY_EVENTS: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at STAGES level (verbosity >= 1).
///
/// Used for: graph construction summaries, pass completion, critical set size.
#[macro_export]
macro_rules! log_stages {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STAGES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at EVENTS level (verbosity >= 2).
///
/// Used for: per-event EET/LET values, determining predecessors.
#[macro_export]
macro_rules! log_events {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_EVENTS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
///
/// Used for: classification details and other algorithm internals.
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!($($arg)*);
        }
    };
}
