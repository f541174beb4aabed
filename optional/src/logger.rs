// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

// Scanning is the only place this crate logs. Without the `logger` feature
// the macros below compile to nothing, so callers that never enable it pay
// no formatting cost on the scan path.

#[cfg(feature = "logger")]
pub use log::{debug, trace};

/// Returns true if scan tracing would be emitted
#[cfg(feature = "logger")]
#[must_use]
pub fn trace_enabled() -> bool {
    log::log_enabled!(target: "optional::scan", log::Level::Trace)
}

#[cfg(not(feature = "logger"))]
pub use noop_logger::{debug, trace, trace_enabled};

#[cfg(not(feature = "logger"))]
mod noop_logger {
    #[macro_export]
    #[doc(hidden)]
    /// Stands in for the `log` macros when the logger feature is disabled
    macro_rules! noop_log {
        (target: $target:expr, $($arg:tt)+) => {
            $crate::noop_log!($($arg)+)
        };
        ($($arg:tt)+) => {
            if $crate::logger::trace_enabled() {
                // never taken; keeps the arguments "used"
                let _ = format!($($arg)+);
            }
        };
    }

    pub use crate::noop_log as debug;
    pub use crate::noop_log as trace;

    /// `trace_enabled` for a noop logger is always false
    #[inline]
    #[must_use]
    pub const fn trace_enabled() -> bool {
        false
    }
}
