//! Logging shims.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it they
//! expand to nothing so the engines carry no logging cost.

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
