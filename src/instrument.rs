//! Optional `tracing` instrumentation.
//!
//! With the `tracing` feature disabled these macros expand to nothing.

macro_rules! trace_event {
    ($($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($argument)+);
    };
}

macro_rules! debug_event {
    ($($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($argument)+);
    };
}

pub(crate) use {debug_event, trace_event};
