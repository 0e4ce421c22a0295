//! Logging facade.
//!
//! The macros forward to [`defmt`](https://docs.rs/defmt) when the `defmt`
//! feature is enabled and expand to nothing otherwise, so the dispatcher can
//! log on every line without costing anything in builds that do not want it.
//! Format strings therefore use defmt syntax.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! warning {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

pub(crate) use {debug, trace, warning};
