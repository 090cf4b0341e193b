//! Crate-internal logging macros.
//!
//! Forward to `defmt` when the `defmt` feature is enabled and expand to nothing
//! otherwise, so call sites never need their own `cfg` guards.

#[cfg(feature = "defmt")]
mod backend {
    macro_rules! __trace {
        ($($arg:tt)*) => {{
            defmt::trace!($($arg)*);
        }};
    }

    macro_rules! __debug {
        ($($arg:tt)*) => {{
            defmt::debug!($($arg)*);
        }};
    }

    macro_rules! __error {
        ($($arg:tt)*) => {{
            defmt::error!($($arg)*);
        }};
    }

    pub(crate) use __debug as debug;
    pub(crate) use __error as error;
    pub(crate) use __trace as trace;
}

#[cfg(not(feature = "defmt"))]
mod backend {
    macro_rules! __stub {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
        }};
    }

    pub(crate) use __stub as debug;
    pub(crate) use __stub as error;
    pub(crate) use __stub as trace;
}

pub(crate) use backend::*;
