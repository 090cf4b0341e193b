//! Error handling primitives for the ENV-COMBO driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A register transaction failed on the underlying bus.
    Io(E),
    /// The identity register was unreadable or did not hold the expected value.
    DeviceNotFound,
    /// Writing the configuration register failed during initialization.
    ConfigurationFailed(E),
    /// The requested channel has not finished converting; retry later.
    NotReady,
    /// The caller passed a channel or info selector outside the supported set.
    InvalidArgument,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Io(err)
    }
}
