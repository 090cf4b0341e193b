//! Bus interface abstraction for the ENV-COMBO driver.

pub mod i2c;

/// Abstraction over the single-register bus access required by the driver.
///
/// Both calls are blocking and address exactly one 8-bit register.
pub trait EnvComboInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}
