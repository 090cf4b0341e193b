//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::{I2c, SevenBitAddress};

use super::EnvComboInterface;

/// I2C-based interface implementation for the ENV-COMBO driver.
///
/// Register access follows SMBus byte-data framing: a read is a one-byte
/// register write followed by a repeated-start one-byte read, a write is the
/// register address and value in one two-byte write.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Returns the device's bus address.
    pub const fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> EnvComboInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, core::slice::from_ref(&register), &mut value)?;
        Ok(value[0])
    }
}
