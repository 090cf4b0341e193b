//! Factory calibration offsets.

use crate::error::Result;
use crate::interface::EnvComboInterface;
use crate::params::Channel;
use crate::registers::{REG_CALIB_HUM, REG_CALIB_TEMP_LSB, REG_CALIB_TEMP_MSB};

/// Per-device calibration offsets, loaded once at initialization.
///
/// Offsets are added to raw samples as-is, with no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    temperature: i16,
    humidity: i8,
}

impl Calibration {
    /// Builds the offsets from the three calibration register bytes.
    pub const fn from_registers(temp_msb: u8, temp_lsb: u8, humidity: u8) -> Self {
        Self {
            temperature: i16::from_be_bytes([temp_msb, temp_lsb]),
            humidity: humidity as i8,
        }
    }

    /// Reads `CALIB_TEMP_MSB`, `CALIB_TEMP_LSB` and `CALIB_HUM`, in that order.
    pub fn load<IFACE>(interface: &mut IFACE) -> Result<Self, IFACE::Error>
    where
        IFACE: EnvComboInterface,
    {
        let msb = interface.read_register(REG_CALIB_TEMP_MSB)?;
        let lsb = interface.read_register(REG_CALIB_TEMP_LSB)?;
        let humidity = interface.read_register(REG_CALIB_HUM)?;

        Ok(Self::from_registers(msb, lsb, humidity))
    }

    /// Temperature offset.
    pub const fn temperature(&self) -> i16 {
        self.temperature
    }

    /// Humidity offset.
    pub const fn humidity(&self) -> i8 {
        self.humidity
    }

    /// Offset applied to samples of `channel`.
    pub const fn offset(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Temperature => self.temperature as i32,
            Channel::Humidity => self.humidity as i32,
        }
    }

    /// Adds the channel's offset to a raw sample.
    #[inline]
    pub const fn apply(&self, channel: Channel, raw: i32) -> i32 {
        raw + self.offset(channel)
    }
}
