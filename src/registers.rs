//! Register map definitions for the ENV-COMBO sensor.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::channel::ChannelSpec;

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x00;
/// Register address of `TEMP_MSB`.
pub const REG_TEMP_MSB: u8 = 0x01;
/// Register address of `TEMP_LSB`.
pub const REG_TEMP_LSB: u8 = 0x02;
/// Register address of `HUM_OUT`.
pub const REG_HUM_OUT: u8 = 0x03;
/// Register address of `CFG`.
pub const REG_CFG: u8 = 0x06;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x0C;
/// Register address of `CALIB_TEMP_MSB`.
pub const REG_CALIB_TEMP_MSB: u8 = 0x0D;
/// Register address of `CALIB_TEMP_LSB`.
pub const REG_CALIB_TEMP_LSB: u8 = 0x0E;
/// Register address of `CALIB_HUM`.
pub const REG_CALIB_HUM: u8 = 0x0F;

/// Value reported by `WHO_AM_I` on a genuine device.
pub const WHO_AM_I_EXPECTED: u8 = 0xEB;

/// `CFG` temperature-enable bit.
pub const CFG_TEMP_EN: u8 = 0x40;
/// Configuration written during initialization unless overridden.
pub const CFG_DEFAULT: u8 = CFG_TEMP_EN;

/// `STATUS` bit signalling a completed temperature conversion.
pub const STATUS_TEMP_RDY_MASK: u8 = 0x02;
/// `STATUS` bit signalling a completed humidity conversion.
pub const STATUS_HUM_RDY_MASK: u8 = 0x04;

/// Register value types that live at a fixed address.
pub trait Register {
    /// Register address on the device.
    const ADDRESS: u8;
}

/// Bitfield representation of the `STATUS` register (address `0x0C`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    #[skip]
    __: B1,
    // Temperature data ready (bit 1).
    pub temperature_ready: bool,
    // Humidity data ready (bit 2).
    pub humidity_ready: bool,
    #[skip]
    __: B5,
}

impl Status {
    /// Tests the readiness bit of the given channel.
    pub fn is_ready(self, spec: &ChannelSpec) -> bool {
        u8::from(self) & spec.ready_mask != 0
    }
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CFG` register (address `0x06`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigRegister {
    #[skip]
    __: B6,
    // Temperature conversion enable (bit 6).
    pub temperature_enable: bool,
    #[skip]
    __: B1,
}

impl From<u8> for ConfigRegister {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ConfigRegister> for u8 {
    fn from(value: ConfigRegister) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Status {
    const ADDRESS: u8 = REG_STATUS;
}

impl Register for ConfigRegister {
    const ADDRESS: u8 = REG_CFG;
}

/// Combines a high and low register byte into an unsigned 16-bit word.
///
/// Data words are unsigned (`0..=65535`); only the calibration offset
/// carries a sign.
#[inline]
pub fn combine_word(msb: u8, lsb: u8) -> u16 {
    u16::from_be_bytes([msb, lsb])
}
