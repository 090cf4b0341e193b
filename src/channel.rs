//! Fixed channel lookup table.
//!
//! Each channel maps to the registers holding its sample, the `STATUS` bit
//! gating them and the metadata a presentation layer publishes for it.

use crate::interface::EnvComboInterface;
use crate::params::{Channel, ChannelInfo};
use crate::registers::{
    combine_word,
    REG_HUM_OUT,
    REG_TEMP_LSB,
    REG_TEMP_MSB,
    STATUS_HUM_RDY_MASK,
    STATUS_TEMP_RDY_MASK,
};

/// Registers a channel sample is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRegisters {
    /// Two-register word, high byte read first.
    Word { msb: u8, lsb: u8 },
    /// Single unsigned byte register.
    Byte(u8),
}

impl DataRegisters {
    /// Reads the sample registers in order and assembles the raw value.
    pub fn fetch<IFACE>(&self, interface: &mut IFACE) -> core::result::Result<i32, IFACE::Error>
    where
        IFACE: EnvComboInterface,
    {
        match *self {
            Self::Word { msb, lsb } => {
                let high = interface.read_register(msb)?;
                let low = interface.read_register(lsb)?;
                Ok(i32::from(combine_word(high, low)))
            }
            Self::Byte(register) => Ok(i32::from(interface.read_register(register)?)),
        }
    }
}

/// Sample storage layout advertised to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanType {
    /// Whether values are two's complement.
    pub signed: bool,
    /// Significant bits per value.
    pub realbits: u8,
    /// Bits of storage per value.
    pub storagebits: u8,
}

/// Everything the driver knows about one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelSpec {
    /// Channel this entry describes.
    pub channel: Channel,
    /// Attribute name used by presentation layers.
    pub name: &'static str,
    /// Sample registers.
    pub data: DataRegisters,
    /// `STATUS` bit signalling the sample is ready.
    pub ready_mask: u8,
    /// Advertised sample layout.
    pub scan_type: ScanType,
    /// Info selectors served, as a union of [`ChannelInfo::mask`] bits.
    pub info_mask: u8,
}

impl ChannelSpec {
    /// Returns whether this channel serves the given info selector.
    pub const fn supports(&self, info: ChannelInfo) -> bool {
        self.info_mask & info.mask() != 0
    }
}

const SCAN_TYPE: ScanType = ScanType {
    signed: true,
    realbits: 16,
    storagebits: 16,
};

const RAW_ONLY: u8 = ChannelInfo::Raw.mask();

/// Channel table, indexed by [`Channel::index`].
pub static CHANNELS: [ChannelSpec; 2] = [
    ChannelSpec {
        channel: Channel::Temperature,
        name: "temp",
        data: DataRegisters::Word {
            msb: REG_TEMP_MSB,
            lsb: REG_TEMP_LSB,
        },
        ready_mask: STATUS_TEMP_RDY_MASK,
        scan_type: SCAN_TYPE,
        info_mask: RAW_ONLY,
    },
    ChannelSpec {
        channel: Channel::Humidity,
        name: "humidityrelative",
        data: DataRegisters::Byte(REG_HUM_OUT),
        ready_mask: STATUS_HUM_RDY_MASK,
        scan_type: SCAN_TYPE,
        info_mask: RAW_ONLY,
    },
];

impl Channel {
    /// Returns the table entry for this channel.
    pub fn spec(self) -> &'static ChannelSpec {
        &CHANNELS[self.index() as usize]
    }
}
