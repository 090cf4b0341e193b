//! Strongly typed parameter enumerations for the ENV-COMBO driver.
//!
//! Channels and info selectors arrive from presentation layers as plain
//! integers; these types are the checked form the driver works with.
//!
//! # Examples
//!
//! ```rust
//! use env_combo::params::{Channel, ChannelInfo};
//!
//! assert_eq!(Channel::from_index(0), Some(Channel::Temperature));
//! assert_eq!(Channel::from_index(1), Some(Channel::Humidity));
//! assert_eq!(Channel::from_index(2), None);
//! assert_eq!(ChannelInfo::default(), ChannelInfo::Raw);
//! assert_eq!(ChannelInfo::Raw.mask() | ChannelInfo::Scale.mask(), 0b011);
//! ```

/// Measurable quantities exposed by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// Temperature channel (index 0).
    Temperature = 0,
    /// Relative humidity channel (index 1).
    Humidity = 1,
}

impl Channel {
    /// Every channel, in index order.
    pub const ALL: [Channel; 2] = [Channel::Temperature, Channel::Humidity];

    /// Maps a presentation-layer channel index to a channel.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Temperature),
            1 => Some(Self::Humidity),
            _ => None,
        }
    }

    /// Returns the presentation-layer index of this channel.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Kind of value a caller asks a channel for.
///
/// The sensor only serves raw values; conversion to degrees Celsius or
/// percent relative humidity belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelInfo {
    /// Calibrated raw integer.
    #[default]
    Raw,
    /// Scale factor to physical units.
    Scale,
    /// Offset to physical units.
    Offset,
}

impl ChannelInfo {
    /// Bit identifying this selector in a channel's info mask.
    pub const fn mask(self) -> u8 {
        match self {
            Self::Raw => 1 << 0,
            Self::Scale => 1 << 1,
            Self::Offset => 1 << 2,
        }
    }
}
