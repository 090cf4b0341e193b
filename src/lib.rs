#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
mod log;

pub mod calibration;
pub mod channel;
pub mod config;
pub mod device;
pub mod interface;
pub mod lock;
pub mod params;
pub mod registers;

pub use crate::calibration::Calibration;
pub use crate::device::EnvCombo;
pub use crate::error::{Error, Result};
pub use crate::lock::SessionRawMutex;
pub use crate::params::{Channel, ChannelInfo};

/// Driver name reported to host presentation layers.
pub const DRIVER_NAME: &str = "env-combo";

/// Device-tree compatible string matched by host enumeration.
pub const COMPATIBLE: &str = "env,combo";
