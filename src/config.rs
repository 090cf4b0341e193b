//! Configuration primitives for the ENV-COMBO driver.

use crate::registers::ConfigRegister;

/// User-facing configuration written to the `CFG` register at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Enables temperature conversions.
    pub temperature_enable: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Renders the configuration as a `CFG` register value.
    pub fn register(&self) -> ConfigRegister {
        ConfigRegister::new().with_temperature_enable(self.temperature_enable)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Enables or disables temperature conversions.
    pub fn temperature_enable(mut self, enable: bool) -> Self {
        self.config.temperature_enable = enable;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature_enable: true,
        }
    }
}
