//! High-level ENV-COMBO device session.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::calibration::Calibration;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::EnvComboInterface;
use crate::lock::SessionRawMutex;
use crate::log::{debug, error, trace};
use crate::params::{Channel, ChannelInfo};
use crate::registers::{ConfigRegister, Register, Status, REG_WHO_AM_I, WHO_AM_I_EXPECTED};

/// One initialized ENV-COMBO sensor.
///
/// A session only exists once identity, calibration and configuration have
/// all succeeded. Every register sequence runs under a lock owned by the
/// session, so a shared `&EnvCombo` can serve readers on several threads or
/// cores while other sessions proceed independently. `M` selects the lock
/// flavour: `NoopRawMutex` when the session never leaves one execution
/// context, `CriticalSectionRawMutex` when interrupt handlers read it too.
pub struct EnvCombo<IFACE, M = SessionRawMutex> {
    bus: Mutex<M, RefCell<IFACE>>,
    calibration: Calibration,
}

impl<IFACE> EnvCombo<IFACE>
where
    IFACE: EnvComboInterface,
{
    /// Initializes a session using the default configuration.
    pub fn init(interface: IFACE) -> Result<Self, IFACE::Error> {
        Self::init_with_config(interface, Config::default())
    }
}

impl<I2C> EnvCombo<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: SevenBitAddress) -> Result<Self, I2C::Error> {
        Self::init(I2cInterface::new(i2c, address))
    }
}

impl<I2C, M> EnvCombo<I2cInterface<I2C>, M>
where
    M: RawMutex,
{
    /// Releases the session, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, M> EnvCombo<IFACE, M>
where
    M: RawMutex,
{
    // ==================================================================
    // == Ownership =====================================================
    // ==================================================================
    /// Consumes the session and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.bus.into_inner().into_inner()
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        self.bus.get_mut().get_mut()
    }

    /// Returns the calibration offsets loaded at initialization.
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }
}

impl<IFACE, M, CommE> EnvCombo<IFACE, M>
where
    IFACE: EnvComboInterface<Error = CommE>,
    M: RawMutex,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Verifies identity, loads calibration and writes `config`.
    ///
    /// Any failing step aborts the whole sequence; no session is returned
    /// and the interface is dropped.
    pub fn init_with_config(interface: IFACE, config: Config) -> Result<Self, CommE> {
        let bus = Mutex::new(RefCell::new(interface));
        let calibration = bus.lock(|bus| bring_up(&mut *bus.borrow_mut(), &config))?;

        Ok(Self { bus, calibration })
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads one calibrated raw sample.
    ///
    /// Returns [`Error::NotReady`] without touching the data registers when
    /// the channel's conversion has not completed.
    pub fn read_channel(&self, channel: Channel) -> Result<i32, CommE> {
        let spec = channel.spec();

        self.bus.lock(|bus| -> Result<i32, CommE> {
            let mut bus = bus.borrow_mut();

            let status = Status::from(bus.read_register(Status::ADDRESS)?);
            if !status.is_ready(spec) {
                trace!("{} not ready, STATUS={=u8:#x}", channel, u8::from(status));
                return Err(Error::NotReady);
            }

            let raw = spec.data.fetch(&mut *bus)?;
            Ok(self.calibration.apply(channel, raw))
        })
    }

    /// Presentation-layer entry point taking an unchecked channel index.
    ///
    /// Unknown channels and info selectors other than [`ChannelInfo::Raw`]
    /// are rejected before any bus traffic.
    pub fn read_raw(&self, channel: u8, info: ChannelInfo) -> Result<i32, CommE> {
        let channel = Channel::from_index(channel).ok_or(Error::InvalidArgument)?;
        if !channel.spec().supports(info) {
            return Err(Error::InvalidArgument);
        }

        self.read_channel(channel)
    }

    /// Returns a snapshot of the `STATUS` register.
    pub fn read_status(&self) -> Result<Status, CommE> {
        self.bus.lock(|bus| -> Result<Status, CommE> {
            let raw = bus.borrow_mut().read_register(Status::ADDRESS)?;
            Ok(Status::from(raw))
        })
    }
}

fn bring_up<IFACE>(interface: &mut IFACE, config: &Config) -> Result<Calibration, IFACE::Error>
where
    IFACE: EnvComboInterface,
{
    match interface.read_register(REG_WHO_AM_I) {
        Ok(WHO_AM_I_EXPECTED) => {}
        Ok(id) => {
            error!("WHO_AM_I mismatch: {=u8:#x}", id);
            return Err(Error::DeviceNotFound);
        }
        Err(_) => {
            error!("WHO_AM_I read failed");
            return Err(Error::DeviceNotFound);
        }
    }

    let calibration = Calibration::load(interface)?;
    debug!("calibration loaded: {}", calibration);

    let cfg: ConfigRegister = config.register();
    interface
        .write_register(ConfigRegister::ADDRESS, u8::from(cfg))
        .map_err(|err| {
            error!("CFG write failed");
            Error::ConfigurationFailed(err)
        })?;

    Ok(calibration)
}
