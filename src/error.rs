use core::fmt::{Debug, Display, Formatter};
use embedded_hal::i2c::{ErrorType, I2c};

use crate::bus::Bus;

#[cfg(feature = "linux")]
use linux_embedded_hal::i2cdev::linux::LinuxI2CError;

/// Failures of the bus transaction layer.
///
/// `E` is the error type of the underlying `embedded_hal::i2c::I2c`
/// implementation.
#[derive(Debug, thiserror::Error)]
pub enum BusError<E = ()>
where
    E: Debug,
{
    /// The device node could not be opened.
    #[cfg(feature = "linux")]
    #[error("cannot open I2C device node {}: {source}", .path.display())]
    Open {
        path: std::path::PathBuf,
        source: LinuxI2CError,
    },

    /// The peripheral address could not be bound to the open device node.
    #[cfg(feature = "linux")]
    #[error("cannot bind peripheral address {address:#04x}: {source}")]
    Mode { address: u8, source: LinuxI2CError },

    /// A transfer carrying the register address (and payload, if any) failed.
    #[error("I2C write transaction failed: {0:?}")]
    TransactionWrite(E),

    /// The read phase of a transaction failed or came back short.
    #[error("I2C read transaction failed: {0:?}")]
    TransactionRead(E),

    /// The requested transfer is longer than a single transaction may carry.
    #[error("transfer of {len} bytes exceeds the {max}-byte limit")]
    TransferTooLong { len: usize, max: usize },

    /// The handle has already been closed.
    #[error("bus handle already closed")]
    Closed,
}

/// Failures of the sensor layer.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError<E = ()>
where
    E: Debug,
{
    #[error(transparent)]
    Bus(#[from] BusError<E>),

    /// `WHO_AM_I` did not report an MPU-6050.
    #[error("MPU-6050 not detected: WHO_AM_I returned {found:#04x}")]
    NotDetected { found: u8 },
}

/// Error for sensor operations on the bus implementation `I`.
pub type Error<I> = DeviceError<<I as ErrorType>::Error>;

/// Error during initialization of sensor. Wraps [`Error`] and hands the bus
/// back so it can be reused or closed.
pub struct InitError<I>
where
    I: I2c,
{
    pub bus: Bus<I>,
    pub error: Error<I>,
}

impl<I> InitError<I>
where
    I: I2c,
{
    /// Drops the bus and keeps only the error.
    pub fn into_error(self) -> Error<I> {
        self.error
    }
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.error, f)
    }
}

impl<I> Display for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "initialization failed: {}", self.error)
    }
}

impl<I> core::error::Error for InitError<I> where I: I2c {}
