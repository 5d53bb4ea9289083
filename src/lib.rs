#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod accel;
pub mod address;
pub mod bus;
pub mod clock_source;
pub mod config;
pub mod error;
pub mod gyro;
#[cfg(feature = "linux")]
pub mod linux;
#[cfg(test)]
mod mock;
pub mod registers;
pub mod sample;
pub mod sensor;
pub mod temperature;

pub use address::{Address, BusSelector};
pub use bus::Bus;
pub use config::SensorConfig;
pub use error::{BusError, DeviceError, InitError};
pub use sample::{PhysicalSample, RawSample};
pub use sensor::{Mpu6050, PowerState};
