//! Sensor start-up configuration
//!
//! [`SensorConfig`] gathers everything applied when a sensor is brought up:
//! where it lives on the bus, which clock drives it, both full-scale ranges
//! and whether it should start asleep. The default is the usual bring-up:
//! X-gyro PLL, ±250°/s, ±2g, awake, address 0x68 on `/dev/i2c-1`.

use crate::{
    accel::AccelFullScale,
    address::{Address, BusSelector},
    clock_source::ClockSource,
    gyro::GyroFullScale,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    /// I2C adapter, only used when opening a Linux device node
    pub bus: BusSelector,
    pub address: Address,
    pub clock_source: ClockSource,
    pub gyro_range: GyroFullScale,
    pub accel_range: AccelFullScale,
    /// Leave the sensor in sleep mode after configuring it
    pub sleep: bool,
}

impl SensorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bus(mut self, bus: impl Into<BusSelector>) -> Self {
        self.bus = bus.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<Address>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_clock_source(mut self, clock_source: impl Into<ClockSource>) -> Self {
        self.clock_source = clock_source.into();
        self
    }

    pub fn with_gyro_range(mut self, range: impl Into<GyroFullScale>) -> Self {
        self.gyro_range = range.into();
        self
    }

    pub fn with_accel_range(mut self, range: impl Into<AccelFullScale>) -> Self {
        self.accel_range = range.into();
        self
    }

    pub fn with_sleep(mut self, sleep: bool) -> Self {
        self.sleep = sleep;
        self
    }
}
