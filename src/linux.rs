//! Linux `/dev/i2c-N` transport
//!
//! Opens an I2C adapter through `linux-embedded-hal` and binds the
//! peripheral address up front, so a missing adapter and a refused address
//! are reported separately instead of surfacing on the first transfer.

use embedded_hal::i2c::ErrorType;
use linux_embedded_hal::I2cdev;
use log::{debug, warn};

use crate::{
    address::{Address, BusSelector},
    bus::Bus,
    config::SensorConfig,
    error::{BusError, Error},
    sensor::Mpu6050,
};

/// Error type of transfers on a Linux device node.
pub type LinuxBusError = BusError<<I2cdev as ErrorType>::Error>;

impl Bus<I2cdev> {
    /// Open `/dev/i2c-<selector>` and bind it to `address`.
    ///
    /// The address binding only probes the node up front. `I2cdev` reopens the
    /// node on its first transfer, so a binding failure at that point is
    /// reported as [`BusError::TransactionWrite`].
    pub fn open(selector: BusSelector, address: Address) -> Result<Self, LinuxBusError> {
        let path = selector.device_path();
        if selector.is_reserved() {
            warn!(
                "{} is reserved for the HAT ID EEPROM on Raspberry Pi boards; sensors belong on /dev/i2c-1",
                path.display()
            );
        }

        let mut i2c = match I2cdev::new(&path) {
            Ok(i2c) => i2c,
            Err(source) => return Err(BusError::Open { path, source }),
        };

        if let Err(source) = i2c.set_slave_address(u16::from(address.0)) {
            return Err(BusError::Mode {
                address: address.0,
                source,
            });
        }

        debug!("opened {} for {:#04x}", path.display(), address.0);
        Ok(Bus::new(i2c, address))
    }
}

impl Mpu6050<I2cdev> {
    /// Open the adapter and address named in `config` and bring the sensor
    /// up with it. On failure the device node is closed again.
    pub fn open(config: &SensorConfig) -> Result<Self, Error<I2cdev>> {
        let bus = Bus::open(config.bus, config.address)?;
        Mpu6050::with_config(bus, config).map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeviceError;

    #[test]
    fn missing_device_node_is_an_open_error() {
        // no system has two hundred and fifty I2C adapters
        let err = match Bus::open(BusSelector(250), Address::default()) {
            Ok(_) => return,
            Err(e) => e,
        };
        assert!(matches!(err, BusError::Open { .. }));
    }

    #[test]
    fn sensor_open_reports_bus_failure() {
        let config = SensorConfig::new().with_bus(251u8);
        let Err(err) = Mpu6050::open(&config) else {
            return;
        };
        assert!(matches!(err, DeviceError::Bus(BusError::Open { .. })));
    }
}
