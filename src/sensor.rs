use embedded_hal::i2c::I2c;
use log::{debug, info, warn};

use crate::{
    accel::{Accel, AccelFullScale},
    bus::Bus,
    clock_source::ClockSource,
    config::SensorConfig,
    error::{BusError, DeviceError, Error, InitError},
    gyro::{Gyro, GyroFullScale},
    registers::{
        Register, BURST_LEN, FS_SEL_MASK, FS_SEL_SHIFT, PWR1_CLKSEL_MASK, PWR1_SLEEP_BIT,
        WHO_AM_I_VALUE,
    },
    sample::{PhysicalSample, RawSample},
    temperature::Temperature,
};

/// Power state of a configured sensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum PowerState {
    Active,
    Sleeping,
}

/// InvenSense MPU-6050 Driver
///
/// A value of this type is always a configured sensor: construction runs
/// [`initialize`](Self::initialize) and hands the bus back on failure.
/// The cached scale divisors only change once the matching register write
/// has gone through.
pub struct Mpu6050<I>
where
    I: I2c,
{
    bus: Bus<I>,
    clock_source: ClockSource,
    gyro_range: GyroFullScale,
    accel_range: AccelFullScale,
    power: PowerState,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Construct a new driver and bring the sensor up with the default
    /// configuration.
    pub fn new(bus: Bus<I>) -> Result<Self, InitError<I>> {
        Self::with_config(bus, &SensorConfig::default())
    }

    /// Construct a new driver and bring the sensor up with `config`.
    ///
    /// `config.bus` and `config.address` are not consulted here; the bus is
    /// already open.
    pub fn with_config(bus: Bus<I>, config: &SensorConfig) -> Result<Self, InitError<I>> {
        // power-on register state
        let mut sensor = Self {
            bus,
            clock_source: ClockSource::Internal,
            gyro_range: GyroFullScale::Deg250,
            accel_range: AccelFullScale::G2,
            power: PowerState::Sleeping,
        };

        if let Err(error) = sensor.configure(config) {
            Err(InitError {
                error,
                bus: sensor.bus,
            })
        } else {
            Ok(sensor)
        }
    }

    /// Returns the bus handle, consuming this driver.
    pub fn release(self) -> Bus<I> {
        self.bus
    }

    /// Check the identity register, then select the X-gyro PLL, the most
    /// sensitive ranges and wake the sensor up.
    ///
    /// Stops at the first failing step.
    pub fn initialize(&mut self) -> Result<(), Error<I>> {
        self.configure(&SensorConfig::default())
    }

    fn configure(&mut self, config: &SensorConfig) -> Result<(), Error<I>> {
        let found = self.who_am_i()?;
        if found != WHO_AM_I_VALUE {
            warn!(
                "no MPU-6050 at {:#04x}: WHO_AM_I = {:#04x}",
                u8::from(self.bus.address()),
                found
            );
            return Err(DeviceError::NotDetected { found });
        }
        info!("MPU-6050 detected at {:#04x}", u8::from(self.bus.address()));

        self.set_clock_source(config.clock_source)?;
        self.set_gyro_full_scale(config.gyro_range)?;
        self.set_accel_full_scale(config.accel_range)?;
        self.set_sleep_enabled(config.sleep)?;
        Ok(())
    }

    /// Raw value of the identity register.
    pub fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        Ok(self.bus.read_register(Register::WhoAmI)?)
    }

    /// Pick the clock-source. Accepts a [`ClockSource`] or a raw CLKSEL code;
    /// only the low three bits of a code are used.
    ///
    /// The CLKSEL field is cleared before the new source is merged in, so
    /// switching sources never leaves stale bits behind.
    pub fn set_clock_source(
        &mut self,
        clock_source: impl Into<ClockSource>,
    ) -> Result<(), Error<I>> {
        let clock_source = clock_source.into();
        let mut value = self.bus.read_register(Register::PwrMgmt1)?;
        value &= !PWR1_CLKSEL_MASK;
        value |= clock_source.bits();
        self.bus.write_register(Register::PwrMgmt1, &[value])?;
        self.clock_source = clock_source;
        debug!("clock source set to {:?}", clock_source);
        Ok(())
    }

    /// Read back the clock source from the device.
    pub fn get_clock_source(&mut self) -> Result<ClockSource, Error<I>> {
        let value = self.bus.read_register(Register::PwrMgmt1)?;
        Ok(ClockSource::from(value))
    }

    /// Last clock source successfully written.
    pub fn clock_source(&self) -> ClockSource {
        self.clock_source
    }

    /// Set the gyroscope range. Accepts a [`GyroFullScale`] or a raw FS_SEL
    /// code; unknown codes select ±250°/s.
    pub fn set_gyro_full_scale(
        &mut self,
        scale: impl Into<GyroFullScale>,
    ) -> Result<(), Error<I>> {
        let scale = scale.into();
        self.write_fs_sel(Register::GyroConfig, scale.field())?;
        self.gyro_range = scale;
        debug!("gyro range set to {:?}", scale);
        Ok(())
    }

    /// Set the accelerometer range. Accepts an [`AccelFullScale`] or a raw
    /// AFS_SEL code; unknown codes select ±2g.
    pub fn set_accel_full_scale(
        &mut self,
        scale: impl Into<AccelFullScale>,
    ) -> Result<(), Error<I>> {
        let scale = scale.into();
        self.write_fs_sel(Register::AccelConfig, scale.field())?;
        self.accel_range = scale;
        debug!("accel range set to {:?}", scale);
        Ok(())
    }

    fn write_fs_sel(&mut self, reg: Register, field: u8) -> Result<(), Error<I>> {
        let mut value = self.bus.read_register(reg)?;
        value &= !FS_SEL_MASK;
        value |= field & FS_SEL_MASK;
        self.bus.write_register(reg, &[value])?;
        Ok(())
    }

    /// Read back the gyroscope range from the device.
    pub fn get_gyro_full_scale(&mut self) -> Result<GyroFullScale, Error<I>> {
        let value = self.bus.read_register(Register::GyroConfig)?;
        Ok(GyroFullScale::from((value & FS_SEL_MASK) >> FS_SEL_SHIFT))
    }

    /// Read back the accelerometer range from the device.
    pub fn get_accel_full_scale(&mut self) -> Result<AccelFullScale, Error<I>> {
        let value = self.bus.read_register(Register::AccelConfig)?;
        Ok(AccelFullScale::from((value & FS_SEL_MASK) >> FS_SEL_SHIFT))
    }

    /// Gyroscope range in effect for conversions.
    pub fn gyro_full_scale(&self) -> GyroFullScale {
        self.gyro_range
    }

    /// Accelerometer range in effect for conversions.
    pub fn accel_full_scale(&self) -> AccelFullScale {
        self.accel_range
    }

    /// Divisor in LSB per °/s used for angular rates.
    pub fn gyro_scale(&self) -> f32 {
        self.gyro_range.scale()
    }

    /// Divisor in LSB per g used for accelerations.
    pub fn accel_scale(&self) -> f32 {
        self.accel_range.scale()
    }

    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Whether the SLEEP bit is set on the device.
    pub fn get_sleep_enabled(&mut self) -> Result<bool, Error<I>> {
        let value = self.bus.read_register(Register::PwrMgmt1)?;
        let bit = 1 << PWR1_SLEEP_BIT;
        Ok(value & bit == bit)
    }

    pub fn set_sleep_enabled(&mut self, enable: bool) -> Result<(), Error<I>> {
        let mut value = self.bus.read_register(Register::PwrMgmt1)?;
        if enable {
            value |= 1 << PWR1_SLEEP_BIT;
        } else {
            value &= !(1 << PWR1_SLEEP_BIT);
        }
        self.bus.write_register(Register::PwrMgmt1, &[value])?;
        self.power = if enable {
            PowerState::Sleeping
        } else {
            PowerState::Active
        };
        Ok(())
    }

    pub fn disable_sleep(&mut self) -> Result<(), Error<I>> {
        self.set_sleep_enabled(false)
    }

    /// One burst read of all fourteen output registers.
    pub fn read_raw_sample(&mut self) -> Result<RawSample, BusError<I::Error>> {
        let bytes = self.bus.read_array::<BURST_LEN>(Register::AccelX_H)?;
        Ok(RawSample::from_bytes(bytes))
    }

    /// One burst read converted with the current ranges: g, °C and °/s.
    pub fn read_physical_sample(&mut self) -> Result<PhysicalSample, Error<I>> {
        let raw = self.read_raw_sample()?;
        Ok(raw.to_physical(self.accel_scale(), self.gyro_scale()))
    }

    pub fn accel(&mut self) -> Result<Accel, Error<I>> {
        let data = self.bus.read_array::<6>(Register::AccelX_H)?;
        Ok(Accel::from_bytes(data))
    }

    pub fn gyro(&mut self) -> Result<Gyro, Error<I>> {
        let data = self.bus.read_array::<6>(Register::GyroX_H)?;
        Ok(Gyro::from_bytes(data))
    }

    pub fn temperature(&mut self) -> Result<Temperature, Error<I>> {
        let data = self.bus.read_array::<2>(Register::TempOut_H)?;
        Ok(Temperature::new(i16::from_be_bytes(data)))
    }
}
