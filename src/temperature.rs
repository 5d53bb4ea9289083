/// Temperature reading from the MPU-6050's internal temperature sensor.
///
/// Note: This measures the temperature of the die itself, not the ambient
/// room temperature. Readings typically run a few degrees above ambient due
/// to self-heating.
///
/// # Example
/// ```
/// # use mpu6050_linux::temperature::Temperature;
/// let temp = Temperature::new(3990);
/// assert!((temp.celsius() - 48.265).abs() < 0.01);
/// assert_eq!(temp.raw(), 3990);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Temperature {
    pub(crate) raw: i16,
}

impl Temperature {
    pub fn new(raw: i16) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> i16 {
        self.raw
    }

    /// Convert raw temperature to degrees Celsius
    /// Formula from datasheet: Temperature = (TEMP_OUT)/340 + 36.53
    pub fn celsius(&self) -> f32 {
        f32::from(self.raw) / 340.0 + 36.53
    }
}
