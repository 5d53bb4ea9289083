//! MPU6050 Clock Source Configuration
//!
//! The MPU6050 can use different clock sources for timing:
//! - Internal oscillator (power-up default, less accurate)
//! - Gyroscope reference (more stable, recommended)
//! - External crystals (highest accuracy)
//!
//! The selection lives in the CLKSEL field, bits 2:0 of `PWR_MGMT_1`.

use crate::registers::PWR1_CLKSEL_MASK;

/// Available clock sources for the MPU6050.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockSource {
    /// Internal 8MHz oscillator
    Internal = 0,

    /// PLL with X-axis gyroscope reference
    /// - Recommended for general use
    /// - Used by [`crate::sensor::Mpu6050::initialize`]
    #[default]
    Xgyro = 1,

    /// PLL with Y-axis gyroscope reference
    Ygyro = 2,

    /// PLL with Z-axis gyroscope reference
    Zgyro = 3,

    /// PLL with external 32.768kHz reference
    External32768 = 4,

    /// PLL with external 19.2MHz reference
    External19200 = 5,

    /// Reserved by the datasheet; only ever seen when reading back
    Reserved = 6,

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {
    /// CLKSEL bits for this source.
    pub const fn bits(self) -> u8 {
        self as u8 & PWR1_CLKSEL_MASK
    }
}

impl From<u8> for ClockSource {
    /// Decodes the low three bits; upper bits are ignored.
    fn from(value: u8) -> Self {
        match value & PWR1_CLKSEL_MASK {
            0 => Self::Internal,
            1 => Self::Xgyro,
            2 => Self::Ygyro,
            3 => Self::Zgyro,
            4 => Self::External32768,
            5 => Self::External19200,
            6 => Self::Reserved,
            _ => Self::Stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_only_clksel_bits() {
        assert_eq!(ClockSource::from(0b0100_0001), ClockSource::Xgyro);
        assert_eq!(ClockSource::from(0xFF), ClockSource::Stop);
        assert_eq!(ClockSource::from(0x00), ClockSource::Internal);
    }

    #[test]
    fn bits_round_through_decoder() {
        for source in [
            ClockSource::Internal,
            ClockSource::Xgyro,
            ClockSource::Zgyro,
            ClockSource::External19200,
            ClockSource::Stop,
        ] {
            assert_eq!(ClockSource::from(source.bits()), source);
        }
    }
}
