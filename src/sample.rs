//! Burst sample decoding
//!
//! A motion sample is read as one 14-byte burst starting at `ACCEL_XOUT_H`.
//! The bytes are kept exactly as they came off the wire; each 16-bit field is
//! pulled out by offset and converted from big-endian to host order
//! explicitly, then decoded as two's complement.
//!
//! | offset | field        |
//! |--------|--------------|
//! | 0..2   | accel X      |
//! | 2..4   | accel Y      |
//! | 4..6   | accel Z      |
//! | 6..8   | temperature  |
//! | 8..10  | gyro X       |
//! | 10..12 | gyro Y       |
//! | 12..14 | gyro Z       |

use crate::{
    accel::{Accel, AccelF32},
    gyro::{Gyro, GyroF32},
    registers::BURST_LEN,
    temperature::Temperature,
};

const ACCEL_X: usize = 0;
const ACCEL_Y: usize = 2;
const ACCEL_Z: usize = 4;
const TEMP: usize = 6;
const GYRO_X: usize = 8;
const GYRO_Y: usize = 10;
const GYRO_Z: usize = 12;

/// Decodes a 16-bit two's-complement pattern.
///
/// Total over the whole `u16` domain.
///
/// ```
/// # use mpu6050_linux::sample::decode_twos_complement;
/// assert_eq!(decode_twos_complement(0x7FFF), 32767);
/// assert_eq!(decode_twos_complement(0x8000), -32768);
/// assert_eq!(decode_twos_complement(0xFFFF), -1);
/// ```
pub const fn decode_twos_complement(value: u16) -> i16 {
    if value & 0x8000 != 0 {
        // !value + 1 is the magnitude; it is 0x8000 only for i16::MIN
        let magnitude = (!value) as i32 + 1;
        (-magnitude) as i16
    } else {
        value as i16
    }
}

/// The 14 wire bytes of one burst read, untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawSample {
    bytes: [u8; BURST_LEN],
}

impl RawSample {
    pub const fn from_bytes(bytes: [u8; BURST_LEN]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &[u8; BURST_LEN] {
        &self.bytes
    }

    /// Field at `offset`, converted from big-endian to host order.
    const fn word(&self, offset: usize) -> u16 {
        u16::from_be_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    pub const fn accel_x(&self) -> u16 {
        self.word(ACCEL_X)
    }

    pub const fn accel_y(&self) -> u16 {
        self.word(ACCEL_Y)
    }

    pub const fn accel_z(&self) -> u16 {
        self.word(ACCEL_Z)
    }

    pub const fn temperature(&self) -> u16 {
        self.word(TEMP)
    }

    pub const fn gyro_x(&self) -> u16 {
        self.word(GYRO_X)
    }

    pub const fn gyro_y(&self) -> u16 {
        self.word(GYRO_Y)
    }

    pub const fn gyro_z(&self) -> u16 {
        self.word(GYRO_Z)
    }

    /// Signed accelerometer counts.
    pub fn accel(&self) -> Accel {
        Accel::new(
            decode_twos_complement(self.accel_x()),
            decode_twos_complement(self.accel_y()),
            decode_twos_complement(self.accel_z()),
        )
    }

    /// Signed gyroscope counts.
    pub fn gyro(&self) -> Gyro {
        Gyro::new(
            decode_twos_complement(self.gyro_x()),
            decode_twos_complement(self.gyro_y()),
            decode_twos_complement(self.gyro_z()),
        )
    }

    pub fn temp(&self) -> Temperature {
        Temperature::new(decode_twos_complement(self.temperature()))
    }

    /// Converts to physical units with the given LSB-per-unit divisors.
    pub fn to_physical(&self, accel_scale: f32, gyro_scale: f32) -> PhysicalSample {
        PhysicalSample {
            accel: self.accel().divided_by(accel_scale),
            temperature: self.temp().celsius(),
            gyro: self.gyro().divided_by(gyro_scale),
        }
    }
}

impl From<[u8; BURST_LEN]> for RawSample {
    fn from(bytes: [u8; BURST_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// One sample in physical units: g, °C and °/s.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct PhysicalSample {
    pub accel: AccelF32,
    pub temperature: f32,
    pub gyro: GyroF32,
}
