//! MPU6050 Register Map
//!
//! Only the registers this driver touches are listed:
//! - Identity register, used to confirm the part on the bus
//! - Power management, holding the clock-select field and the sleep bit
//! - Gyroscope and accelerometer configuration, holding the full-scale fields
//! - The fourteen output registers read in one burst (accel, temp, gyro)
//!
//! Bit positions follow the MPU-6000/MPU-6050 register map, revision 4.2.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Gyroscope Configuration register (0x1B)
    /// FS_SEL lives in bits 4:3
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// AFS_SEL lives in bits 4:3
    AccelConfig = 0x1C,

    // Accelerometer Data Registers
    /// High byte of X-axis acceleration, first byte of the burst read
    AccelX_H = 0x3B,
    AccelX_L = 0x3C,
    AccelY_H = 0x3D,
    AccelY_L = 0x3E,
    AccelZ_H = 0x3F,
    AccelZ_L = 0x40,

    // Temperature Data Registers
    TempOut_H = 0x41,
    TempOut_L = 0x42,

    // Gyroscope Data Registers
    GyroX_H = 0x43,
    GyroX_L = 0x44,
    GyroY_H = 0x45,
    GyroY_L = 0x46,
    GyroZ_H = 0x47,
    /// Low byte of Z-axis angular rate, last byte of the burst read
    GyroZ_L = 0x48,

    /// Power Management 1 register (0x6B)
    /// CLKSEL in bits 2:0, SLEEP in bit 6
    PwrMgmt1 = 0x6B,

    /// Identity register (0x75)
    /// Reads back the upper six bits of the I2C address, 0x68 on an MPU-6050
    WhoAmI = 0x75,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}

/// Value `WHO_AM_I` reports on a genuine MPU-6050.
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Clock-select field of `PWR_MGMT_1`.
pub const PWR1_CLKSEL_MASK: u8 = 0b0000_0111;

/// Sleep bit of `PWR_MGMT_1`.
pub const PWR1_SLEEP_BIT: u8 = 6;

/// Offset of the FS_SEL / AFS_SEL field in the configuration registers.
pub const FS_SEL_SHIFT: u8 = 3;

/// FS_SEL / AFS_SEL field mask, already shifted into place.
pub const FS_SEL_MASK: u8 = 0b0001_1000;

/// Number of bytes from `ACCEL_XOUT_H` through `GYRO_ZOUT_L`.
pub const BURST_LEN: usize = Register::GyroZ_L as usize - Register::AccelX_H as usize + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_covers_seven_words() {
        assert_eq!(BURST_LEN, 14);
    }

    #[test]
    fn fs_sel_mask_matches_shift() {
        assert_eq!(FS_SEL_MASK, 0b11 << FS_SEL_SHIFT);
    }
}
