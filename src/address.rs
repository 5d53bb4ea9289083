//! MPU6050 I2C Address and Bus Selection
//!
//! The MPU6050 answers on one of two 7-bit addresses:
//! - 0x68 (default, AD0 pin low)
//! - 0x69 (alternate, AD0 pin high)
//!
//! On Linux the bus itself is reached through a numbered device node,
//! `/dev/i2c-N`, picked with a [`BusSelector`].

/// Represents an MPU6050 I2C address.
///
/// Note: These are 7-bit addresses. Some I2C implementations may
/// require left-shifting by 1 to create the 8-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub u8);

impl Address {
    /// Address with AD0 tied high.
    pub const fn alternate() -> Self {
        Self(0x69)
    }
}

impl Default for Address {
    /// Returns the default I2C address (0x68).
    ///
    /// This is the address used when:
    /// - AD0 pin is connected to GND
    /// - AD0 pin is left floating (has internal pulldown)
    fn default() -> Self {
        Self(0x68)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

/// Index of the I2C adapter, mapped to `/dev/i2c-<index>`.
///
/// On the Raspberry Pi, adapter 0 is wired to the HAT ID EEPROM and should
/// not carry sensors. Opening it is allowed but logged as a warning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusSelector(pub u8);

impl BusSelector {
    /// Whether this adapter is the one reserved on the reference board.
    pub const fn is_reserved(self) -> bool {
        self.0 == 0
    }

    /// Device node path for this adapter.
    #[cfg(feature = "std")]
    pub fn device_path(self) -> std::path::PathBuf {
        std::path::PathBuf::from(std::format!("/dev/i2c-{}", self.0))
    }
}

impl Default for BusSelector {
    /// Adapter 1, the user-facing header bus on the Raspberry Pi.
    fn default() -> Self {
        Self(1)
    }
}

impl From<u8> for BusSelector {
    fn from(index: u8) -> Self {
        Self(index)
    }
}
