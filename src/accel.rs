use crate::registers::FS_SEL_SHIFT;

/// Raw acceleration readings vector, in sensor counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Accel {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Accel {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_be_bytes(x),
            y: i16::from_be_bytes(y),
            z: i16::from_be_bytes(z),
        }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    pub fn scaled(&self, scale: AccelFullScale) -> AccelF32 {
        self.divided_by(scale.scale())
    }

    pub(crate) fn divided_by(&self, divisor: f32) -> AccelF32 {
        AccelF32 {
            x: f32::from(self.x) / divisor,
            y: f32::from(self.y) / divisor,
            z: f32::from(self.z) / divisor,
        }
    }
}

/// Accelerometer full-scale range (AFS_SEL).
///
/// ```
/// # use mpu6050_linux::accel::AccelFullScale;
/// assert_eq!(AccelFullScale::from(2u8).scale(), 4096.0);
/// // anything outside the table falls back to the most sensitive range
/// assert_eq!(AccelFullScale::from(9u8), AccelFullScale::G2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelFullScale {
    #[default]
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelFullScale {
    /// LSB per g.
    pub const fn scale(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }

    pub fn scale_value(self, value: i16) -> f32 {
        f32::from(value) / self.scale()
    }

    /// AFS_SEL shifted into its place in `ACCEL_CONFIG`.
    pub const fn field(self) -> u8 {
        (self as u8) << FS_SEL_SHIFT
    }
}

impl From<u8> for AccelFullScale {
    /// Resolves an AFS_SEL code; unknown codes map to ±2g.
    fn from(code: u8) -> Self {
        match code {
            1 => Self::G4,
            2 => Self::G8,
            3 => Self::G16,
            _ => Self::G2,
        }
    }
}

#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl AccelF32 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}
