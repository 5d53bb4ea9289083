use crate::registers::FS_SEL_SHIFT;

/// Raw gyro readings vector, in sensor counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Gyro {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Gyro {
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

    pub fn scaled(&self, scale: GyroFullScale) -> GyroF32 {
        self.divided_by(scale.scale())
    }

    pub(crate) fn divided_by(&self, divisor: f32) -> GyroF32 {
        GyroF32 {
            x: f32::from(self.x) / divisor,
            y: f32::from(self.y) / divisor,
            z: f32::from(self.z) / divisor,
        }
    }
}

/// Gyroscope full-scale range (FS_SEL).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroFullScale {
    #[default]
    Deg250 = 0,
    Deg500 = 1,
    Deg1000 = 2,
    Deg2000 = 3,
}

impl GyroFullScale {
    /// LSB per degree per second.
    pub const fn scale(self) -> f32 {
        match self {
            Self::Deg250 => 131.0,
            Self::Deg500 => 65.5,
            Self::Deg1000 => 32.8,
            Self::Deg2000 => 16.4,
        }
    }

    pub fn scale_value(self, value: i16) -> f32 {
        f32::from(value) / self.scale()
    }

    /// FS_SEL shifted into its place in `GYRO_CONFIG`.
    pub const fn field(self) -> u8 {
        (self as u8) << FS_SEL_SHIFT
    }
}

impl From<u8> for GyroFullScale {
    /// Resolves an FS_SEL code; unknown codes map to ±250°/s.
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Deg500,
            2 => Self::Deg1000,
            3 => Self::Deg2000,
            _ => Self::Deg250,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct GyroF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl GyroF32 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_datasheet() {
        assert_eq!(GyroFullScale::from(0u8).scale(), 131.0);
        assert_eq!(GyroFullScale::from(1u8).scale(), 65.5);
        assert_eq!(GyroFullScale::from(2u8).scale(), 32.8);
        assert_eq!(GyroFullScale::from(3u8).scale(), 16.4);
    }

    #[test]
    fn unknown_codes_fall_back_to_most_sensitive() {
        for code in 4..=u8::MAX {
            assert_eq!(GyroFullScale::from(code), GyroFullScale::Deg250);
        }
    }

    #[test]
    fn scaled_divides_each_axis() {
        let rate = Gyro::new(131, -262, 0).scaled(GyroFullScale::Deg250);
        assert_eq!(rate, GyroF32::new(1.0, -2.0, 0.0));
        assert_eq!(GyroFullScale::Deg2000.field(), 0b0001_1000);
    }
}
