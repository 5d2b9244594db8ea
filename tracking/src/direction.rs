/// Raw intensity pair from the two canopy light sensors, one ADC
/// conversion per channel. Recreated every cycle; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightReading {
    pub east: i32,
    pub west: i32,
}

impl LightReading {
    /// Horizontal imbalance, positive when the east sensor is brighter.
    pub fn diff(&self) -> i32 {
        self.east - self.west
    }
}

/// Discrete sun position derived from a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunDirection {
    East,
    Overhead,
    West,
}

impl SunDirection {
    /// Ordinal used on the wire: 0 = east, 1 = overhead, 2 = west.
    pub fn ordinal(self) -> u8 {
        match self {
            SunDirection::East => 0,
            SunDirection::Overhead => 1,
            SunDirection::West => 2,
        }
    }
}

/// Noise floor for the east/west imbalance. Differences within
/// `±LDR_THRESHOLD` are treated as overhead light.
pub const LDR_THRESHOLD: i32 = 150;

/// Classify a reading against a deadband around zero imbalance.
///
/// Stateless: the same inputs always give the same answer, with no memory
/// of the previous classification. A reading hovering right at the
/// threshold can therefore flicker between states across cycles.
pub fn classify(east: i32, west: i32, threshold: i32) -> SunDirection {
    let diff = east - west;

    if diff > threshold {
        return SunDirection::East;
    }
    if diff < -threshold {
        return SunDirection::West;
    }

    SunDirection::Overhead
}
