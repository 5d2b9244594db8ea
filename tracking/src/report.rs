use crate::direction::SunDirection;

/// One cycle's raw readings and derived values, exactly as uploaded.
/// Lives only for the duration of a single send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryRecord {
    pub east: i32,
    pub west: i32,
    pub direction: SunDirection,
    pub tilt_angle: i32,
}

impl TelemetryRecord {
    /// Collector update URL with the four values as named query fields.
    /// The direction travels as its wire ordinal.
    pub fn update_url(&self, endpoint: &str, api_key: &str) -> String {
        format!(
            "{}/update?api_key={}&field1={}&field2={}&field3={}&field4={}",
            endpoint,
            api_key,
            self.east,
            self.west,
            self.direction.ordinal(),
            self.tilt_angle,
        )
    }
}
