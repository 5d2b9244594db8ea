//! Control-law core of the canopy tracker: sun-direction classification,
//! tilt-angle mapping, servo duty arithmetic and the telemetry record.
//! Deliberately hardware-free so everything here runs on the host.

pub mod angle;
pub mod direction;
pub mod report;

pub use angle::{duty_for_angle, pulse_width_us, tilt_for};
pub use direction::{classify, LightReading, SunDirection};
pub use report::TelemetryRecord;
