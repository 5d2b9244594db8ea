use crate::direction::SunDirection;

/// Servo drive parameters. 500–2400 us is the actuator's documented
/// control range; 20 ms period (50 Hz) at 13-bit duty resolution.
pub const SERVO_FREQ_HZ: u32 = 50;
pub const SERVO_MIN_US: u32 = 500;
pub const SERVO_MAX_US: u32 = 2400;
pub const SERVO_PERIOD_US: u32 = 20_000;
pub const SERVO_MAX_DUTY: u32 = 8191;

/// Target tilt for a classified sun position. Total over the enum;
/// overhead doubles as the safe default posture.
pub fn tilt_for(direction: SunDirection) -> i32 {
    match direction {
        SunDirection::East => 30,
        SunDirection::West => 150,
        SunDirection::Overhead => 90,
    }
}

/// Clamp a requested tilt into the actuator's mechanical range.
pub fn clamp_angle(angle: i32) -> i32 {
    angle.clamp(0, 180)
}

/// Linear angle-to-pulse-width mapping over the control range.
pub fn pulse_width_us(angle: i32) -> u32 {
    let angle = clamp_angle(angle) as u32;
    SERVO_MIN_US + angle * (SERVO_MAX_US - SERVO_MIN_US) / 180
}

/// Duty value for an angle against the fixed period and resolution.
/// Integer arithmetic throughout, matching the drive hardware.
pub fn duty_for_angle(angle: i32) -> u32 {
    pulse_width_us(angle) * SERVO_MAX_DUTY / SERVO_PERIOD_US
}
