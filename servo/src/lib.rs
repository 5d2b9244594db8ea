pub mod servo {
    use anyhow::ensure;
    use esp_idf_svc::hal::gpio::Gpio27;
    use esp_idf_svc::hal::ledc::config::TimerConfig;
    use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, Resolution, CHANNEL0, TIMER0};
    use esp_idf_svc::hal::prelude::*;
    use log::*;
    use tracking::angle::{clamp_angle, duty_for_angle, SERVO_FREQ_HZ, SERVO_MAX_DUTY};

    /// Open-loop tilt actuator on LEDC timer0/channel0, signal on GPIO27.
    /// There is no position feedback; the commanded duty is the only
    /// record of where the panel is.
    pub struct Servo<'a> {
        pwm: LedcDriver<'a>,
    }

    impl<'a> Servo<'a> {
        pub fn new(timer: TIMER0, channel: CHANNEL0, pin: Gpio27) -> anyhow::Result<Servo<'a>> {
            let timer_cfg = TimerConfig::default()
                .frequency(SERVO_FREQ_HZ.Hz().into())
                .resolution(Resolution::Bits13);

            let timer = LedcTimerDriver::new(timer, &timer_cfg)?;
            let pwm = LedcDriver::new(channel, timer, pin)?;

            // The duty arithmetic assumes 13-bit resolution; a mismatch
            // would rescale every command the panel receives.
            ensure!(
                pwm.get_max_duty() == SERVO_MAX_DUTY,
                "PWM resolution mismatch: max duty {} != {}",
                pwm.get_max_duty(),
                SERVO_MAX_DUTY
            );

            info!("servo PWM ready at {} Hz", SERVO_FREQ_HZ);
            Ok(Servo { pwm })
        }

        /// Drive the panel to `angle` degrees. Out-of-range requests are
        /// clamped to the mechanical limits. The duty compare value is
        /// set and latched as a single update, so a partial command is
        /// never applied. A rejected command is an error the caller must
        /// treat as fatal: a panel that silently fails to move is
        /// indistinguishable from a stuck one.
        pub fn set_angle(&mut self, angle: i32) -> anyhow::Result<()> {
            let duty = duty_for_angle(angle);
            debug!("angle {} -> duty {}", clamp_angle(angle), duty);

            self.pwm.set_duty(duty)?;
            Ok(())
        }
    }
}

pub use servo::Servo;
