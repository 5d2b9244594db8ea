pub mod sensors {
    use std::sync::Arc;

    use esp_idf_svc::hal::adc::attenuation::DB_11;
    use esp_idf_svc::hal::adc::oneshot::config::AdcChannelConfig;
    use esp_idf_svc::hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
    use esp_idf_svc::hal::adc::ADC1;
    use esp_idf_svc::hal::gpio::{Gpio32, Gpio34};
    use log::*;
    use tracking::LightReading;

    type LdrChannel<'a, P> = AdcChannelDriver<'a, P, Arc<AdcDriver<'a, ADC1>>>;

    /// The two canopy light sensors on ADC1: east LDR on GPIO34, west LDR
    /// on GPIO32. Owns the ADC unit for its whole lifetime.
    pub struct LightSensors<'a> {
        adc: Arc<AdcDriver<'a, ADC1>>,
        east: LdrChannel<'a, Gpio34>,
        west: LdrChannel<'a, Gpio32>,
    }

    impl<'a> LightSensors<'a> {
        /// Configure both channels for the LDR divider network: 12 dB
        /// attenuation for the full supply swing, default bit width.
        pub fn new(adc1: ADC1, ldr_e: Gpio34, ldr_w: Gpio32) -> anyhow::Result<LightSensors<'a>> {
            let adc = Arc::new(AdcDriver::new(adc1)?);

            let chan_cfg = AdcChannelConfig {
                attenuation: DB_11,
                ..Default::default()
            };

            let east = AdcChannelDriver::new(adc.clone(), ldr_e, &chan_cfg)?;
            let west = AdcChannelDriver::new(adc.clone(), ldr_w, &chan_cfg)?;

            info!("LDR channels configured on ADC1");
            Ok(LightSensors { adc, east, west })
        }

        /// One blocking conversion per channel. A failed conversion is an
        /// error for the caller to treat as unrecoverable; the panel must
        /// not be steered on stale or undefined light values.
        pub fn read(&mut self) -> anyhow::Result<LightReading> {
            let east = self.adc.read(&mut self.east)? as i32;
            let west = self.adc.read(&mut self.west)? as i32;

            Ok(LightReading { east, west })
        }
    }
}

pub use sensors::LightSensors;
