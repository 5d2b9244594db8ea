pub mod thingspeak {
    use std::time::Duration;

    use anyhow::{anyhow, Result};
    use embedded_svc::http::client::Client as HttpClient;
    use embedded_svc::http::{Method, Status};
    use esp_idf_svc::http::client::{Configuration as HttpConfiguration, EspHttpConnection};
    use log::*;
    use tracking::TelemetryRecord;

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cloud reporter for per-cycle canopy state. One GET per cycle,
    /// fire-and-forget: the caller logs the outcome and moves on.
    pub struct Telemetry {
        client: HttpClient<EspHttpConnection>,
        endpoint: String,
        api_key: String,
    }

    impl Telemetry {
        pub fn new(endpoint: &str, api_key: &str) -> Result<Self> {
            let config = HttpConfiguration {
                timeout: Some(REQUEST_TIMEOUT),
                ..Default::default()
            };

            let connection = EspHttpConnection::new(&config)?;
            info!("telemetry client ready for {endpoint}");

            Ok(Telemetry {
                client: HttpClient::wrap(connection),
                endpoint: endpoint.to_string(),
                api_key: api_key.to_string(),
            })
        }

        /// Upload one record. Exactly one attempt; no retry, no
        /// buffering. Anything but a 2xx answer counts as failure. The
        /// response body (the collector's entry id) is ignored.
        pub fn send(&mut self, record: &TelemetryRecord) -> Result<()> {
            let url = record.update_url(&self.endpoint, &self.api_key);

            let request = self.client.request(Method::Get, &url, &[])?;
            let response = request.submit()?;

            let status = response.status();
            if !(200..300).contains(&status) {
                return Err(anyhow!("collector answered HTTP {status}"));
            }

            Ok(())
        }
    }
}

pub use thingspeak::Telemetry;
