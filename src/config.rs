use serde::Deserialize;

/// Build-time configuration, embedded into the binary. There are no
/// runtime files, CLI flags or environment variables on the device.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub wifi: WifiConfig,
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WifiConfig {
    pub ssid: String,
    /// Empty for open networks.
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Deadband for the east/west imbalance, in raw ADC counts.
    #[serde(default = "default_threshold")]
    pub threshold: i32,
    /// Seconds between tracking cycles.
    #[serde(default = "default_cycle_seconds")]
    pub cycle_seconds: u64,
    /// Settling delay between init and the first cycle.
    #[serde(default = "default_settle_seconds")]
    pub settle_seconds: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            threshold: default_threshold(),
            cycle_seconds: default_cycle_seconds(),
            settle_seconds: default_settle_seconds(),
        }
    }
}

fn default_endpoint() -> String {
    "http://api.thingspeak.com".to_string()
}

fn default_threshold() -> i32 {
    tracking::direction::LDR_THRESHOLD
}

fn default_cycle_seconds() -> u64 {
    15
}

fn default_settle_seconds() -> u64 {
    5
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        // Embedded configuration (compiled into binary)
        let config_content = include_str!("../config.toml");
        let config: Config = toml::from_str(config_content)?;
        log::info!("Loaded embedded configuration");
        Ok(config)
    }
}
