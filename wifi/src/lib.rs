pub mod wifi {
    use std::net::{IpAddr, Ipv4Addr};

    use anyhow::anyhow;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::hal::modem::Modem;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;
    use esp_idf_svc::wifi::{
        AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi,
    };
    use log::*;

    /// Represents Wi-Fi connection states
    #[derive(Debug, PartialEq)]
    pub enum WifiState {
        Disconnected,
        Connecting,
        Connected(IpAddr),
    }

    /// Station-mode Wi-Fi service for the telemetry uplink.
    pub struct Wifi<'a> {
        inner: BlockingWifi<EspWifi<'a>>,
    }

    impl<'a> Wifi<'a> {
        pub fn new(
            modem: Modem,
            sysloop: EspSystemEventLoop,
            nvs: EspDefaultNvsPartition,
        ) -> anyhow::Result<Self> {
            let esp_wifi = EspWifi::new(modem, sysloop.clone(), Some(nvs))?;
            let inner = BlockingWifi::wrap(esp_wifi, sysloop)?;
            Ok(Wifi { inner })
        }

        /// Join the configured network and block until the interface has
        /// an address. An empty password means an open network.
        pub fn connect(&mut self, ssid: &str, pass: &str) -> anyhow::Result<()> {
            let auth_method = if pass.is_empty() {
                AuthMethod::None
            } else {
                AuthMethod::WPA2Personal
            };

            self.inner.set_configuration(&Configuration::Client(ClientConfiguration {
                ssid: ssid
                    .try_into()
                    .map_err(|_| anyhow!("SSID `{ssid}` is too long"))?,
                password: pass
                    .try_into()
                    .map_err(|_| anyhow!("Wi-Fi password is too long"))?,
                auth_method,
                ..Default::default()
            }))?;

            self.inner.start()?;
            self.inner.connect()?;
            self.inner.wait_netif_up()?;

            info!("Connected to `{ssid}`");
            Ok(())
        }

        pub fn state(&self) -> WifiState {
            if let Ok(true) = self.inner.is_connected() {
                if let Ok(ip_info) = self.inner.wifi().sta_netif().get_ip_info() {
                    let v4: Ipv4Addr = ip_info.ip.into();
                    return WifiState::Connected(IpAddr::V4(v4));
                }
                WifiState::Connecting
            } else {
                WifiState::Disconnected
            }
        }

        pub fn disconnect(&mut self) -> anyhow::Result<()> {
            self.inner.disconnect()?;
            Ok(())
        }
    }
}
