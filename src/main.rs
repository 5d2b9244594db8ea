use std::thread;
use std::time::Duration;

use anyhow::Context;
use esp_idf_svc::{
    eventloop::EspSystemEventLoop, hal::peripherals::Peripherals, log::EspLogger,
    nvs::EspDefaultNvsPartition,
};
use log::*;
use sensors::LightSensors;
use servo::Servo;
use telemetry::Telemetry;
use tracking::{classify, tilt_for, TelemetryRecord};
use wifi::wifi::Wifi;

mod config;
use config::Config;

fn main() -> anyhow::Result<()> {
    // Required for ESP-IDF patches
    esp_idf_svc::sys::link_patches();

    EspLogger::initialize_default();

    let config = Config::load()?;
    let sysloop = EspSystemEventLoop::take()?;
    let peripherals = Peripherals::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    // Servo first, so the panel holds a defined posture while the rest of
    // the bring-up (and the network join) runs.
    let mut servo = Servo::new(
        peripherals.ledc.timer0,
        peripherals.ledc.channel0,
        peripherals.pins.gpio27,
    )?;

    let mut sensors = LightSensors::new(
        peripherals.adc1,
        peripherals.pins.gpio34,
        peripherals.pins.gpio32,
    )?;

    let mut wifi = Wifi::new(peripherals.modem, sysloop, nvs)?;
    wifi.connect(&config.wifi.ssid, &config.wifi.password)
        .context("Wi-Fi connection failed")?;
    info!("Current wifi state: {:?}", wifi.state());

    let mut reporter = Telemetry::new(&config.telemetry.endpoint, &config.telemetry.api_key)?;

    info!("Smart canopy system started");
    thread::sleep(Duration::from_secs(config.tracker.settle_seconds));

    // Any error on the hardware path below propagates out of main: the
    // device must halt rather than keep steering the panel on bad state.
    // Telemetry is the one exception; its failures are logged and the
    // cycle continues.
    loop {
        let reading = sensors.read()?;
        let direction = classify(reading.east, reading.west, config.tracker.threshold);
        let angle = tilt_for(direction);

        servo.set_angle(angle)?;

        info!(
            "E={} W={} | SunDir={:?} | Tilt={}",
            reading.east, reading.west, direction, angle
        );

        let record = TelemetryRecord {
            east: reading.east,
            west: reading.west,
            direction,
            tilt_angle: angle,
        };
        match reporter.send(&record) {
            Ok(()) => info!("ThingSpeak update sent successfully"),
            Err(e) => warn!("ThingSpeak send failed: {e:?}"),
        }

        thread::sleep(Duration::from_secs(config.tracker.cycle_seconds));
    }
}
