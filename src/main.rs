//! Fire Alarm Firmware: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter    GsmNotifier     LogEventSink         │
//! │  (Sensor+Actuator)  (SMS + call)    (EventSink)          │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AppService (pure logic)                 │  │
//! │  │  AlarmController · DiagnosticsTimer                │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  UptimeClock → tick(now) every loop_interval_ms          │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::AnyIOPin;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::uart::{config::Config as UartConfig, UartDriver};
use esp_idf_svc::hal::units::Hertz;

use firealarm::adapters::gsm_notifier::GsmNotifier;
use firealarm::adapters::hardware::HardwareAdapter;
use firealarm::adapters::log_sink::LogEventSink;
use firealarm::adapters::time::UptimeClock;
use firealarm::app::service::AppService;
use firealarm::config::SystemConfig;
use firealarm::drivers::gsm::{GsmModem, ModemTiming};
use firealarm::drivers::hw_init;
use firealarm::drivers::output::OnOffOutput;
use firealarm::pins;
use firealarm::sensors::analog::AnalogSensor;
use firealarm::sensors::button::AlarmButton;
use firealarm::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Fire Alarm v{}                   ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    // ── 3. Local peripherals ──────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Without sensors and outputs there is no alarm to run.
        error!("HAL init failed: {}, halting", e);
        return Err(e.into());
    }

    let sensor_hub = SensorHub::new(
        AnalogSensor::new(pins::FLAME_ADC_CHANNEL),
        AnalogSensor::new(pins::SMOKE_ADC_CHANNEL),
        AlarmButton::new(pins::ALARM_BUTTON_GPIO),
    );
    let mut hw = HardwareAdapter::new(
        sensor_hub,
        OnOffOutput::new("led", pins::LED_GPIO),
        OnOffOutput::new("bell", pins::BELL_RELAY_GPIO),
    );
    hw.all_off();

    // ── 4. GSM modem on UART1 ─────────────────────────────────
    let peripherals = Peripherals::take()?;
    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio17,
        peripherals.pins.gpio18,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &UartConfig::default().baudrate(Hertz(config.modem_baud_rate)),
    )?;
    info!(
        "GSM modem UART1 ready (TX=GPIO{}, RX=GPIO{}, {} baud)",
        pins::GSM_TX_GPIO,
        pins::GSM_RX_GPIO,
        config.modem_baud_rate
    );

    let timing = ModemTiming {
        settle_ms: config.modem_settle_ms,
        dial_settle_ms: config.modem_dial_settle_ms,
    };
    let mut notifier = GsmNotifier::new(
        GsmModem::new(uart, FreeRtos, timing),
        config.recipient.clone(),
    );

    // ── 5. Application service ────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(&config);
    let clock = UptimeClock::new();
    app.start(&mut sink);

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        app.tick(clock.now_ms(), &mut hw, &mut notifier, &mut sink);
        FreeRtos::delay_ms(config.loop_interval_ms);
    }
}
