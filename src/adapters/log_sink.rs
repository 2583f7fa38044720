//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the logger
//! (UART / USB-CDC in production).  Telemetry renders as the multi-line
//! block an operator watches on the serial monitor.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

const RULE: &str = "----------------";

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!("{RULE}");
                info!("Flame: {}", t.flame_value);
                info!("Button: {}", if t.button_pressed { "PRESSED" } else { "released" });
                info!("Smoke: {}", t.smoke_value);
                info!("{RULE}");
                info!("uptime: {} ms", t.now);
                info!(
                    "latest alarm time: {} ms{}",
                    t.alarm_started_at,
                    if t.is_alarming { " (ALARMING)" } else { "" }
                );
                info!("{RULE}");
            }
            AppEvent::Started => {
                info!("START | fire alarm monitoring");
            }
            AppEvent::AlarmRaised { at } => {
                warn!("ALARM | raised at {} ms", at);
            }
            AppEvent::Notified(reason) => {
                warn!("ALARM | notifying: {}", reason);
            }
            AppEvent::AlarmCleared { at } => {
                info!("ALARM | cleared at {} ms", at);
            }
        }
    }
}
