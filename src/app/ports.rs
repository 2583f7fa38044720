//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, alarm outputs, GSM notifier, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! None of the ports return errors.  A sensor always yields a value (possibly
//! stale), and the notifier is fire-and-forget: delivery failures are the
//! adapter's concern and are never reported back into the core.

use crate::alarm::context::{NotificationEvent, SensorSnapshot};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: called once per tick.
pub trait SensorPort {
    /// Read flame, smoke, and the alarm button.
    fn read(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Local alarm port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the local alarm outputs.
pub trait AlarmActuatorPort {
    /// Indicator LED on/off.
    fn set_indicator(&mut self, on: bool);

    /// Buzzer / bell relay on/off.
    fn set_sounder(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Notifier port (driven adapter: domain → GSM modem)
// ───────────────────────────────────────────────────────────────

/// Remote notification to the single configured recipient.
pub trait NotifierPort {
    /// Send the event's message as a text.
    fn send_text(&mut self, event: &NotificationEvent);

    /// Place a voice call.
    fn start_call(&mut self);

    /// Hang up the voice call.
    fn end_call(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
