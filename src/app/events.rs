//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  They are observational
//! only; nothing reads them back into the controller.

use crate::alarm::context::{AlarmReason, Tick};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started.
    Started,

    /// Periodic diagnostics dump.
    Telemetry(TelemetryData),

    /// Local alarm switched on.
    AlarmRaised { at: Tick },

    /// A notification was handed to the notifier.
    Notified(AlarmReason),

    /// Local alarm switched off by the auto-reset.
    AlarmCleared { at: Tick },
}

/// Point-in-time view of inputs and alarm timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryData {
    pub now: Tick,
    pub flame_value: i32,
    pub smoke_value: i32,
    pub button_pressed: bool,
    pub is_alarming: bool,
    pub alarm_started_at: Tick,
}
