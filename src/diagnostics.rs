//! Periodic diagnostics dump.
//!
//! Every `serial_write_interval_ms` the service emits a
//! [`TelemetryData`](crate::app::events::TelemetryData) snapshot of the raw
//! inputs and alarm timing.  The dump is for a human on the serial console;
//! the controller never reads it back.

use crate::alarm::context::Tick;

/// Rate gate for the diagnostics dump.
///
/// The last-dump time starts at zero, so the first dump happens once
/// `now` reaches one full interval after boot.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticsTimer {
    interval_ms: u64,
    last_dump: Tick,
}

impl DiagnosticsTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_dump: 0,
        }
    }

    /// Returns `true` (and records `now`) when a dump is due.
    pub fn due(&mut self, now: Tick) -> bool {
        if now.saturating_sub(self.last_dump) < self.interval_ms {
            return false;
        }
        self.last_dump = now;
        true
    }

    pub fn last_dump(&self) -> Tick {
        self.last_dump
    }
}
