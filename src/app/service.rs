//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the alarm controller and the diagnostics timer.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!                 │       AppService         │
//! ActuatorPort ◀──│  AlarmController · Diag  │──▶ NotifierPort
//!                 └─────────────────────────┘
//! ```

use log::info;

use crate::alarm::context::{AlarmAction, AlarmState, SensorSnapshot, Tick, TickOutput};
use crate::alarm::{AlarmController, AlarmSettings};
use crate::config::SystemConfig;
use crate::diagnostics::DiagnosticsTimer;

use super::events::{AppEvent, TelemetryData};
use super::ports::{AlarmActuatorPort, EventSink, NotifierPort, SensorPort};

/// The application service orchestrates all domain logic.
pub struct AppService {
    controller: AlarmController,
    diagnostics: DiagnosticsTimer,
    /// Snapshot from the most recent tick, for telemetry.
    last_snapshot: SensorSnapshot,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from an already-validated configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            controller: AlarmController::new(AlarmSettings::from(config)),
            diagnostics: DiagnosticsTimer::new(config.serial_write_interval_ms),
            last_snapshot: SensorSnapshot::default(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let s = self.controller.settings();
        info!(
            "AppService started (fire<={}, smoke<={}, alarm={}ms, policy={:?})",
            s.fire_threshold, s.smoke_threshold, s.alarm_duration_ms, s.notify_policy
        );
        sink.emit(&AppEvent::Started);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: read sensors → controller → outputs.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`AlarmActuatorPort`], avoiding a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now: Tick,
        hw: &mut (impl SensorPort + AlarmActuatorPort),
        notifier: &mut impl NotifierPort,
        sink: &mut impl EventSink,
    ) -> TickOutput {
        self.tick_count += 1;

        // 1. Read sensors via SensorPort
        let snapshot = hw.read();
        self.last_snapshot = snapshot;

        // 2. Diagnostics dump reflects inputs before this tick's decision
        if self.diagnostics.due(now) {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry(now)));
        }

        // 3. Controller decision (pure)
        let out = self.controller.tick(now, &snapshot);

        // 4. Apply every action in order
        for action in &out.actions {
            Self::apply(action, hw, notifier);
            match action {
                AlarmAction::Indicator(true) => sink.emit(&AppEvent::AlarmRaised { at: now }),
                AlarmAction::Indicator(false) => sink.emit(&AppEvent::AlarmCleared { at: now }),
                AlarmAction::Notify(n) => sink.emit(&AppEvent::Notified(n.reason)),
                _ => {}
            }
        }

        out
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self, now: Tick) -> TelemetryData {
        let state = self.controller.state();
        TelemetryData {
            now,
            flame_value: self.last_snapshot.flame_value,
            smoke_value: self.last_snapshot.smoke_value,
            button_pressed: self.last_snapshot.button_pressed,
            is_alarming: state.is_alarming,
            alarm_started_at: state.alarm_started_at,
        }
    }

    pub fn state(&self) -> &AlarmState {
        self.controller.state()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate one controller action into a port call.
    fn apply(
        action: &AlarmAction,
        hw: &mut impl AlarmActuatorPort,
        notifier: &mut impl NotifierPort,
    ) {
        match action {
            AlarmAction::Indicator(on) => hw.set_indicator(*on),
            AlarmAction::Sounder(on) => hw.set_sounder(*on),
            AlarmAction::Notify(event) => notifier.send_text(event),
            AlarmAction::StartCall => notifier.start_call(),
            AlarmAction::EndCall => notifier.end_call(),
        }
    }
}
