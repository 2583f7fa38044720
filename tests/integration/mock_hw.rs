//! Mock adapters for integration tests.
//!
//! Records every actuator and notifier call so tests can assert on the full
//! command history without touching real GPIO or a modem.

use firealarm::alarm::context::{AlarmReason, NotificationEvent, SensorSnapshot};
use firealarm::app::events::AppEvent;
use firealarm::app::ports::{AlarmActuatorPort, EventSink, NotifierPort, SensorPort};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Indicator(bool),
    Sounder(bool),
}

// ── MockHardware ──────────────────────────────────────────────

/// Scripted sensor inputs plus a log of output commands.
pub struct MockHardware {
    /// Returned by every `read()` until changed.
    pub snapshot: SensorSnapshot,
    pub calls: Vec<ActuatorCall>,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            snapshot: SensorSnapshot::clear(1000, 1000),
            calls: Vec::new(),
            reads: 0,
        }
    }

    pub fn press_button(&mut self, pressed: bool) {
        self.snapshot.button_pressed = pressed;
    }

    pub fn set_flame(&mut self, value: i32) {
        self.snapshot.flame_value = value;
    }

    pub fn set_smoke(&mut self, value: i32) {
        self.snapshot.smoke_value = value;
    }

    pub fn indicator_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Indicator(on) => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn sounder_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Sounder(on) => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read(&mut self) -> SensorSnapshot {
        self.reads += 1;
        self.snapshot
    }
}

impl AlarmActuatorPort for MockHardware {
    fn set_indicator(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Indicator(on));
    }

    fn set_sounder(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Sounder(on));
    }
}

// ── MockNotifier ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierCall {
    Text(AlarmReason),
    StartCall,
    EndCall,
}

#[derive(Default)]
pub struct MockNotifier {
    pub calls: Vec<NotifierCall>,
    pub bodies: Vec<&'static str>,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<AlarmReason> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                NotifierCall::Text(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: NotifierCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl NotifierPort for MockNotifier {
    fn send_text(&mut self, event: &NotificationEvent) {
        self.calls.push(NotifierCall::Text(event.reason));
        self.bodies.push(event.message);
    }

    fn start_call(&mut self) {
        self.calls.push(NotifierCall::StartCall);
    }

    fn end_call(&mut self) {
        self.calls.push(NotifierCall::EndCall);
    }
}

// ── LogSink ───────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn telemetry_times(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Telemetry(t) => Some(t.now),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
