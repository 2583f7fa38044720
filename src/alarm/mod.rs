//! Alarm controller: the pure decision core.
//!
//! ```text
//!            [condition]                 [next tick]
//!   Standby ────────────▶ should_alarm ──────────────▶ Alarming
//!      ▲                                                 │
//!      │        [now - alarm_started_at > duration]      │
//!      └─────────────────────────────────────────────────┘
//! ```
//!
//! Each call to [`AlarmController::tick`] runs five steps in a fixed order:
//!
//! 1. `should_alarm && !is_alarming` → start alarming (LED, sounder, call).
//! 2. Button pressed → notify, `should_alarm = true`.
//! 3. Flame reading ≤ fire threshold → notify, `should_alarm = true`.
//! 4. Smoke reading ≤ smoke threshold → notify, `should_alarm = true`.
//! 5. Alarming for longer than the alarm duration → auto-reset.
//!
//! The alarming transition runs first, so a condition seen on tick `t`
//! lights the alarm on tick `t + 1`.  The controller never touches
//! hardware; it returns a [`TickOutput`] for the caller to apply.

pub mod context;

use log::info;

use crate::config::{NotifyPolicy, SystemConfig};
use context::{
    AlarmAction, AlarmReason, AlarmState, NotificationEvent, SensorSnapshot, Tick, TickOutput,
};

/// Thresholds and timing the controller needs, copied out of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmSettings {
    pub fire_threshold: i32,
    pub smoke_threshold: i32,
    pub alarm_duration_ms: u64,
    pub notify_policy: NotifyPolicy,
}

impl From<&SystemConfig> for AlarmSettings {
    fn from(config: &SystemConfig) -> Self {
        Self {
            fire_threshold: config.fire_threshold,
            smoke_threshold: config.smoke_threshold,
            alarm_duration_ms: config.alarm_duration_ms,
            notify_policy: config.notify_policy,
        }
    }
}

/// Single owned alarm state machine.
pub struct AlarmController {
    settings: AlarmSettings,
    state: AlarmState,
    /// Sources present on the previous tick (bitmask of [`AlarmReason`]).
    present_last_tick: u8,
}

impl AlarmController {
    pub fn new(settings: AlarmSettings) -> Self {
        Self {
            settings,
            state: AlarmState::default(),
            present_last_tick: 0,
        }
    }

    pub fn state(&self) -> &AlarmState {
        &self.state
    }

    pub fn settings(&self) -> &AlarmSettings {
        &self.settings
    }

    /// Advance the controller by one tick.
    ///
    /// `now` must not be smaller than the value passed on the previous call.
    pub fn tick(&mut self, now: Tick, snapshot: &SensorSnapshot) -> TickOutput {
        let mut out = TickOutput::default();

        // 1. Start alarming if a condition was latched on an earlier tick.
        if self.state.should_alarm && !self.state.is_alarming {
            self.start_alarm(now, &mut out);
        }

        // 2-4. Detect conditions in fixed order.
        let mut present = 0u8;
        for reason in AlarmReason::ALL {
            if !self.is_present(reason, snapshot) {
                continue;
            }
            present |= reason.mask();
            self.state.should_alarm = true;

            if self.should_notify(reason) {
                info!("Alarm condition: {reason}");
                out.push(AlarmAction::Notify(NotificationEvent::new(reason)));
                self.state.has_notified = true;
            }
        }
        self.present_last_tick = present;

        // 5. Auto-reset once the alarm window has elapsed.
        let elapsed = now.saturating_sub(self.state.alarm_started_at);
        if self.state.is_alarming && elapsed > self.settings.alarm_duration_ms {
            self.reset_alarm(now, &mut out);
        }

        out
    }

    // ── Internal ──────────────────────────────────────────────

    fn is_present(&self, reason: AlarmReason, snap: &SensorSnapshot) -> bool {
        match reason {
            AlarmReason::ButtonPressed => snap.button_pressed,
            AlarmReason::FlameThreshold => snap.flame_value <= self.settings.fire_threshold,
            AlarmReason::SmokeThreshold => snap.smoke_value <= self.settings.smoke_threshold,
        }
    }

    fn should_notify(&self, reason: AlarmReason) -> bool {
        match self.settings.notify_policy {
            NotifyPolicy::EveryTick => true,
            NotifyPolicy::EdgeTriggered => self.present_last_tick & reason.mask() == 0,
        }
    }

    fn start_alarm(&mut self, now: Tick, out: &mut TickOutput) {
        info!("Alarm started at {now} ms");
        self.state.is_alarming = true;
        self.state.alarm_started_at = now;
        out.push(AlarmAction::Indicator(true));
        out.push(AlarmAction::Sounder(true));

        if !self.state.is_calling {
            self.state.is_calling = true;
            out.push(AlarmAction::StartCall);
        }
    }

    fn reset_alarm(&mut self, now: Tick, out: &mut TickOutput) {
        info!(
            "Alarm auto-reset at {now} ms (started {} ms)",
            self.state.alarm_started_at
        );
        self.state.should_alarm = false;
        self.state.is_alarming = false;
        self.state.has_notified = false;
        out.push(AlarmAction::Indicator(false));
        out.push(AlarmAction::Sounder(false));

        self.state.is_calling = false;
        out.push(AlarmAction::EndCall);
    }
}
