//! Data flowing into and out of the alarm controller.
//!
//! [`SensorSnapshot`] goes in once per tick; [`TickOutput`] comes out as an
//! ordered list of [`AlarmAction`]s for the runtime to apply.  The
//! controller's own memory between ticks is [`AlarmState`].

/// Milliseconds since boot.  Monotonic non-decreasing.
pub type Tick = u64;

// ---------------------------------------------------------------------------
// Sensor snapshot (read-only to the controller; written by the sensor hub)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every alarm input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorSnapshot {
    /// Raw flame sensor reading.  Lower means more flame.
    pub flame_value: i32,
    /// Raw smoke sensor reading.  Lower means more smoke.
    pub smoke_value: i32,
    /// Manual alarm button held down.
    pub button_pressed: bool,
}

impl SensorSnapshot {
    /// A snapshot with no condition present for any sane threshold.
    pub const fn clear(flame_value: i32, smoke_value: i32) -> Self {
        Self {
            flame_value,
            smoke_value,
            button_pressed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Alarm reasons
// ---------------------------------------------------------------------------

/// The three independent sources that can raise the alarm.
/// Discriminants are bitmask values so several sources can be tracked in
/// a single `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlarmReason {
    ButtonPressed = 0b0000_0001,
    FlameThreshold = 0b0000_0010,
    SmokeThreshold = 0b0000_0100,
}

impl AlarmReason {
    /// Evaluation order within a tick.
    pub const ALL: [Self; 3] = [
        Self::ButtonPressed,
        Self::FlameThreshold,
        Self::SmokeThreshold,
    ];

    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// SMS body sent for this reason.
    pub const fn message(self) -> &'static str {
        match self {
            Self::ButtonPressed => "WARNING!\nALARM BUTTON PRESSED",
            Self::FlameThreshold => "WARNING!\nFIRE THRESHOLD REACHED",
            Self::SmokeThreshold => "WARNING!\nSMOKE THRESHOLD REACHED",
        }
    }
}

impl core::fmt::Display for AlarmReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ButtonPressed => write!(f, "alarm button pressed"),
            Self::FlameThreshold => write!(f, "fire threshold reached"),
            Self::SmokeThreshold => write!(f, "smoke threshold reached"),
        }
    }
}

/// A notification for the notifier to deliver, then discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationEvent {
    pub reason: AlarmReason,
    pub message: &'static str,
}

impl NotificationEvent {
    pub const fn new(reason: AlarmReason) -> Self {
        Self {
            reason,
            message: reason.message(),
        }
    }
}

// ---------------------------------------------------------------------------
// Controller output
// ---------------------------------------------------------------------------

/// One side effect requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmAction {
    /// Drive the indicator LED.
    Indicator(bool),
    /// Drive the buzzer / bell relay.
    Sounder(bool),
    /// Send a text message to the recipient.
    Notify(NotificationEvent),
    /// Place a voice call to the recipient.
    StartCall,
    /// Hang up the voice call.
    EndCall,
}

/// Upper bound on actions per tick: activation (3) plus three notifications.
/// Activation and auto-reset cannot happen on the same tick.
pub const MAX_ACTIONS_PER_TICK: usize = 8;

/// Ordered actions produced by a single tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutput {
    pub actions: heapless::Vec<AlarmAction, MAX_ACTIONS_PER_TICK>,
}

impl TickOutput {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Notifications in emission order.
    pub fn notifications(&self) -> impl Iterator<Item = &NotificationEvent> {
        self.actions.iter().filter_map(|a| match a {
            AlarmAction::Notify(n) => Some(n),
            _ => None,
        })
    }

    pub fn contains(&self, action: AlarmAction) -> bool {
        self.actions.contains(&action)
    }

    pub(super) fn push(&mut self, action: AlarmAction) {
        // Capacity covers the worst case; see MAX_ACTIONS_PER_TICK.
        let pushed = self.actions.push(action);
        debug_assert!(pushed.is_ok(), "tick output overflow");
    }
}

// ---------------------------------------------------------------------------
// AlarmState
// ---------------------------------------------------------------------------

/// Everything the controller remembers between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlarmState {
    /// Indicator and sounder are on.
    pub is_alarming: bool,
    /// Tick at which the current episode started.
    pub alarm_started_at: Tick,
    /// At least one notification went out this episode.
    pub has_notified: bool,
    /// A condition was detected; the next tick starts alarming if idle.
    pub should_alarm: bool,
    /// A voice call has been placed and not yet hung up.
    pub is_calling: bool,
}
