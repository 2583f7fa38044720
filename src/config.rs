//! System configuration parameters
//!
//! All tunable parameters for the fire alarm.  Defaults match the
//! reference board (10-bit style 0-1023 readings, 3 s alarm window).
//! The config is built once at boot and handed to the service by value;
//! nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum digits in a recipient number (E.164 allows 15; leave headroom).
const RECIPIENT_MAX_DIGITS: usize = 20;
const RECIPIENT_MIN_DIGITS: usize = 3;

/// Phone number the modem texts and calls.
pub type Recipient = heapless::String<24>;

/// When the controller emits a notification for a held condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotifyPolicy {
    /// Notify once when a source goes from absent to present.
    #[default]
    EdgeTriggered,
    /// Notify on every tick the source is present.
    EveryTick,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Thresholds (reading <= threshold means detected) ---
    pub fire_threshold: i32,
    pub smoke_threshold: i32,

    // --- Alarm ---
    /// Local alarm auto-reset window (milliseconds).
    pub alarm_duration_ms: u64,
    pub notify_policy: NotifyPolicy,

    // --- Notification ---
    /// The single destination for SMS and voice calls.
    pub recipient: Recipient,
    /// UART baud rate for the GSM modem link.
    pub modem_baud_rate: u32,
    /// Pause after each AT command so the modem can process it.
    pub modem_settle_ms: u32,
    /// Longer pause between `AT` and `ATD` when dialling.
    pub modem_dial_settle_ms: u32,

    // --- Timing ---
    /// Diagnostics dump interval (milliseconds).
    pub serial_write_interval_ms: u64,
    /// Sleep between control loop iterations (milliseconds).
    pub loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut recipient = Recipient::new();
        // Fits: 13 bytes into a 24-byte buffer.
        let _ = recipient.push_str("+63239320152");

        Self {
            fire_threshold: 900,
            smoke_threshold: 900,

            alarm_duration_ms: 3000,
            notify_policy: NotifyPolicy::EdgeTriggered,

            recipient,
            modem_baud_rate: 9600,
            modem_settle_ms: 100,
            modem_dial_settle_ms: 500,

            serial_write_interval_ms: 2000,
            loop_interval_ms: 50,
        }
    }
}

impl SystemConfig {
    /// Reject values the firmware cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_recipient(&self.recipient)?;
        if self.alarm_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("alarm_duration_ms"));
        }
        if self.serial_write_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("serial_write_interval_ms"));
        }
        if self.loop_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("loop_interval_ms"));
        }
        if self.modem_baud_rate == 0 {
            return Err(ConfigError::InvalidBaudRate);
        }
        Ok(())
    }

    /// Replace the recipient, validating it first.
    pub fn set_recipient(&mut self, number: &str) -> Result<(), ConfigError> {
        let mut r = Recipient::new();
        r.push_str(number).map_err(|()| ConfigError::InvalidRecipient)?;
        validate_recipient(&r)?;
        self.recipient = r;
        Ok(())
    }
}

/// Optional leading `+`, then 3..=20 ASCII digits.
fn validate_recipient(number: &str) -> Result<(), ConfigError> {
    let digits = number.strip_prefix('+').unwrap_or(number);
    let len_ok = (RECIPIENT_MIN_DIGITS..=RECIPIENT_MAX_DIGITS).contains(&digits.len());
    if len_ok && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRecipient)
    }
}
