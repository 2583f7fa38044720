//! GPIO / peripheral pin assignments for the fire alarm board (ESP32-S3).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Local alarm outputs
// ---------------------------------------------------------------------------

/// Indicator LED (active HIGH).
pub const LED_GPIO: i32 = 7;
/// Bell relay or buzzer (active HIGH).
pub const BELL_RELAY_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Manual alarm button.  HIGH = pressed (external pull-down).
pub const ALARM_BUTTON_GPIO: i32 = 5;

/// Flame sensor analog output, GPIO 4 = ADC1 channel 3.
pub const FLAME_ADC_GPIO: i32 = 4;
pub const FLAME_ADC_CHANNEL: u32 = 3;

/// Smoke sensor (MQ-2) analog output, GPIO 3 = ADC1 channel 2.
pub const SMOKE_ADC_GPIO: i32 = 3;
pub const SMOKE_ADC_CHANNEL: u32 = 2;

// ---------------------------------------------------------------------------
// GSM modem UART (SIM800L)
// ---------------------------------------------------------------------------

pub const GSM_TX_GPIO: i32 = 17;
pub const GSM_RX_GPIO: i32 = 18;
