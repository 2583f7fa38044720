//! Manual alarm button.
//!
//! Active-high momentary switch with an external pull-down.  Sampled once
//! per control tick; the raw level is reported with no debounce, because a
//! press of any length must raise the alarm.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the GPIO level via hw_init.
//! On host/test: reads from a static `AtomicBool` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_BUTTON_PRESSED: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_button(pressed: bool) {
    SIM_BUTTON_PRESSED.store(pressed, Ordering::Relaxed);
}

pub struct AlarmButton {
    gpio: i32,
}

impl AlarmButton {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    #[cfg(target_os = "espidf")]
    pub fn is_pressed(&self) -> bool {
        crate::drivers::hw_init::gpio_read(self.gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn is_pressed(&self) -> bool {
        SIM_BUTTON_PRESSED.load(Ordering::Relaxed)
    }
}
