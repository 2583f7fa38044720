//! Single on/off GPIO output (indicator LED, bell relay / buzzer).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use log::debug;

use crate::drivers::hw_init;

pub struct OnOffOutput {
    name: &'static str,
    gpio: i32,
    on: bool,
}

impl OnOffOutput {
    /// Wrap an already-configured output pin.  Starts off.
    pub fn new(name: &'static str, gpio: i32) -> Self {
        Self {
            name,
            gpio,
            on: false,
        }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        if on != self.on {
            debug!("{} -> {}", self.name, if on { "ON" } else { "OFF" });
        }
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}
