//! Analog alarm sensor (flame or smoke) on one ADC1 channel.
//!
//! Readings are passed through raw: no calibration, no filtering.  Both
//! sensors pull their output low as flame or smoke increases, so the
//! controller treats *lower* readings as worse.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the channel via the oneshot API (initialised by hw_init).
//! On host/test: reads from a per-channel static `AtomicI32` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicI32, Ordering};

/// ADC1 has ten channels on the ESP32-S3.
#[cfg(not(target_os = "espidf"))]
const ADC1_CHANNELS: usize = 10;

/// Idle reading for simulated channels: well above any alarm threshold.
pub const SIM_IDLE_READING: i32 = 4095;

#[cfg(not(target_os = "espidf"))]
static SIM_ADC: [AtomicI32; ADC1_CHANNELS] =
    [const { AtomicI32::new(SIM_IDLE_READING) }; ADC1_CHANNELS];

/// Inject a reading for `channel` (host builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u32, value: i32) {
    if let Some(slot) = SIM_ADC.get(channel as usize) {
        slot.store(value, Ordering::Relaxed);
    }
}

pub struct AnalogSensor {
    channel: u32,
    last: i32,
}

impl AnalogSensor {
    pub fn new(channel: u32) -> Self {
        Self {
            channel,
            last: SIM_IDLE_READING,
        }
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Most recent reading (without sampling again).
    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn read(&mut self) -> i32 {
        self.last = self.read_adc();
        self.last
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> i32 {
        i32::from(crate::drivers::hw_init::adc1_read(self.channel))
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> i32 {
        SIM_ADC
            .get(self.channel as usize)
            .map_or(SIM_IDLE_READING, |slot| slot.load(Ordering::Relaxed))
    }
}
