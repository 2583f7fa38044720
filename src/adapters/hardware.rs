//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both local alarm outputs, exposing them
//! through [`SensorPort`] and [`AlarmActuatorPort`].  On non-espidf
//! targets, the underlying drivers use cfg-gated simulation stubs.

use crate::alarm::context::SensorSnapshot;
use crate::app::ports::{AlarmActuatorPort, SensorPort};
use crate::drivers::output::OnOffOutput;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all local hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    indicator: OnOffOutput,
    sounder: OnOffOutput,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub, indicator: OnOffOutput, sounder: OnOffOutput) -> Self {
        Self {
            sensor_hub,
            indicator,
            sounder,
        }
    }

    pub fn indicator_on(&self) -> bool {
        self.indicator.is_on()
    }

    pub fn sounder_on(&self) -> bool {
        self.sounder.is_on()
    }

    /// Force both outputs off (boot, before the loop starts).
    pub fn all_off(&mut self) {
        self.indicator.set(false);
        self.sounder.set(false);
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read(&mut self) -> SensorSnapshot {
        self.sensor_hub.read_all()
    }
}

// ── AlarmActuatorPort implementation ──────────────────────────

impl AlarmActuatorPort for HardwareAdapter {
    fn set_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }

    fn set_sounder(&mut self, on: bool) {
        self.sounder.set(on);
    }
}
