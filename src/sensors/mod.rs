//! Sensor subsystem: individual inputs and the aggregating [`SensorHub`].
//!
//! The hub owns the flame sensor, smoke sensor, and alarm button and
//! produces a [`SensorSnapshot`] each tick.

pub mod analog;
pub mod button;

use crate::alarm::context::SensorSnapshot;
use analog::AnalogSensor;
use button::AlarmButton;

/// Aggregates all alarm inputs and produces a unified snapshot.
pub struct SensorHub {
    pub flame: AnalogSensor,
    pub smoke: AnalogSensor,
    pub button: AlarmButton,
}

impl SensorHub {
    pub fn new(flame: AnalogSensor, smoke: AnalogSensor, button: AlarmButton) -> Self {
        Self {
            flame,
            smoke,
            button,
        }
    }

    /// Sample every input.  Never fails: a bad conversion shows up as a
    /// value, which the controller compares like any other.
    pub fn read_all(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            flame_value: self.flame.read(),
            smoke_value: self.smoke.read(),
            button_pressed: self.button.is_pressed(),
        }
    }
}
