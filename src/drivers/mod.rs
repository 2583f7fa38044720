//! Actuator drivers, hardware initialisation, and the GSM modem.

pub mod gsm;
pub mod hw_init;
pub mod output;
