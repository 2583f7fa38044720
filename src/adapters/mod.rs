//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter         | Implements           | Connects to                 |
//! |-----------------|----------------------|-----------------------------|
//! | `hardware`      | SensorPort           | ESP32 ADC1, button GPIO     |
//! |                 | AlarmActuatorPort    | LED + bell relay GPIO       |
//! | `gsm_notifier`  | NotifierPort         | GSM modem over UART         |
//! | `log_sink`      | EventSink            | Serial log output           |
//! | `time`          | (tick source)        | ESP32 system timer          |

pub mod gsm_notifier;
pub mod hardware;
pub mod log_sink;
pub mod time;
