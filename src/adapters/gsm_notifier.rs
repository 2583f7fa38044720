//! GSM notifier adapter.
//!
//! Implements [`NotifierPort`] on top of [`GsmModem`], addressing every
//! SMS and call to the single recipient from the config.  Modem failures
//! are logged and dropped: the controller never learns about them and
//! nothing is retried.

use embedded_hal::delay::DelayNs;
use embedded_io::Write;
use log::{info, warn};

use crate::alarm::context::NotificationEvent;
use crate::app::ports::NotifierPort;
use crate::config::Recipient;
use crate::drivers::gsm::GsmModem;

pub struct GsmNotifier<L, D> {
    modem: GsmModem<L, D>,
    recipient: Recipient,
    sent: u32,
    failed: u32,
}

impl<L: Write, D: DelayNs> GsmNotifier<L, D> {
    pub fn new(modem: GsmModem<L, D>, recipient: Recipient) -> Self {
        Self {
            modem,
            recipient,
            sent: 0,
            failed: 0,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Modem operations that completed without a serial error.
    pub fn sent_count(&self) -> u32 {
        self.sent
    }

    /// Modem operations dropped because of a serial error.
    pub fn failed_count(&self) -> u32 {
        self.failed
    }

    pub fn into_modem(self) -> GsmModem<L, D> {
        self.modem
    }

    fn record(&mut self, what: &str, result: Result<(), crate::error::ModemError>) {
        match result {
            Ok(()) => {
                self.sent += 1;
                info!("---[{} -> {}]---", what, self.recipient);
            }
            Err(e) => {
                self.failed += 1;
                warn!("{} to {} dropped: {}", what, self.recipient, e);
            }
        }
    }
}

impl<L: Write, D: DelayNs> NotifierPort for GsmNotifier<L, D> {
    fn send_text(&mut self, event: &NotificationEvent) {
        let result = self.modem.send_sms(&self.recipient, event.message);
        self.record("SMS", result);
    }

    fn start_call(&mut self) {
        let result = self.modem.dial(&self.recipient);
        self.record("Call started", result);
    }

    fn end_call(&mut self) {
        let result = self.modem.hang_up();
        self.record("Call ended", result);
    }
}
