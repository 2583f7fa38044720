//! GSM notifier tests: AT traffic on an in-memory serial link.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_io::{ErrorKind, ErrorType, Write};

use crate::mock_hw::{LogSink, MockHardware};

use firealarm::adapters::gsm_notifier::GsmNotifier;
use firealarm::alarm::context::{AlarmReason, NotificationEvent};
use firealarm::app::ports::NotifierPort;
use firealarm::app::service::AppService;
use firealarm::config::{Recipient, SystemConfig};
use firealarm::drivers::gsm::{GsmModem, ModemTiming};

// ── Test doubles ──────────────────────────────────────────────

#[derive(Default)]
struct Wire(Vec<u8>);

impl ErrorType for Wire {
    type Error = Infallible;
}

impl Write for Wire {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// A UART whose driver always reports an error.
struct Broken;

impl ErrorType for Broken {
    type Error = ErrorKind;
}

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, ErrorKind> {
        Err(ErrorKind::BrokenPipe)
    }
    fn flush(&mut self) -> Result<(), ErrorKind> {
        Err(ErrorKind::BrokenPipe)
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn recipient() -> Recipient {
    let mut r = Recipient::new();
    r.push_str("+15550100").unwrap();
    r
}

fn notifier() -> GsmNotifier<Wire, NoDelay> {
    GsmNotifier::new(
        GsmModem::new(Wire::default(), NoDelay, ModemTiming::default()),
        recipient(),
    )
}

fn wire_text(n: GsmNotifier<Wire, NoDelay>) -> String {
    let (wire, _) = n.into_modem().release();
    String::from_utf8(wire.0).unwrap()
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn text_is_addressed_to_recipient() {
    let mut n = notifier();
    n.send_text(&NotificationEvent::new(AlarmReason::SmokeThreshold));
    assert_eq!(n.sent_count(), 1);
    assert_eq!(
        wire_text(n),
        "AT+CMGF=1\r\nAT+CMGS=\"+15550100\"\r\nWARNING!\nSMOKE THRESHOLD REACHED\r\n\x1a"
    );
}

#[test]
fn call_then_hang_up() {
    let mut n = notifier();
    n.start_call();
    n.end_call();
    assert_eq!(n.recipient(), "+15550100");
    assert_eq!(wire_text(n), "AT\r\nATD+15550100;\r\nATH\r\n");
}

#[test]
fn link_errors_are_counted_and_dropped() {
    let mut n = GsmNotifier::new(
        GsmModem::new(Broken, NoDelay, ModemTiming::default()),
        recipient(),
    );
    n.send_text(&NotificationEvent::new(AlarmReason::ButtonPressed));
    n.start_call();
    n.end_call();
    assert_eq!(n.sent_count(), 0);
    assert_eq!(n.failed_count(), 3);
}

#[test]
fn episode_traffic_is_sms_then_dial_then_hang_up() {
    let config = SystemConfig::default();
    let mut app = AppService::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    let mut n = notifier();

    hw.press_button(true);
    app.tick(0, &mut hw, &mut n, &mut sink);
    hw.press_button(false);
    app.tick(50, &mut hw, &mut n, &mut sink);
    app.tick(3051, &mut hw, &mut n, &mut sink);
    assert!(!app.state().is_alarming);

    let text = wire_text(n);
    let sms = text.find("AT+CMGS").unwrap();
    let dial = text.find("ATD").unwrap();
    let hang_up = text.find("ATH").unwrap();
    assert!(sms < dial && dial < hang_up, "unexpected order: {text:?}");
    assert!(text.contains("ALARM BUTTON PRESSED"));
}
