//! GSM modem driver (SIM800-class, AT command set).
//!
//! Speaks three fixed command sequences over a serial link:
//!
//! | Operation  | Bytes written                                                     |
//! |-----------|-------------------------------------------------------------------|
//! | SMS        | `AT+CMGF=1` · `AT+CMGS="<number>"` · `<body>` · `0x1A`           |
//! | Dial       | `AT` · `ATD<number>;`                                             |
//! | Hang up    | `ATH`                                                             |
//!
//! Every line ends in CRLF.  The modem needs time to digest each command,
//! so the driver pauses for a settle delay after each write.  Responses are
//! not read: there is no acknowledgement check and no retry.
//!
//! Generic over any [`embedded_io::Write`] link (esp-idf-hal's `UartDriver`
//! on the board, an in-memory buffer in tests) and any
//! [`embedded_hal::delay::DelayNs`] for pacing.

use embedded_hal::delay::DelayNs;
use embedded_io::{Error as _, Write};

use crate::error::ModemError;

/// Ctrl-Z: terminates the SMS body and tells the modem to send.
pub const SMS_TERMINATOR: u8 = 0x1A;

const CRLF: &[u8] = b"\r\n";

/// Pause lengths between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModemTiming {
    /// After every command except the dial preamble.
    pub settle_ms: u32,
    /// Between `AT` and `ATD` when dialling.
    pub dial_settle_ms: u32,
}

impl Default for ModemTiming {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            dial_settle_ms: 500,
        }
    }
}

pub struct GsmModem<L, D> {
    link: L,
    delay: D,
    timing: ModemTiming,
}

impl<L: Write, D: DelayNs> GsmModem<L, D> {
    pub fn new(link: L, delay: D, timing: ModemTiming) -> Self {
        Self {
            link,
            delay,
            timing,
        }
    }

    /// Send `body` as a text-mode SMS to `number`.
    pub fn send_sms(&mut self, number: &str, body: &str) -> Result<(), ModemError> {
        self.command(&[b"AT+CMGF=1"])?;
        self.command(&[b"AT+CMGS=\"", number.as_bytes(), b"\""])?;
        self.command(&[body.as_bytes()])?;
        self.write(&[SMS_TERMINATOR])?;
        self.settle(self.timing.settle_ms);
        Ok(())
    }

    /// Originate a voice call to `number`.
    pub fn dial(&mut self, number: &str) -> Result<(), ModemError> {
        self.write(b"AT")?;
        self.write(CRLF)?;
        self.settle(self.timing.dial_settle_ms);

        self.write(b"ATD")?;
        self.write(number.as_bytes())?;
        self.write(b";")?;
        self.write(CRLF)?;
        self.flush()
    }

    /// Terminate the current voice call.
    pub fn hang_up(&mut self) -> Result<(), ModemError> {
        self.command(&[b"ATH"])
    }

    /// Give the link back (tests inspect the written bytes).
    pub fn release(self) -> (L, D) {
        (self.link, self.delay)
    }

    // ── Internal ──────────────────────────────────────────────

    /// Write the parts as one CRLF-terminated line, then settle.
    fn command(&mut self, parts: &[&[u8]]) -> Result<(), ModemError> {
        for part in parts {
            self.write(part)?;
        }
        self.write(CRLF)?;
        self.flush()?;
        self.settle(self.timing.settle_ms);
        Ok(())
    }

    /// `write_all` that reports a stalled link instead of panicking.
    fn write(&mut self, mut buf: &[u8]) -> Result<(), ModemError> {
        while !buf.is_empty() {
            match self.link.write(buf) {
                Ok(0) => return Err(ModemError::WriteZero),
                Ok(n) => buf = &buf[n..],
                Err(e) => return Err(ModemError::Write(e.kind())),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ModemError> {
        self.link.flush().map_err(|e| ModemError::Write(e.kind()))
    }

    fn settle(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
