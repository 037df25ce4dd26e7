//! Serial TX line adaptor.
//!
//! Mirrors the transmitter's line level onto any `embedded-hal` output pin.
//! The pin is only written when the level actually changes, so a 217-tick
//! bit costs one GPIO write instead of 217.

use embedded_hal::digital::OutputPin;

pub struct TxPin<P> {
    pin: P,
    level: Option<bool>,
}

impl<P: OutputPin> TxPin<P> {
    /// Wrap `pin`; the first `drive()` always writes.
    pub fn new(pin: P) -> Self {
        Self { pin, level: None }
    }

    /// Drive the line to `high`.
    pub fn drive(&mut self, high: bool) -> Result<(), P::Error> {
        if self.level == Some(high) {
            return Ok(());
        }
        if high {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.level = Some(high);
        Ok(())
    }

    /// Last level successfully written.
    pub fn level(&self) -> Option<bool> {
        self.level
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
