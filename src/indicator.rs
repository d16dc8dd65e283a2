//! Status LEDs.
//!
//! Re-evaluated every tick, first match wins:
//!
//! | State     | Output                         |
//! |-----------|--------------------------------|
//! | Sending   | green pulse every 150 ms       |
//! | Recording | yellow pulse every 500 ms      |
//! | Idle      | red solid, yellow/green off    |
//!
//! A blinking LED is forced off on every tick and only driven on the tick
//! where its interval elapses and the toggle flag lands on `on`. The LED is
//! therefore lit for a single loop iteration per two intervals, a short
//! pulse rather than a square wave. This matches the deployed boards.

use crate::config::ControllerConfig;
use crate::hal::{DigitalIo, Pin};
use crate::session::SessionState;

/// Toggle bookkeeping shared by whichever LED is blinking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlinkState {
    pub last_toggle_ms: u32,
    pub led_on: bool,
}

/// Maps session state to LED output.
#[derive(Clone, Copy, Debug)]
pub struct StatusIndicator {
    recording_interval_ms: u32,
    sending_interval_ms: u32,
    blink: BlinkState,
}

impl StatusIndicator {
    pub const fn new(recording_interval_ms: u32, sending_interval_ms: u32) -> Self {
        Self {
            recording_interval_ms,
            sending_interval_ms,
            blink: BlinkState {
                last_toggle_ms: 0,
                led_on: false,
            },
        }
    }

    /// Current blink bookkeeping.
    pub fn blink(&self) -> BlinkState {
        self.blink
    }

    /// Drive the LEDs for `state`.
    pub fn update<IO: DigitalIo>(&mut self, io: &mut IO, state: SessionState) {
        match state {
            SessionState::Sending => self.pulse(io, Pin::Green, self.sending_interval_ms),
            SessionState::Recording => self.pulse(io, Pin::Yellow, self.recording_interval_ms),
            SessionState::Idle => show_solid(io, Pin::Red),
        }
    }

    fn pulse<IO: DigitalIo>(&mut self, io: &mut IO, pin: Pin, interval_ms: u32) {
        all_off(io);

        let now = io.now_millis();
        if now.wrapping_sub(self.blink.last_toggle_ms) >= interval_ms {
            self.blink.last_toggle_ms = now;
            self.blink.led_on = !self.blink.led_on;
            io.write(pin, self.blink.led_on);
        }
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        let config = ControllerConfig::DEFAULT;
        Self::new(config.recording_blink_ms, config.sending_blink_ms)
    }
}

/// Drive every LED low.
pub fn all_off<IO: DigitalIo>(io: &mut IO) {
    for led in Pin::LEDS {
        io.write(led, false);
    }
}

/// All LEDs off, then `pin` on.
pub fn show_solid<IO: DigitalIo>(io: &mut IO, pin: Pin) {
    all_off(io);
    io.write(pin, true);
}
