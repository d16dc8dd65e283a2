//! Simulated board for host testing.
//!
//! `SimIo` keeps pin levels in memory and a clock that only moves when told
//! to. `SimSerial` queues host bytes and captures everything the controller
//! writes.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{DigitalIo, Pin, SerialLink};

/// In-memory pins and clock.
#[derive(Debug, Clone)]
pub struct SimIo {
    /// Electrical level per pin, indexed by [`slot`].
    levels: [bool; 4],
    now_ms: u32,
    writes: Vec<(u32, Pin, bool)>,
}

fn slot(pin: Pin) -> usize {
    match pin {
        Pin::Button => 0,
        Pin::Red => 1,
        Pin::Yellow => 2,
        Pin::Green => 3,
    }
}

impl SimIo {
    /// Button released (pulled high), all LEDs off, clock at zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Same as [`new`](Self::new) with the clock preset, e.g. near wraparound.
    pub fn starting_at(now_ms: u32) -> Self {
        Self {
            levels: [true, false, false, false],
            now_ms,
            writes: Vec::new(),
        }
    }

    /// Hold the button down (line pulled low).
    pub fn press(&mut self) {
        self.levels[slot(Pin::Button)] = false;
    }

    /// Let go of the button (line back high).
    pub fn release(&mut self) {
        self.levels[slot(Pin::Button)] = true;
    }

    /// Move the clock forward, wrapping like the hardware counter.
    pub fn advance(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }

    /// Current level of any pin.
    pub fn level(&self, pin: Pin) -> bool {
        self.levels[slot(pin)]
    }

    /// `(red, yellow, green)` levels.
    pub fn leds(&self) -> (bool, bool, bool) {
        (self.level(Pin::Red), self.level(Pin::Yellow), self.level(Pin::Green))
    }

    /// Every `(timestamp, pin, level)` write since creation or the last clear.
    pub fn writes(&self) -> &[(u32, Pin, bool)] {
        &self.writes
    }

    /// Forget recorded writes.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl Default for SimIo {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalIo for SimIo {
    fn read(&mut self, pin: Pin) -> bool {
        self.levels[slot(pin)]
    }

    fn write(&mut self, pin: Pin, high: bool) {
        self.levels[slot(pin)] = high;
        self.writes.push((self.now_ms, pin, high));
    }

    fn now_millis(&self) -> u32 {
        self.now_ms
    }
}

/// Host side of the serial link.
#[derive(Debug, Clone, Default)]
pub struct SimSerial {
    inbound: VecDeque<u8>,
    outbound: String,
}

impl SimSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if the host had sent them.
    pub fn send(&mut self, text: &str) {
        self.inbound.extend(text.bytes());
    }

    /// Bytes not yet read by the controller.
    pub fn pending_input(&self) -> usize {
        self.inbound.len()
    }

    /// Raw captured output.
    pub fn output(&self) -> &str {
        &self.outbound
    }

    /// Complete output lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.outbound
            .split_terminator('\n')
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect()
    }

    /// Return complete output lines and clear the capture.
    pub fn take_lines(&mut self) -> Vec<String> {
        let lines = self.lines();
        self.outbound.clear();
        lines
    }
}

impl core::fmt::Write for SimSerial {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.outbound.push_str(s);
        Ok(())
    }
}

impl SerialLink for SimSerial {
    fn read_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_wraps() {
        let mut io = SimIo::starting_at(u32::MAX - 1);
        io.advance(3);
        assert_eq!(io.now_millis(), 1);
    }

    #[test]
    fn test_button_is_active_low() {
        let mut io = SimIo::new();
        assert!(io.read(Pin::Button));
        io.press();
        assert!(!io.read(Pin::Button));
    }

    #[test]
    fn test_serial_lines() {
        let mut serial = SimSerial::new();
        serial.write_line("START");
        serial.write_line("STOP");
        assert_eq!(serial.take_lines(), vec!["START", "STOP"]);
        assert!(serial.output().is_empty());
    }
}
