//! Hardware Abstraction Layer for the CalmWave controller.
//!
//! Thin capabilities the control loop is written against.
//! Business logic stays in core modules, HAL is just I/O.

#[cfg(target_os = "espidf")]
pub mod esp;
pub mod sim;

/// Physical lines, named by their role on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Momentary record button, active-low with pull-up.
    Button,
    /// Idle indicator.
    Red,
    /// Recording indicator.
    Yellow,
    /// Sending indicator.
    Green,
}

impl Pin {
    /// The three indicator outputs, in the order they are reset.
    pub const LEDS: [Pin; 3] = [Pin::Red, Pin::Yellow, Pin::Green];
}

/// Digital pin access plus the monotonic millisecond clock.
///
/// Reads and writes are assumed never to fail.
pub trait DigitalIo {
    /// Electrical level of `pin` (`true` = high).
    fn read(&mut self, pin: Pin) -> bool;

    /// Drive `pin` high (`true`) or low.
    fn write(&mut self, pin: Pin, high: bool);

    /// Milliseconds since boot. Wraps at `u32::MAX`.
    fn now_millis(&self) -> u32;
}

/// Newline-delimited text link to the host.
///
/// Output goes through [`core::fmt::Write`]; input is polled one byte at a
/// time and never blocks.
pub trait SerialLink: core::fmt::Write {
    /// Next inbound byte, if one is already buffered.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write `line` followed by CRLF.
    fn write_line(&mut self, line: &str) {
        let _ = core::fmt::Write::write_str(self, line);
        let _ = core::fmt::Write::write_str(self, "\r\n");
    }
}
