//! Module: config
//!
//! Purpose: Board wiring and timing constants for the CalmWave controller.
//!
//! There are no configuration files and nothing is persisted; the device
//! boots into the same configuration every time.

use crate::logging::LogLevel;

/// GPIO numbers for each line.
///
/// The firmware entry point claims these pins from `Peripherals` by name
/// (`pins.gpio8` and so on); keep both in step when rewiring the board.
/// The host link runs on UART1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Record button (input, internal pull-up, active-low).
    pub button: i32,
    pub red: i32,
    pub yellow: i32,
    pub green: i32,
    /// UART1 TX towards the host.
    pub uart_tx: i32,
    /// UART1 RX from the host.
    pub uart_rx: i32,
}

/// Controller configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    pub pins: PinConfig,

    /// Serial link speed. Convention with the host, not part of the protocol.
    pub baud_rate: u32,

    /// The raw button level must hold for longer than this before it is trusted.
    pub debounce_ms: u32,

    /// Yellow LED toggle interval while recording.
    pub recording_blink_ms: u32,

    /// Green LED toggle interval while sending.
    pub sending_blink_ms: u32,

    /// Pause at the end of every loop iteration. Bounds polling rate only.
    pub loop_delay_ms: u32,

    /// Settle time after the serial port opens, before the banner.
    pub startup_delay_ms: u32,

    /// Most verbose diagnostic level forwarded to the host.
    pub log_level: LogLevel,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        pins: PinConfig {
            button: 8,
            red: 7,
            yellow: 5,
            green: 6,
            uart_tx: 17,
            uart_rx: 18,
        },
        baud_rate: 9600,
        debounce_ms: 50,
        recording_blink_ms: 500,
        sending_blink_ms: 150,
        loop_delay_ms: 5,
        startup_delay_ms: 100,
        log_level: LogLevel::Info,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
