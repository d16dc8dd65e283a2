//! Record button debouncer.
//!
//! Pure logic, no hardware dependencies. Consumes the raw electrical level,
//! produces a press event on the debounced released → pressed edge.
//! Release is tracked but never reported.

use crate::config::ControllerConfig;

/// Debounce window used by the board.
pub const DEBOUNCE_MS: u32 = ControllerConfig::DEFAULT.debounce_ms;

/// Debounce bookkeeping for one active-low button.
///
/// All comparisons use wrapping elapsed time, so the millisecond clock may
/// roll over between samples.
#[derive(Clone, Copy, Debug)]
pub struct ButtonDebouncer {
    window_ms: u32,
    /// Last trusted logical state (`true` = pressed).
    stable: bool,
    /// Logical state seen on the previous sample.
    last_raw: bool,
    /// When `last_raw` last changed.
    last_change_ms: u32,
}

impl ButtonDebouncer {
    /// Released, with the timer anchored at time zero.
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            stable: false,
            last_raw: false,
            last_change_ms: 0,
        }
    }

    /// Feed one sample.
    ///
    /// `level_high` is the electrical reading; the button pulls the line low
    /// when pressed. Returns `true` exactly once per confirmed press.
    #[inline]
    pub fn sample(&mut self, level_high: bool, now_ms: u32) -> bool {
        let pressed = !level_high;

        if pressed != self.last_raw {
            self.last_raw = pressed;
            self.last_change_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_change_ms) <= self.window_ms {
            return false;
        }

        let edge = pressed != self.stable && pressed;
        self.stable = pressed;
        edge
    }

    /// Debounced state (`true` = held down).
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}

impl Default for ButtonDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}
