//! Line buffer for inbound serial text

/// Maximum line length
pub const LINE_SIZE: usize = 64;

/// Fixed-size line accumulator.
///
/// Bytes past `LINE_SIZE` are discarded and the buffer remembers that it
/// overflowed until the next `clear`.
pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
    overflowed: bool,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
            overflowed: false,
        }
    }

    /// Push a byte
    pub fn push(&mut self, c: u8) {
        if self.len < LINE_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    /// Get buffer as string slice (empty if not valid UTF-8)
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if further bytes would be dropped
    pub fn is_full(&self) -> bool {
        self.len == LINE_SIZE
    }

    /// Check if a byte was dropped since the last clear
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
