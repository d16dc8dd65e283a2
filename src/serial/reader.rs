//! Assembles inbound bytes into lines, one line per poll.

use super::line_buffer::LineBuffer;
use super::CommandError;
use crate::hal::SerialLink;

/// Inbound line assembler.
///
/// A partial line survives across polls until its `'\n'` arrives.
/// Leading whitespace is never stored, and whitespace that no longer fits
/// is dropped without counting as overflow, so the stored text trims to
/// the same command as the full line would.
pub struct CommandReader {
    line: LineBuffer,
    /// `line` holds a finished line already handed out.
    line_ready: bool,
}

impl CommandReader {
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            line_ready: false,
        }
    }

    /// Read bytes until a line completes or the link runs dry.
    ///
    /// Returns the completed line (trailing whitespace such as `'\r'` kept),
    /// or [`CommandError::LineTooLong`] if text was lost to the buffer
    /// limit. Bytes after the first `'\n'` stay queued in the link for the
    /// next poll.
    pub fn poll<'a, S: SerialLink + ?Sized>(
        &'a mut self,
        serial: &mut S,
    ) -> Option<Result<&'a str, CommandError>> {
        if !self.complete_line(serial) {
            return None;
        }

        if self.line.overflowed() {
            Some(Err(CommandError::LineTooLong))
        } else {
            Some(Ok(self.line.as_str()))
        }
    }

    fn complete_line<S: SerialLink + ?Sized>(&mut self, serial: &mut S) -> bool {
        // The previous poll returned a line; start a fresh one.
        if self.line_ready {
            self.line.clear();
            self.line_ready = false;
        }

        while let Some(byte) = serial.read_byte() {
            if byte == b'\n' {
                self.line_ready = true;
                return true;
            }
            let droppable =
                byte.is_ascii_whitespace() && (self.line.is_empty() || self.line.is_full());
            if !droppable {
                self.line.push(byte);
            }
        }
        false
    }

    /// Bytes of the line currently being assembled.
    pub fn partial_len(&self) -> usize {
        if self.line_ready {
            0
        } else {
            self.line.len()
        }
    }
}

impl Default for CommandReader {
    fn default() -> Self {
        Self::new()
    }
}
