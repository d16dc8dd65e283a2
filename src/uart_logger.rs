//! Diagnostic output on the host serial link.
//!
//! Diagnostics share the UART with the `START`/`STOP` protocol. The host
//! only acts on exact protocol lines, so everything written here is
//! informational.
//!
//! Format: `[timestamp_ms] LEVEL: message`

use core::fmt::Write;

use crate::hal::SerialLink;
use crate::logging::{LogEntry, LogLevel, LogStream};

/// Write one entry as a CRLF-terminated line.
pub fn write_log_entry(out: &mut dyn Write, entry: &LogEntry) -> core::fmt::Result {
    write!(
        out,
        "[{:10}] {}: {}\r\n",
        entry.timestamp_ms,
        entry.level.as_str(),
        entry.message()
    )
}

/// Flush every queued diagnostic to `serial`.
///
/// Reports and resets the dropped-message counter when it is non-zero.
/// Returns the number of lines written.
pub fn drain_to<S: SerialLink, const N: usize>(log: &LogStream<N>, serial: &mut S, now_ms: u32) -> usize {
    let mut written = 0;

    while let Some(entry) = log.drain() {
        let _ = write_log_entry(&mut *serial, &entry);
        written += 1;
    }

    let dropped = log.dropped();
    if dropped > 0 {
        let _ = write!(
            serial,
            "[{:10}] {}: Diagnosticos descartados: {}\r\n",
            now_ms,
            LogLevel::Warn.as_str(),
            dropped
        );
        log.reset_dropped();
        written += 1;
    }

    written
}
