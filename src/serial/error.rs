//! Host command error types

/// Reason an inbound line was not a command.
///
/// Never reported to the host; at most logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// E01: Line is not a recognized command
    UnknownCommand,
    /// E02: Line was blank after trimming
    EmptyLine,
    /// E03: Line did not fit the line buffer
    LineTooLong,
}

impl CommandError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::EmptyLine => "E02",
            Self::LineTooLong => "E03",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown command",
            Self::EmptyLine => "empty line",
            Self::LineTooLong => "line too long",
        }
    }
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
