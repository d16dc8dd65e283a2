//! Host command parser
//!
//! Exact, case-sensitive match after trimming surrounding whitespace.

use super::CommandError;

/// Commands the host may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Host is uploading the last recording.
    Sending,
    /// Upload finished.
    SentComplete,
}

impl HostCommand {
    /// Wire text.
    pub fn as_str(self) -> &'static str {
        match self {
            HostCommand::Sending => "SENDING",
            HostCommand::SentComplete => "SENT_COMPLETE",
        }
    }
}

/// Parse one line (terminator optional).
pub fn parse_line(line: &str) -> Result<HostCommand, CommandError> {
    match line.trim() {
        "" => Err(CommandError::EmptyLine),
        "SENDING" => Ok(HostCommand::Sending),
        "SENT_COMPLETE" => Ok(HostCommand::SentComplete),
        _ => Err(CommandError::UnknownCommand),
    }
}
