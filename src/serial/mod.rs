//! Host command interface over the serial link.
//!
//! Polled once per tick from the control loop - no dedicated task.
//! Zero heap allocation - one fixed line buffer.

pub mod error;
pub mod line_buffer;
pub mod parser;
pub mod reader;

pub use error::CommandError;
pub use line_buffer::LineBuffer;
pub use parser::{parse_line, HostCommand};
pub use reader::CommandReader;
