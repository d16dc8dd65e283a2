//! # CalmWave controller
//!
//! Record button and status LEDs for the CalmWave capture host.
//!
//! ## Architecture
//!
//! One cooperative loop, no tasks, no locks. Every tick:
//! - [`ButtonDebouncer`] turns the raw button level into press events
//! - [`Session`] applies presses and host commands
//! - [`serial`] assembles and parses host lines
//! - [`StatusIndicator`] drives the LEDs from the session state
//!
//! Hardware is reached only through [`hal::DigitalIo`] and
//! [`hal::SerialLink`], so the whole loop runs on the host under test.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod debounce;
pub mod hal;
pub mod indicator;
pub mod logging;
pub mod serial;
pub mod session;
pub mod uart_logger;

pub use config::ControllerConfig;
pub use controller::DeviceController;
pub use debounce::ButtonDebouncer;
pub use indicator::{BlinkState, StatusIndicator};
pub use logging::{LogLevel, LogStream};
pub use session::{Announcement, Session, SessionState};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");
