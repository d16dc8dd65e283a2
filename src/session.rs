//! Recording session state machine.
//!
//! Single source of truth for the device mode. Recording and sending are
//! mutually exclusive by construction: there is no state that is both.
//!
//! ```text
//!           press                SENDING
//!   Idle ───────────▶ Recording ───────────▶ Sending
//!    ▲  ◀───────────                            │
//!    │      press                               │
//!    └──────────────────────────────────────────┘
//!                   SENT_COMPLETE
//! ```
//!
//! `SENDING` is accepted from any state. `SENT_COMPLETE` only clears the
//! sending flag, so it leaves `Idle` and `Recording` untouched. Presses
//! while sending are ignored.

/// Device mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Recording,
    Sending,
}

impl SessionState {
    #[inline]
    pub fn is_recording(self) -> bool {
        self == SessionState::Recording
    }

    #[inline]
    pub fn is_sending(self) -> bool {
        self == SessionState::Sending
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        self == SessionState::Idle
    }
}

/// Line announced to the host after a button transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Announcement {
    Start,
    Stop,
}

impl Announcement {
    /// Wire text.
    pub fn as_str(self) -> &'static str {
        match self {
            Announcement::Start => "START",
            Announcement::Stop => "STOP",
        }
    }
}

/// Session state plus its transition rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub const fn new() -> Self {
        Self { state: SessionState::Idle }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Apply a debounced button press.
    ///
    /// Returns the line to announce, or `None` if the press changed nothing
    /// (a send is in progress).
    pub fn press(&mut self) -> Option<Announcement> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Recording;
                Some(Announcement::Start)
            }
            SessionState::Recording => {
                self.state = SessionState::Idle;
                Some(Announcement::Stop)
            }
            SessionState::Sending => None,
        }
    }

    /// Host started uploading the recording.
    pub fn sending(&mut self) {
        self.state = SessionState::Sending;
    }

    /// Host finished uploading. Clears sending only.
    pub fn sent_complete(&mut self) {
        if self.state == SessionState::Sending {
            self.state = SessionState::Idle;
        }
    }
}
