//! Session state machine tests

use calmwave_controller::session::{Announcement, Session, SessionState};

#[test]
fn test_initial_state_is_idle() {
    let s = Session::new();
    assert_eq!(s.state(), SessionState::Idle);
    assert!(!s.state().is_recording());
    assert!(!s.state().is_sending());
}

#[test]
fn test_idle_press_starts_recording() {
    let mut s = Session::new();

    assert_eq!(s.press(), Some(Announcement::Start));
    assert!(s.state().is_recording());
    assert!(!s.state().is_sending());
}

#[test]
fn test_recording_press_stops() {
    let mut s = Session::new();
    s.press();

    assert_eq!(s.press(), Some(Announcement::Stop));
    assert!(s.state().is_idle());
}

#[test]
fn test_sending_from_recording() {
    let mut s = Session::new();
    s.press();
    s.sending();

    assert!(!s.state().is_recording());
    assert!(s.state().is_sending());
}

#[test]
fn test_sending_from_idle() {
    let mut s = Session::new();
    s.sending();
    assert_eq!(s.state(), SessionState::Sending);
}

#[test]
fn test_sent_complete_returns_to_idle() {
    let mut s = Session::new();
    s.sending();
    s.sent_complete();
    assert_eq!(s.state(), SessionState::Idle);
}

#[test]
fn test_sent_complete_is_idempotent() {
    let mut s = Session::new();

    for _ in 0..5 {
        s.sent_complete();
        assert!(!s.state().is_sending());
        assert_eq!(s.state(), SessionState::Idle);
    }
}

#[test]
fn test_press_while_sending_does_nothing() {
    let mut s = Session::new();
    s.sending();

    for _ in 0..3 {
        assert_eq!(s.press(), None);
        assert_eq!(s.state(), SessionState::Sending);
    }
}

#[test]
fn test_mutual_exclusion_over_all_event_sequences() {
    #[derive(Clone, Copy)]
    enum Event {
        Press,
        Sending,
        SentComplete,
    }
    const EVENTS: [Event; 3] = [Event::Press, Event::Sending, Event::SentComplete];

    // Every sequence of length 6: 3^6 = 729 runs
    for mut code in 0..729u32 {
        let mut s = Session::new();
        for _ in 0..6 {
            match EVENTS[(code % 3) as usize] {
                Event::Press => {
                    s.press();
                }
                Event::Sending => s.sending(),
                Event::SentComplete => s.sent_complete(),
            }
            code /= 3;

            let st = s.state();
            assert!(!(st.is_recording() && st.is_sending()));
        }
    }
}
