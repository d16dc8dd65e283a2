//! Status LED tests

use calmwave_controller::hal::sim::SimIo;
use calmwave_controller::hal::Pin;
use calmwave_controller::indicator::StatusIndicator;
use calmwave_controller::session::SessionState;

fn make_indicator() -> StatusIndicator {
    StatusIndicator::new(500, 150)
}

/// Writes that drove `pin` high.
fn on_writes(io: &SimIo, pin: Pin) -> usize {
    io.writes().iter().filter(|&&(_, p, high)| p == pin && high).count()
}

#[test]
fn test_idle_red_solid() {
    let mut io = SimIo::starting_at(10);
    let mut ind = make_indicator();

    for _ in 0..50 {
        ind.update(&mut io, SessionState::Idle);
        assert_eq!(io.leds(), (true, false, false));
        io.advance(5);
    }
}

#[test]
fn test_sending_toggles_once_per_interval() {
    let mut io = SimIo::starting_at(1000);
    let mut ind = make_indicator();

    ind.update(&mut io, SessionState::Sending);
    let before = ind.blink();

    io.advance(150);
    ind.update(&mut io, SessionState::Sending);
    let after = ind.blink();

    assert_ne!(before.led_on, after.led_on);
    assert_eq!(after.last_toggle_ms, 1150);
}

#[test]
fn test_no_toggle_before_interval() {
    let mut io = SimIo::starting_at(1000);
    let mut ind = make_indicator();

    ind.update(&mut io, SessionState::Sending);
    let before = ind.blink();

    for _ in 0..29 {
        io.advance(5);
        ind.update(&mut io, SessionState::Sending);
    }
    // 145 ms later, still the same phase
    assert_eq!(ind.blink(), before);
}

#[test]
fn test_recording_pulses_yellow_only() {
    let mut io = SimIo::starting_at(1000);
    let mut ind = make_indicator();

    // 2 s of 5 ms ticks: toggles at 0, 500, 1000, 1500 ms, two of them on
    for _ in 0..400 {
        ind.update(&mut io, SessionState::Recording);
        assert!(!io.level(Pin::Red));
        assert!(!io.level(Pin::Green));
        io.advance(5);
    }

    assert_eq!(on_writes(&io, Pin::Yellow), 2);
    assert_eq!(on_writes(&io, Pin::Green), 0);
    assert_eq!(on_writes(&io, Pin::Red), 0);
}

#[test]
fn test_pulse_is_a_single_tick() {
    let mut io = SimIo::starting_at(1000);
    let mut ind = make_indicator();

    let mut lit_ticks = 0;
    for _ in 0..60 {
        ind.update(&mut io, SessionState::Sending);
        if io.level(Pin::Green) {
            lit_ticks += 1;
        }
        io.advance(5);
    }

    // 300 ms: toggles at 0, 150 ms; only the first lands on "on"
    assert_eq!(lit_ticks, 1);
}

#[test]
fn test_leaving_blink_restores_red() {
    let mut io = SimIo::starting_at(1000);
    let mut ind = make_indicator();

    ind.update(&mut io, SessionState::Sending);
    assert!(io.level(Pin::Green));

    io.advance(5);
    ind.update(&mut io, SessionState::Idle);
    assert_eq!(io.leds(), (true, false, false));
}

#[test]
fn test_blink_state_carries_across_modes() {
    let mut io = SimIo::starting_at(1000);
    let mut ind = make_indicator();

    ind.update(&mut io, SessionState::Recording);
    let phase = ind.blink();

    io.advance(5);
    ind.update(&mut io, SessionState::Idle);
    assert_eq!(ind.blink(), phase);

    // Switching to sending reuses the same toggle timestamp
    io.advance(100);
    ind.update(&mut io, SessionState::Sending);
    assert_eq!(ind.blink(), phase);
    assert_eq!(io.leds(), (false, false, false));
}
