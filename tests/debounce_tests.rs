//! Button debounce tests

use calmwave_controller::debounce::ButtonDebouncer;

const RELEASED: bool = true; // pulled up
const PRESSED: bool = false;

/// Feed `level` every 5 ms over `[from, to)`, counting press events.
fn hold(b: &mut ButtonDebouncer, level: bool, from: u32, to: u32) -> usize {
    let mut events = 0;
    let mut t = from;
    while t != to {
        if b.sample(level, t) {
            events += 1;
        }
        t = t.wrapping_add(5);
    }
    events
}

#[test]
fn test_bounce_shorter_than_window_is_ignored() {
    let mut b = ButtonDebouncer::new(50);

    assert_eq!(hold(&mut b, RELEASED, 0, 200), 0);
    // Contact chatter: 30 ms low, then released again
    assert_eq!(hold(&mut b, PRESSED, 200, 230), 0);
    assert_eq!(hold(&mut b, RELEASED, 230, 500), 0);
    assert!(!b.is_pressed());
}

#[test]
fn test_alternating_chatter_never_fires() {
    let mut b = ButtonDebouncer::new(50);

    for i in 0..100u32 {
        let level = if i % 2 == 0 { PRESSED } else { RELEASED };
        assert!(!b.sample(level, 100 + i * 10));
    }
}

#[test]
fn test_sustained_press_fires_once() {
    let mut b = ButtonDebouncer::new(50);

    assert_eq!(hold(&mut b, RELEASED, 0, 100), 0);
    assert_eq!(hold(&mut b, PRESSED, 100, 2000), 1);
    assert!(b.is_pressed());
}

#[test]
fn test_second_press_needs_release_first() {
    let mut b = ButtonDebouncer::new(50);

    assert_eq!(hold(&mut b, PRESSED, 0, 200), 1);
    assert_eq!(hold(&mut b, RELEASED, 200, 400), 0);
    assert_eq!(hold(&mut b, PRESSED, 400, 600), 1);
}

#[test]
fn test_short_release_does_not_retrigger() {
    let mut b = ButtonDebouncer::new(50);

    assert_eq!(hold(&mut b, PRESSED, 0, 200), 1);
    // Release shorter than the window
    assert_eq!(hold(&mut b, RELEASED, 200, 240), 0);
    assert_eq!(hold(&mut b, PRESSED, 240, 600), 0);
}

#[test]
fn test_press_across_clock_wrap() {
    let start = u32::MAX - 19; // 20 ms before rollover, multiple of 5 away from 0
    let mut b = ButtonDebouncer::new(50);

    assert_eq!(hold(&mut b, RELEASED, start.wrapping_sub(100), start), 0);
    assert_eq!(hold(&mut b, PRESSED, start, 100), 1);
}
