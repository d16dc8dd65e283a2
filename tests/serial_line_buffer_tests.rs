//! Line buffer tests

use calmwave_controller::serial::line_buffer::{LineBuffer, LINE_SIZE};

#[test]
fn test_line_buffer_push() {
    let mut buf = LineBuffer::new();

    for &b in b"SENDING" {
        buf.push(b);
    }

    assert_eq!(buf.as_str(), "SENDING");
    assert_eq!(buf.len(), 7);
}

#[test]
fn test_line_buffer_clear() {
    let mut buf = LineBuffer::new();

    buf.push(b'S');
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_line_buffer_overflow() {
    let mut buf = LineBuffer::new();

    // Push 70 characters (buffer is 64)
    for i in 0..70u8 {
        buf.push(b'a' + (i % 26));
    }

    // Should be truncated to 64
    assert_eq!(buf.len(), LINE_SIZE);
    assert!(buf.is_full());
    assert!(buf.overflowed());
}

#[test]
fn test_line_buffer_exact_fit_is_not_overflow() {
    let mut buf = LineBuffer::new();

    for _ in 0..LINE_SIZE {
        buf.push(b'a');
    }

    assert!(buf.is_full());
    assert!(!buf.overflowed());
}

#[test]
fn test_line_buffer_clear_resets_overflow() {
    let mut buf = LineBuffer::new();

    for _ in 0..LINE_SIZE + 1 {
        buf.push(b'a');
    }
    assert!(buf.overflowed());

    buf.clear();
    assert!(!buf.overflowed());
}

#[test]
fn test_line_buffer_invalid_utf8_reads_empty() {
    let mut buf = LineBuffer::new();

    buf.push(0xFF);
    buf.push(b'A');

    assert_eq!(buf.as_str(), "");
    assert!(!buf.is_empty());
}
