#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn parse_px_plain() {
    assert_eq!(parse_px("640px"), 640.0);
}

#[test]
fn parse_px_fractional_and_padded() {
    assert_eq!(parse_px(" 12.5px "), 12.5);
}

#[test]
fn parse_px_unitless() {
    assert_eq!(parse_px("300"), 300.0);
}

#[test]
fn parse_px_garbage_is_zero() {
    assert_eq!(parse_px("auto"), 0.0);
    assert_eq!(parse_px(""), 0.0);
}
