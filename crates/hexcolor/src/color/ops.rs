//! Channel-wise `+` and `-` between colors.
//!
//! Both operators work on R, G and B, plus A when either operand stores an
//! alpha byte (the other then counts as `FF`). The result has 8 digits in
//! that case and 6 otherwise.

use std::fmt::Write;
use std::ops::{Add, Sub};

use super::HexColor;

/// Rounded mean of two channels, capped at 255. Ties round to even.
fn mean(a: u8, b: u8) -> u8 {
    let avg = (f64::from(a) + f64::from(b)) / 2.0;
    avg.round_ties_even().min(255.0) as u8
}

/// Difference of two channels, floored at 0.
fn difference(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

fn combine(lhs: &HexColor, rhs: &HexColor, op: fn(u8, u8) -> u8) -> HexColor {
    let channels = if lhs.has_alpha() || rhs.has_alpha() { 4 } else { 3 };
    let left = lhs.rgba_expanded();
    let right = rhs.rgba_expanded();

    let mut value = String::with_capacity(1 + channels * 2);
    value.push('#');
    for (a, b) in left.iter().zip(right.iter()).take(channels) {
        let _ = write!(value, "{:02X}", op(*a, *b));
    }

    tracing::trace!(%lhs, %rhs, result = %value, "combined colors");
    HexColor { value }
}

impl Add for &HexColor {
    type Output = HexColor;

    fn add(self, rhs: &HexColor) -> HexColor {
        combine(self, rhs, mean)
    }
}

impl Sub for &HexColor {
    type Output = HexColor;

    fn sub(self, rhs: &HexColor) -> HexColor {
        combine(self, rhs, difference)
    }
}

impl Add for HexColor {
    type Output = HexColor;

    fn add(self, rhs: HexColor) -> HexColor {
        &self + &rhs
    }
}

impl Sub for HexColor {
    type Output = HexColor;

    fn sub(self, rhs: HexColor) -> HexColor {
        &self - &rhs
    }
}
