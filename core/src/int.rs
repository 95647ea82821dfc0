//! Integer helpers used for coordinate arithmetic.
//!
//! Coordinates are plain `i64` values. Stepping uses wrapping arithmetic so
//! that extreme inputs never abort the process; the planet wraps the result
//! back onto the grid afterwards.

/// Zero.
pub const ZERO: i64 = 0;
/// One.
pub const ONE: i64 = 1;
/// Four.
pub const FOUR: i64 = 4;
/// Five.
pub const FIVE: i64 = 5;

/// Returns `value + 1`.
#[must_use]
pub const fn increment(value: i64) -> i64 {
    value.wrapping_add(ONE)
}

/// Returns `value - 1`.
#[must_use]
pub const fn decrement(value: i64) -> i64 {
    value.wrapping_sub(ONE)
}
