// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical-unit conversion and clock-style formatting.

use crate::units::Unit;

/// Seconds in one minute, for the clock formatter.
const CLOCK_MINUTE: u64 = 60;

/// Seconds in one hour, for the clock formatter.
const CLOCK_HOUR: u64 = 3_600;

/// Convert `value` from one unit to another within the same category.
///
/// Routes through the category's canonical unit:
/// `value * factor(from) / factor(to)`.  Pure and deterministic; the closed
/// unit enums guarantee both units are valid, so there is no error path.
///
/// ```rust
/// use pacer::{convert, DistanceUnit, TimeUnit};
///
/// let km = convert(5.0, DistanceUnit::Mile, DistanceUnit::Kilometer);
/// assert!((km - 8.0467).abs() < 1e-9);
///
/// let s = convert(25.0, TimeUnit::Minute, TimeUnit::Second);
/// assert_eq!(s, 1_500.0);
/// ```
#[inline]
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    to.from_canonical(from.to_canonical(value))
}

/// Format a duration in seconds as a `"HH:MM:SS"` clock string.
///
/// The value is rounded to the nearest whole second before formatting.
/// Minutes and seconds are two-digit zero-padded; hours are zero-padded to
/// at least two digits and grow beyond two digits for durations of 24 h or
/// more (no day rollover).  Input is assumed non-negative.
///
/// ```rust
/// use pacer::seconds_to_clock;
///
/// assert_eq!(seconds_to_clock(300.0), "00:05:00");
/// assert_eq!(seconds_to_clock(90_061.0), "25:01:01");
/// ```
pub fn seconds_to_clock(total_seconds: f64) -> String {
    let total = total_seconds.round() as u64;
    let hours = total / CLOCK_HOUR;
    let minutes = (total % CLOCK_HOUR) / CLOCK_MINUTE;
    let seconds = total % CLOCK_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
