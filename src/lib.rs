// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pace Module
//!
//! This crate converts a (distance, time) pair into a pace — time elapsed
//! per unit of distance — supporting interchangeable units for both
//! categories and rendering pace as a clock-style string.  It targets
//! embedding in fitness and athletic calculation tools.
//!
//! # Core types
//!
//! - [`Pace`] — holds distance, time, the active units, and the derived
//!   pace; keeps `pace == time / distance` across unit changes.
//! - [`DistanceUnit`] / [`TimeUnit`] — closed unit enumerations.
//! - [`Unit`] — trait that defines a unit set (canonical factor + symbol).
//! - [`RawPace`] — untyped input boundary validated by [`Pace::from_raw`].
//! - [`PaceError`] — validation failures at the untyped boundaries.
//!
//! # Units
//!
//! | Category | Symbols | Canonical |
//! |----------|---------|-----------|
//! | distance | `m`, `km`, `mi` | `km` |
//! | time | `ms`, `s`, `min`, `h` | `s` |
//!
//! All conversions route through the canonical unit of the category; see
//! [`convert`].
//!
//! # Quick example
//!
//! ```rust
//! use pacer::{DistanceUnit, Pace, TimeUnit};
//!
//! let mut pace = Pace::new(10.0, 3_000.0); // 10 km in 3000 s
//! assert_eq!(pace.pace(), 300.0);          // seconds per kilometre
//! assert_eq!(pace.clock_string(), "00:05:00");
//!
//! pace.format(DistanceUnit::Mile, TimeUnit::Minute);
//! assert!((pace.pace() - 8.0467).abs() < 1e-3); // minutes per mile
//! ```
//!
//! # Validation
//!
//! The typed API cannot fail: units are closed enums and values are `f64`.
//! Unit strings and numeric text arriving from untyped input (deserialized
//! configuration, user input) are validated at the boundary — see
//! [`Pace::from_raw`], [`Pace::format_raw`], and the [`validator`] module —
//! and rejected with a [`PaceError`] naming the offending parameter.

mod convert;
mod error;
mod pace;
mod units;
pub mod validator;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::{convert, seconds_to_clock};
pub use error::{PaceError, Result};
pub use pace::{Pace, RawPace};
pub use units::{DistanceUnit, TimeUnit, Unit, UnitCategory};
