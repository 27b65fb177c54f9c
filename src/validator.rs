// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Runtime validation for raw, untyped input.
//!
//! The typed API cannot express a missing argument or a value of the wrong
//! kind, so these checks only exist for the boundaries where values arrive
//! as loosely-typed text (deserialized configuration, user input).
//! Omission is modelled as an `Option` with an explicit presence check
//! rather than a sentinel default.  Unit membership is checked by the
//! `FromStr` implementations on [`DistanceUnit`](crate::DistanceUnit) and
//! [`TimeUnit`](crate::TimeUnit).

use crate::error::{PaceError, Result};

/// Unwrap a mandatory argument, signalling which one is missing.
pub fn require<T>(name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(PaceError::RequiredParameterMissing { name })
}

/// Parse a raw value that must be a number.
pub fn numeric(name: &'static str, raw: &str) -> Result<f64> {
    raw.parse().map_err(|_| PaceError::InvalidType {
        name,
        expected: "number",
        value: raw.to_owned(),
    })
}
