// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validation failures raised at the crate's untyped boundaries.
//!
//! The typed API cannot misuse the crate — units are closed enums and
//! numbers are `f64` — so every variant here belongs to the raw-input
//! surface ([`Pace::from_raw`](crate::Pace::from_raw),
//! [`Pace::format_raw`](crate::Pace::format_raw), `FromStr` on the unit
//! enums).  All failures are synchronous and raised at the violating call;
//! nothing is retried or recovered internally.

use crate::units::UnitCategory;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = PaceError> = std::result::Result<T, E>;

/// Everything that can go wrong while validating raw pace input.
///
/// A failed construction produces no instance; a failed
/// [`format_raw`](crate::Pace::format_raw) leaves the instance in its
/// pre-call state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    /// A mandatory argument was omitted.
    #[error("required parameter `{name}` is missing")]
    RequiredParameterMissing { name: &'static str },

    /// An argument's value does not have the expected kind.
    #[error("parameter `{name}` must be a {expected}, got `{value}`")]
    InvalidType {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A unit string is not a member of its category's enumerated set.
    #[error("`{value}` is not a valid {category} unit (expected one of: {})", .category.symbols())]
    InvalidUnit {
        category: UnitCategory,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = PaceError::RequiredParameterMissing { name: "distance" };
        assert_eq!(err.to_string(), "required parameter `distance` is missing");

        let err = PaceError::InvalidType {
            name: "time",
            expected: "number",
            value: "fast".to_owned(),
        };
        assert_eq!(err.to_string(), "parameter `time` must be a number, got `fast`");
    }

    #[test]
    fn invalid_unit_lists_the_accepted_symbols() {
        let err = PaceError::InvalidUnit {
            category: UnitCategory::Time,
            value: "day".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "`day` is not a valid time unit (expected one of: ms, s, min, h)"
        );
    }
}
