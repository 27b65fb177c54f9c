// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit enumerations and the canonical-factor contract.
//!
//! Each unit encodes a multiplicative factor relative to its category's
//! **canonical unit** — kilometres for distance, seconds for time.  All
//! conversions route through the canonical unit, so adding a unit means
//! adding one enum member and one factor.
//!
//! # Distance units
//!
//! | Symbol | Unit | km per unit |
//! |--------|------|-------------|
//! | `m` | metre | 0.001 |
//! | `km` | kilometre | 1 |
//! | `mi` | statute mile | 1.60934 |
//!
//! # Time units
//!
//! | Symbol | Unit | s per unit |
//! |--------|------|------------|
//! | `ms` | millisecond | 0.001 |
//! | `s` | second | 1 |
//! | `min` | minute | 60 |
//! | `h` | hour | 3600 |
//!
//! The unit sets are closed: a valid `DistanceUnit` or `TimeUnit` value is
//! always convertible.  Unit strings arriving from untyped input are
//! validated by the `FromStr` implementations, which reject anything
//! outside the tables above with [`PaceError::InvalidUnit`].

use crate::error::PaceError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// UnitCategory
// ═══════════════════════════════════════════════════════════════════════════

/// The two unit categories understood by this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Distance,
    Time,
}

impl UnitCategory {
    /// Human-readable category name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
        }
    }

    /// Comma-separated list of the symbols this category accepts.
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Distance => "m, km, mi",
            Self::Time => "ms, s, min, h",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit trait
// ═══════════════════════════════════════════════════════════════════════════

/// Contract shared by both unit enumerations.
///
/// A **unit** defines:
///
/// 1. The category it belongs to.
/// 2. A multiplicative factor relative to the category's canonical unit.
/// 3. The symbol accepted and produced at string boundaries.
///
/// Conversions route through the canonical unit:
///
/// ```text
/// value[from] → canonical → value[to]
/// ```
///
/// so `convert(v, from, to) = v * from.factor() / to.factor()`.
pub trait Unit:
    Copy + Clone + fmt::Debug + fmt::Display + PartialEq + Eq + FromStr<Err = PaceError> + 'static
{
    /// Category this unit set belongs to.
    const CATEGORY: UnitCategory;

    /// The unit through which all conversions are routed.
    const CANONICAL: Self;

    /// Canonical units per one of `self` (e.g. km per mile).
    fn factor(self) -> f64;

    /// Symbol used at string boundaries.
    fn symbol(self) -> &'static str;

    /// Express `value` (in `self`) in canonical units.
    #[inline]
    fn to_canonical(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Express `value` (in canonical units) in `self`.
    #[inline]
    fn from_canonical(self, value: f64) -> f64 {
        value / self.factor()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DistanceUnit
// ═══════════════════════════════════════════════════════════════════════════

/// Kilometres in one metre.
const KM_PER_METER: f64 = 0.001;

/// Kilometres in one statute mile.
const KM_PER_MILE: f64 = 1.60934;

/// Distance units: metre, kilometre, statute mile.
///
/// The canonical distance unit is the kilometre.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Mile,
}

impl DistanceUnit {
    /// Every member of the distance unit set.
    pub const ALL: [Self; 3] = [Self::Meter, Self::Kilometer, Self::Mile];
}

impl Unit for DistanceUnit {
    const CATEGORY: UnitCategory = UnitCategory::Distance;
    const CANONICAL: Self = Self::Kilometer;

    #[inline]
    fn factor(self) -> f64 {
        match self {
            Self::Meter => KM_PER_METER,
            Self::Kilometer => 1.0,
            Self::Mile => KM_PER_MILE,
        }
    }

    #[inline]
    fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Mile => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Self::Meter),
            "km" => Ok(Self::Kilometer),
            "mi" => Ok(Self::Mile),
            other => Err(PaceError::InvalidUnit {
                category: UnitCategory::Distance,
                value: other.to_owned(),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeUnit
// ═══════════════════════════════════════════════════════════════════════════

/// Seconds in one millisecond.
const S_PER_MS: f64 = 0.001;

/// Seconds in one minute.
const S_PER_MINUTE: f64 = 60.0;

/// Seconds in one hour.
const S_PER_HOUR: f64 = 3_600.0;

/// Time units: millisecond, second, minute, hour.
///
/// The canonical time unit is the second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Every member of the time unit set.
    pub const ALL: [Self; 4] = [Self::Millisecond, Self::Second, Self::Minute, Self::Hour];
}

impl Unit for TimeUnit {
    const CATEGORY: UnitCategory = UnitCategory::Time;
    const CANONICAL: Self = Self::Second;

    #[inline]
    fn factor(self) -> f64 {
        match self {
            Self::Millisecond => S_PER_MS,
            Self::Second => 1.0,
            Self::Minute => S_PER_MINUTE,
            Self::Hour => S_PER_HOUR,
        }
    }

    #[inline]
    fn symbol(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms" => Ok(Self::Millisecond),
            "s" => Ok(Self::Second),
            "min" => Ok(Self::Minute),
            "h" => Ok(Self::Hour),
            other => Err(PaceError::InvalidUnit {
                category: UnitCategory::Time,
                value: other.to_owned(),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde — units travel as their symbol strings
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
impl Serialize for DistanceUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DistanceUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
