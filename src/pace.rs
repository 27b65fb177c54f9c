// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Pace`] entity: distance, time, active units, derived pace.

use crate::convert::{convert, seconds_to_clock};
use crate::error::Result;
use crate::units::{DistanceUnit, TimeUnit, Unit};
use crate::validator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A pace: time elapsed per unit of distance travelled.
///
/// Stores the distance, the time, the units both are currently expressed
/// in, and the derived pace (`time / distance`, in time units per distance
/// unit).  The three numeric fields are never individually stale: every
/// constructor and every [`format`](Pace::format) call re-derives `pace`
/// under the active units.
///
/// Construction normalises to the canonical units (kilometres, seconds);
/// [`format`](Pace::format) re-expresses the stored values in any other
/// unit pair.
///
/// ```rust
/// use pacer::{DistanceUnit, Pace, TimeUnit};
///
/// let mut pace = Pace::new(10.0, 3_000.0); // 10 km in 3000 s
/// assert_eq!(pace.pace(), 300.0);          // s/km
/// assert_eq!(pace.clock_string(), "00:05:00");
///
/// pace.format(DistanceUnit::Mile, TimeUnit::Minute);
/// assert!((pace.pace() - 8.0467).abs() < 1e-3); // min/mi
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    distance: f64,
    time: f64,
    pace: f64,
    distance_unit: DistanceUnit,
    time_unit: TimeUnit,
}

/// Raw, untyped pace input as it arrives from configuration or other
/// loosely-typed sources.
///
/// Every field is optional so that omission is detectable;
/// [`Pace::from_raw`] performs the validation.  Numeric fields are text
/// (`"10"`, `"0.5"`) because the source is untyped — a value that does not
/// parse as a number is an [`InvalidType`](crate::PaceError::InvalidType)
/// failure, not a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RawPace {
    pub distance: Option<String>,
    pub time: Option<String>,
    pub distance_unit: Option<String>,
    pub time_unit: Option<String>,
}

impl Pace {
    /// Create a pace from a distance in kilometres and a time in seconds.
    #[inline]
    pub fn new(distance: f64, time: f64) -> Self {
        Self::with_units(distance, time, DistanceUnit::CANONICAL, TimeUnit::CANONICAL)
    }

    /// Create a pace from a distance and time expressed in arbitrary units.
    ///
    /// Both values are converted to the canonical units (km, s), which
    /// become the active units of the new instance, and the pace is derived
    /// as `time / distance` in s/km.
    ///
    /// A zero distance yields an infinite pace by ordinary floating-point
    /// division; it is not treated as an error.
    ///
    /// ```rust
    /// use pacer::{DistanceUnit, Pace, TimeUnit};
    ///
    /// // 5 mi in 1500 min — normalised to ~8.0467 km in 90000 s.
    /// let pace = Pace::with_units(5.0, 1_500.0, DistanceUnit::Mile, TimeUnit::Minute);
    /// assert!((pace.pace() - 90_000.0 / 8.0467).abs() < 1e-6);
    /// ```
    pub fn with_units(
        distance: f64,
        time: f64,
        distance_unit: DistanceUnit,
        time_unit: TimeUnit,
    ) -> Self {
        let distance = distance_unit.to_canonical(distance);
        let time = time_unit.to_canonical(time);
        Self {
            distance,
            time,
            pace: time / distance,
            distance_unit: DistanceUnit::CANONICAL,
            time_unit: TimeUnit::CANONICAL,
        }
    }

    /// Build a pace from raw, untyped input.
    ///
    /// Validation order matches the field order: `distance` and `time` are
    /// mandatory and must parse as numbers; `distanceUnit` / `timeUnit`
    /// default to `km` / `s` when absent and must name a member of their
    /// unit set when present.  On any failure no instance is produced.
    pub fn from_raw(raw: &RawPace) -> Result<Self> {
        let distance = validator::require("distance", raw.distance.as_deref())?;
        let distance = validator::numeric("distance", distance)?;
        let time = validator::require("time", raw.time.as_deref())?;
        let time = validator::numeric("time", time)?;

        let distance_unit = match raw.distance_unit.as_deref() {
            Some(s) => s.parse()?,
            None => DistanceUnit::CANONICAL,
        };
        let time_unit = match raw.time_unit.as_deref() {
            Some(s) => s.parse()?,
            None => TimeUnit::CANONICAL,
        };

        Ok(Self::with_units(distance, time, distance_unit, time_unit))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Current pace, in [`time_unit`](Pace::time_unit) per
    /// [`distance_unit`](Pace::distance_unit).
    #[inline]
    pub const fn pace(&self) -> f64 {
        self.pace
    }

    /// Stored distance, in the active distance unit.
    #[inline]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Stored time, in the active time unit.
    #[inline]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// The active distance unit.
    #[inline]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// The active time unit.
    #[inline]
    pub const fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    // ── reformatting ──────────────────────────────────────────────────

    /// Re-express the stored distance and time in new units.
    ///
    /// Both values are converted from the currently active units, the unit
    /// labels are updated, and the pace is re-derived.  Returns `&mut Self`
    /// so calls can be chained.  Re-applying the active units is a no-op up
    /// to floating-point rounding.
    pub fn format(&mut self, distance_unit: DistanceUnit, time_unit: TimeUnit) -> &mut Self {
        self.distance = convert(self.distance, self.distance_unit, distance_unit);
        self.distance_unit = distance_unit;
        self.time = convert(self.time, self.time_unit, time_unit);
        self.time_unit = time_unit;
        self.pace = self.time / self.distance;
        self
    }

    /// [`format`](Pace::format) with units given as raw strings.
    ///
    /// Both arguments are mandatory and both are validated before any field
    /// is touched, so the operation is all-or-nothing: on failure the
    /// instance is left in its pre-call state.
    pub fn format_raw(
        &mut self,
        distance_unit: Option<&str>,
        time_unit: Option<&str>,
    ) -> Result<&mut Self> {
        let distance_unit: DistanceUnit = validator::require("distanceUnit", distance_unit)?.parse()?;
        let time_unit: TimeUnit = validator::require("timeUnit", time_unit)?.parse()?;
        Ok(self.format(distance_unit, time_unit))
    }

    /// The current pace as a `"HH:MM:SS"` clock string.
    ///
    /// Interprets the pace value as a quantity of the active time unit,
    /// converts it to seconds, and formats it — "this much time per one
    /// unit of the active distance unit".
    pub fn clock_string(&self) -> String {
        seconds_to_clock(convert(self.pace, self.time_unit, TimeUnit::Second))
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.pace, self.time_unit, self.distance_unit)
    }
}

// Serde keeps the camelCase field names of the original JSON shape:
// distance, time, pace, distanceUnit, timeUnit.
#[cfg(feature = "serde")]
impl Serialize for Pace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Pace", 5)?;
        s.serialize_field("distance", &self.distance)?;
        s.serialize_field("time", &self.time)?;
        s.serialize_field("pace", &self.pace)?;
        s.serialize_field("distanceUnit", &self.distance_unit)?;
        s.serialize_field("timeUnit", &self.time_unit)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Pace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            distance: f64,
            time: f64,
            #[serde(rename = "distanceUnit")]
            distance_unit: DistanceUnit,
            #[serde(rename = "timeUnit")]
            time_unit: TimeUnit,
        }

        // A stored `pace` field is ignored and re-derived, so hand-edited
        // input cannot violate the `pace == time / distance` invariant.
        let raw = Raw::deserialize(deserializer)?;
        Ok(Pace {
            distance: raw.distance,
            time: raw.time,
            pace: raw.time / raw.distance,
            distance_unit: raw.distance_unit,
            time_unit: raw.time_unit,
        })
    }
}
