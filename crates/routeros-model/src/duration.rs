// ── Durations ──
//
// RouterOS writes time spans as unit-suffixed components in descending
// order: `1w2d3h45m56s67ms`. Each component is optional, none may repeat,
// a bare unit counts as zero, and the empty string is a zero span.

use std::fmt;
use std::str::FromStr;
use std::time;

use crate::codec::string_codec;
use crate::error::{MalformedValue, ValueKind};

/// Units in the order they must appear, with their length in milliseconds.
const UNITS: [(&str, u64); 6] = [
    ("w", 7 * 24 * 60 * 60 * 1000),
    ("d", 24 * 60 * 60 * 1000),
    ("h", 60 * 60 * 1000),
    ("m", 60 * 1000),
    ("s", 1000),
    ("ms", 1),
];

const MILLIS: usize = 5;

/// A non-negative span with millisecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: u64,
}

impl Duration {
    pub const ZERO: Self = Self { millis: 0 };

    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self {
            millis: secs.saturating_mul(1000),
        }
    }

    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    pub const fn is_zero(self) -> bool {
        self.millis == 0
    }
}

impl From<time::Duration> for Duration {
    /// Sub-millisecond precision is truncated; spans beyond `u64::MAX`
    /// milliseconds saturate.
    fn from(d: time::Duration) -> Self {
        Self {
            millis: u64::try_from(d.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl From<Duration> for time::Duration {
    fn from(d: Duration) -> Self {
        Self::from_millis(d.millis)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.millis;
        for (suffix, unit) in UNITS {
            let count = rest / unit;
            if count > 0 {
                write!(f, "{count}{suffix}")?;
                rest %= unit;
            }
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| MalformedValue::new(ValueKind::Duration, s, reason);

        let mut rest = s;
        let mut next_unit = 0;
        let mut millis: u64 = 0;

        while !rest.is_empty() {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| malformed("number without a unit"))?;
            let (digits, tail) = rest.split_at(digits_end);

            // `ms` must be tried before `m`.
            let unit = if tail.starts_with("ms") {
                MILLIS
            } else {
                UNITS
                    .iter()
                    .position(|(suffix, _)| tail.starts_with(suffix))
                    .ok_or_else(|| malformed("unknown unit"))?
            };
            if unit < next_unit {
                return Err(malformed("units out of order or repeated"));
            }
            next_unit = unit + 1;

            let (suffix, unit_millis) = UNITS[unit];
            // A unit with no digits counts as zero.
            let count: u64 = if digits.is_empty() {
                0
            } else {
                digits.parse().map_err(|_| malformed("number too large"))?
            };
            millis = count
                .checked_mul(unit_millis)
                .and_then(|m| millis.checked_add(m))
                .ok_or_else(|| malformed("duration too large"))?;

            rest = &tail[suffix.len()..];
        }

        Ok(Self { millis })
    }
}

string_codec!(Duration);

// ── DurationWithAuto ────────────────────────────────────────────────

const AUTO: &str = "auto";

/// A duration that may instead be left to the router (`auto`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationWithAuto {
    Auto,
    Fixed(Duration),
}

impl DurationWithAuto {
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The concrete span, or `None` for `auto`.
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::Auto => None,
            Self::Fixed(d) => Some(d),
        }
    }
}

impl From<Duration> for DurationWithAuto {
    fn from(d: Duration) -> Self {
        Self::Fixed(d)
    }
}

impl fmt::Display for DurationWithAuto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str(AUTO),
            Self::Fixed(d) => d.fmt(f),
        }
    }
}

impl FromStr for DurationWithAuto {
    type Err = MalformedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == AUTO {
            return Ok(Self::Auto);
        }
        s.parse::<Duration>()
            .map(Self::Fixed)
            .map_err(|e| MalformedValue::new(ValueKind::DurationWithAuto, s, e.reason()))
    }
}

string_codec!(DurationWithAuto);
