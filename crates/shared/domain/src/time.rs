//! Time values as delivered by the service.

use crate::constants::DEFAULT_FRACTION_DIGITS;
use chrono::{DateTime, Utc};

/// A point in time, always normalised to UTC.
///
/// Offsets present on the wire are applied and then discarded.
pub type Timestamp = DateTime<Utc>;

/// How many fractional-second digits a wire timestamp carries.
///
/// `variable` precision accepts anywhere from one digit up to `digits`; fixed precision
/// requires exactly `digits`. Construction is checked, so a value of this type always
/// has `1 <= digits <= 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FractionPrecision {
    digits: u8,
    variable: bool,
}

impl FractionPrecision {
    /// Nanoseconds is the finest resolution `chrono` keeps.
    pub const MAX_DIGITS: u8 = 9;

    /// Up to six digits, trailing zeros optional. This is what the service emits.
    pub const MICROS: Self = Self { digits: DEFAULT_FRACTION_DIGITS, variable: true };

    /// Accepts `1..=digits` fraction digits.
    #[must_use]
    pub const fn variable(digits: u8) -> Option<Self> {
        Self::new(digits, true)
    }

    /// Requires exactly `digits` fraction digits.
    #[must_use]
    pub const fn exact(digits: u8) -> Option<Self> {
        Self::new(digits, false)
    }

    #[must_use]
    pub const fn new(digits: u8, variable: bool) -> Option<Self> {
        if digits == 0 || digits > Self::MAX_DIGITS {
            return None;
        }
        Some(Self { digits, variable })
    }

    #[must_use]
    pub const fn digits(self) -> u8 {
        self.digits
    }

    #[must_use]
    pub const fn is_variable(self) -> bool {
        self.variable
    }

    /// Whether a fraction field of `count` digits fits this precision.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        let max = self.digits as usize;
        if self.variable { count >= 1 && count <= max } else { count == max }
    }
}

impl Default for FractionPrecision {
    fn default() -> Self {
        Self::MICROS
    }
}
