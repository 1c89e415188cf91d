//! # Wire Timestamps
//!
//! The service writes instants as
//!
//! ```text
//! yyyy-MM-dd HH:mm:ss.FFFFFF+HH:MM
//! 2019-01-02 15:04:05.123456+00:00
//! ```
//!
//! Every field is fixed-width ASCII digits except the fraction, whose width is governed
//! by a [`FractionPrecision`]. The offset is mandatory and always written as `±HH:MM`;
//! `Z` is not accepted. Parsing applies the offset and returns a UTC [`Timestamp`].
//!
//! The scanner checks the layout byte by byte before `chrono` validates the calendar, so
//! nothing about the runtime locale can influence the outcome and there is no lenient
//! fallback: one wrong byte is a [`WireError::Format`].

use crate::error::WireError;
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use rorg_domain::config::WireConfig;
use rorg_domain::{FractionPrecision, Timestamp};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Layout of a wire timestamp, parameterised by its fraction precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimestampLayout {
    precision: FractionPrecision,
}

impl TimestampLayout {
    #[must_use]
    pub const fn new(precision: FractionPrecision) -> Self {
        Self { precision }
    }

    #[must_use]
    pub const fn precision(self) -> FractionPrecision {
        self.precision
    }

    /// Parses a wire timestamp and normalises it to UTC.
    ///
    /// # Errors
    /// Returns [`WireError::Format`] if `value` deviates from the layout in any way:
    /// wrong separators, a field with the wrong number of digits, a fraction outside the
    /// configured precision, a missing or malformed offset, trailing input, or field
    /// values that do not form a real date and time.
    pub fn parse(self, value: &str) -> Result<Timestamp, WireError> {
        let mut scan = Scanner::new(value);

        let year = scan.number(4, "four-digit year")?;
        scan.literal(b'-', "'-' after year")?;
        let month = scan.number(2, "two-digit month")?;
        scan.literal(b'-', "'-' after month")?;
        let day = scan.number(2, "two-digit day")?;
        scan.literal(b' ', "' ' between date and time")?;
        let hour = scan.number(2, "two-digit hour")?;
        scan.literal(b':', "':' after hour")?;
        let minute = scan.number(2, "two-digit minute")?;
        scan.literal(b':', "':' after minute")?;
        let second = scan.number(2, "two-digit second")?;
        scan.literal(b'.', "'.' before fraction")?;
        let nanos = scan.fraction(self.precision)?;
        let sign = scan.sign()?;
        let offset_hours = scan.number(2, "two-digit offset hours")?;
        scan.literal(b':', "':' inside offset")?;
        let offset_minutes = scan.number(2, "two-digit offset minutes")?;
        scan.end()?;

        let date = i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .ok_or_else(|| invalid(value, "date does not exist"))?;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
            .ok_or_else(|| invalid(value, "time of day out of range"))?;

        if offset_hours > 23 || offset_minutes > 59 {
            return Err(invalid(value, "UTC offset out of range"));
        }
        let offset_seconds = sign * i32::try_from(offset_hours * 3600 + offset_minutes * 60)
            .map_err(|_| invalid(value, "UTC offset out of range"))?;
        let offset = FixedOffset::east_opt(offset_seconds)
            .ok_or_else(|| invalid(value, "UTC offset out of range"))?;

        NaiveDateTime::new(date, time)
            .and_local_timezone(offset)
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| invalid(value, "instant not representable"))
    }

    /// Renders `ts` in this layout with a `+00:00` offset.
    ///
    /// Fixed precision writes exactly `digits` fraction digits. Variable precision drops
    /// trailing zeros but always keeps one digit. Digits beyond the precision are cut,
    /// not rounded.
    #[must_use]
    pub fn format(self, ts: &Timestamp) -> String {
        // Leap seconds are carried as nanos >= 1e9.
        let nanos = ts.nanosecond() % NANOS_PER_SECOND;
        let mut fraction = format!("{nanos:09}");
        fraction.truncate(usize::from(self.precision.digits()));
        if self.precision.is_variable() {
            let kept = fraction.trim_end_matches('0').len().max(1);
            fraction.truncate(kept);
        }

        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{fraction}+00:00",
            ts.year(),
            ts.month(),
            ts.day(),
            ts.hour(),
            ts.minute(),
            ts.second(),
        )
    }
}

impl From<FractionPrecision> for TimestampLayout {
    fn from(precision: FractionPrecision) -> Self {
        Self::new(precision)
    }
}

impl TryFrom<&WireConfig> for TimestampLayout {
    type Error = WireError;

    fn try_from(config: &WireConfig) -> Result<Self, Self::Error> {
        let precision = FractionPrecision::new(config.fraction_digits, config.variable_fraction)
            .ok_or_else(|| WireError::InvalidConfiguration {
                message: format!(
                    "fraction_digits must be between 1 and {}, got {}",
                    FractionPrecision::MAX_DIGITS,
                    config.fraction_digits
                )
                .into(),
                context: Some("wire.fraction_digits".into()),
            })?;

        tracing::debug!(
            digits = precision.digits(),
            variable = precision.is_variable(),
            "Timestamp layout configured"
        );

        Ok(Self::new(precision))
    }
}

/// Parses a wire timestamp using the service's default layout (up to six fraction digits).
///
/// # Errors
/// Returns [`WireError::Format`] if `value` does not match the layout exactly.
///
/// # Example
/// ```rust
/// use rorg_wire::parse_timestamp;
///
/// let ts = parse_timestamp("2019-01-02 15:04:05.000001+02:00").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2019-01-02T13:04:05.000001+00:00");
/// ```
pub fn parse_timestamp(value: &str) -> Result<Timestamp, WireError> {
    TimestampLayout::default().parse(value)
}

/// Formats a timestamp in the service's default layout.
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    TimestampLayout::default().format(ts)
}

fn invalid(value: &str, reason: &str) -> WireError {
    WireError::Format { message: format!("'{value}': {reason}").into(), context: None }
}

/// Forward-only cursor over the ASCII bytes of a wire value.
struct Scanner<'a> {
    value: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(value: &'a str) -> Self {
        Self { value, bytes: value.as_bytes(), pos: 0 }
    }

    fn expected(&self, what: &str) -> WireError {
        WireError::Format {
            message: format!("'{}': expected {what} at byte {}", self.value, self.pos).into(),
            context: None,
        }
    }

    fn literal(&mut self, byte: u8, what: &str) -> Result<(), WireError> {
        if self.bytes.get(self.pos) == Some(&byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.expected(what))
        }
    }

    /// Exactly `width` ASCII digits.
    fn number(&mut self, width: usize, what: &str) -> Result<u32, WireError> {
        let digits = self
            .bytes
            .get(self.pos..self.pos + width)
            .filter(|d| d.iter().all(u8::is_ascii_digit))
            .ok_or_else(|| self.expected(what))?;
        self.pos += width;
        Ok(digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0')))
    }

    /// A run of digits checked against `precision`, scaled to nanoseconds.
    fn fraction(&mut self, precision: FractionPrecision) -> Result<u32, WireError> {
        let run = self.bytes[self.pos..].iter().take_while(|b| b.is_ascii_digit()).count();
        if !precision.accepts(run) {
            let expected = if precision.is_variable() {
                format!("1 to {} fraction digits, found {run}", precision.digits())
            } else {
                format!("exactly {} fraction digits, found {run}", precision.digits())
            };
            return Err(self.expected(&expected));
        }

        let digits = &self.bytes[self.pos..self.pos + run];
        self.pos += run;

        let value = digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0'));
        // `accepts` caps `run` at MAX_DIGITS, so this never overflows.
        let scale = (run..usize::from(FractionPrecision::MAX_DIGITS)).fold(1_u32, |s, _| s * 10);
        Ok(value * scale)
    }

    fn sign(&mut self) -> Result<i32, WireError> {
        let sign = match self.bytes.get(self.pos) {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Err(self.expected("'+' or '-' starting the UTC offset")),
        };
        self.pos += 1;
        Ok(sign)
    }

    fn end(&self) -> Result<(), WireError> {
        if self.pos == self.bytes.len() { Ok(()) } else { Err(self.expected("end of input")) }
    }
}
