//! Timestamp scalar and its canonical text form.
//!
//! The canonical form is RFC 3339 in UTC with a `Z` suffix and 0, 3, 6 or 9 fractional-second
//! digits, whichever is the shortest exact rendering. Parsing accepts any offset and up to 9
//! fractional digits; more than that would silently drop precision, so it is refused.
//!
//! Only instants in years 0001 to 9999 (UTC) are timestamps: the text form has a four-digit
//! year, so anything outside that range could be written but never read back.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use std::fmt;

/// Maximum number of fractional-second digits representable (nanoseconds).
const MAX_FRACTION_DIGITS: usize = 9;

const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Errors produced while parsing timestamp text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("'{0}' is not an RFC 3339 date-time")]
    Invalid(String),

    #[error("'{text}' has {digits} fractional-second digits; at most 9 are representable")]
    PrecisionLoss { text: String, digits: usize },

    #[error("'{0}' is outside the years 0001 to 9999")]
    OutOfRange(String),
}

/// A point in time with nanosecond precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// # Errors
    ///
    /// Returns [`TimestampError::OutOfRange`] unless the year is between 0001 and 9999.
    pub fn new(value: DateTime<Utc>) -> Result<Self, TimestampError> {
        if YEARS.contains(&value.year()) {
            Ok(Self(value))
        } else {
            Err(TimestampError::OutOfRange(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
        }
    }

    /// Builds a timestamp from seconds and nanoseconds since the Unix epoch.
    ///
    /// Returns `None` when the instant falls outside the years 0001 to 9999 or `nanos` is not
    /// below one second.
    pub fn from_unix(seconds: i64, nanos: u32) -> Option<Self> {
        if nanos >= 1_000_000_000 {
            return None;
        }
        DateTime::from_timestamp(seconds, nanos).and_then(|value| Self::new(value).ok())
    }

    /// Parses RFC 3339 text.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::PrecisionLoss`] when the text carries more than nine
    /// fractional-second digits, and [`TimestampError::Invalid`] for anything chrono cannot
    /// parse as RFC 3339. An offset that moves the instant outside the years 0001 to 9999 gives
    /// [`TimestampError::OutOfRange`].
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let digits = fractional_digits(text);
        if digits > MAX_FRACTION_DIGITS {
            return Err(TimestampError::PrecisionLoss {
                text: text.to_owned(),
                digits,
            });
        }

        let parsed = DateTime::parse_from_rfc3339(text)
            .map_err(|_| TimestampError::Invalid(text.to_owned()))?;
        Self::new(parsed.with_timezone(&Utc))
            .map_err(|_| TimestampError::OutOfRange(text.to_owned()))
    }

    /// Renders the canonical text form.
    pub fn to_canonical_string(&self) -> String {
        let format = match self.0.timestamp_subsec_nanos() {
            0 => SecondsFormat::Secs,
            nanos if nanos % 1_000_000 == 0 => SecondsFormat::Millis,
            nanos if nanos % 1_000 == 0 => SecondsFormat::Micros,
            _ => SecondsFormat::Nanos,
        };
        self.0.to_rfc3339_opts(format, true)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

fn fractional_digits(text: &str) -> usize {
    let Some(time_start) = text.find(|c: char| c == 'T' || c == 't' || c == ' ') else {
        return 0;
    };
    let time = &text[time_start..];
    match time.find('.') {
        Some(dot) => time[dot + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count(),
        None => 0,
    }
}
