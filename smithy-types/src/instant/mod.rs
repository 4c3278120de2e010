/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamp type shared by the generated model crates.

use chrono::{DateTime, TimeZone, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Instant in time, stored as seconds since the Unix epoch plus a positive
/// sub-second component.
///
/// Times before the epoch keep `subsecond_nanos` positive: `-1.5` is stored
/// as `seconds = -2, subsecond_nanos = 500_000_000`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire representation of a timestamp
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Seconds since the epoch, e.g. `1576540098.52`
    EpochSeconds,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64) as u32;
        Instant::from_secs_and_nanos(epoch_seconds, nanos)
    }

    /// Normalizes `subsecond_nanos` values of one second or more into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    /// Milliseconds since the epoch, as used by the CloudWatch Logs wire format.
    pub fn from_epoch_millis(epoch_millis: i64) -> Self {
        Instant {
            seconds: epoch_millis.div_euclid(1000),
            subsecond_nanos: epoch_millis.rem_euclid(1000) as u32 * 1_000_000,
        }
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let (seconds, nanos) = (duration.as_secs() as i64, duration.subsec_nanos());
                if nanos == 0 {
                    Instant::from_epoch_seconds(-seconds)
                } else {
                    Instant {
                        seconds: -seconds - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    }
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_millis(&self) -> i64 {
        self.seconds * 1000 + (self.subsecond_nanos / 1_000_000) as i64
    }

    /// Formats this instant. Fails when the instant is outside the range the
    /// format can express (years 1 through 9999 for the calendar formats).
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::HttpDate => format::http_date::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }

    fn to_chrono(self) -> Result<DateTime<Utc>, DateTimeFormatError> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
            .ok_or(DateTimeFormatError::OutOfRange {
                seconds: self.seconds,
            })
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateTimeParseError {
    /// The input did not match the expected layout
    Invalid(String),
    /// A numeric component could not be parsed
    IntParseError,
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeParseError::Invalid(msg) => write!(f, "invalid date-time: {}", msg),
            DateTimeParseError::IntParseError => write!(f, "failed to parse integer"),
        }
    }
}

impl Error for DateTimeParseError {}

#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateTimeFormatError {
    /// The instant falls outside the range of the requested format
    OutOfRange { seconds: i64 },
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeFormatError::OutOfRange { seconds } => write!(
                f,
                "{} seconds from the epoch cannot be represented in the requested format",
                seconds
            ),
        }
    }
}

impl Error for DateTimeFormatError {}

#[cfg(test)]
mod test {
    use super::{DateTimeFormatError, Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            instant.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
        assert_eq!(
            instant.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn seconds_ending_in_zero_are_kept() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:10Z"
        );
    }

    #[test]
    fn out_of_range_is_an_error() {
        let instant = Instant::from_epoch_seconds(i64::MAX / 2);
        assert!(matches!(
            instant.fmt(Format::DateTime),
            Err(DateTimeFormatError::OutOfRange { .. })
        ));
        // year 10000
        let instant = Instant::from_epoch_seconds(253402300800);
        assert!(instant.fmt(Format::HttpDate).is_err());
        assert_eq!(
            instant.fmt(Format::EpochSeconds).unwrap(),
            "253402300800"
        );
    }

    #[test]
    fn instant_parse() {
        let expected = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18.520 GMT", Format::HttpDate),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert!(Instant::from_str("not a date", Format::DateTime).is_err());
        assert!(Instant::from_str("12.x", Format::EpochSeconds).is_err());
    }

    #[test]
    fn negative_epoch_seconds() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "-1.5");
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds),
            Ok(instant)
        );
        assert_eq!(
            Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500)),
            instant
        );
    }

    #[test]
    fn epoch_millis() {
        let instant = Instant::from_epoch_millis(1576540098520);
        assert_eq!(instant, Instant::from_fractional_seconds(1576540098, 0.52));
        assert_eq!(instant.epoch_millis(), 1576540098520);
        assert_eq!(Instant::from_epoch_millis(-1).epoch_millis(), -1);
    }

    proptest! {
        #[test]
        fn epoch_seconds_roundtrip(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }

        #[test]
        fn date_time_roundtrip(seconds in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }
    }
}
