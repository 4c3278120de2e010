/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{DateTimeFormatError, DateTimeParseError, Instant, NANOS_PER_SECOND};
use chrono::{DateTime, Datelike, Utc};

fn calendar_date(instant: &Instant) -> Result<DateTime<Utc>, DateTimeFormatError> {
    let date = instant.to_chrono()?;
    if !(1..=9999).contains(&date.year()) {
        return Err(DateTimeFormatError::OutOfRange {
            seconds: instant.seconds,
        });
    }
    Ok(date)
}

pub(super) mod rfc3339 {
    use super::*;
    use chrono::SecondsFormat;

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(instant: &Instant) -> Result<String, DateTimeFormatError> {
        let date = calendar_date(instant)?;
        if !instant.has_nanos() {
            return Ok(date.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let formatted = date.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let mut out = formatted
            .trim_end_matches('Z')
            .trim_end_matches('0')
            .to_owned();
        out.push('Z');
        Ok(out)
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let date = DateTime::parse_from_rfc3339(s)
            .map_err(|err| DateTimeParseError::Invalid(format!("{}: {}", s, err)))?;
        Ok(Instant::from_secs_and_nanos(
            date.timestamp(),
            date.timestamp_subsec_nanos(),
        ))
    }
}

pub(super) mod http_date {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.520 GMT"
    pub(crate) fn format(instant: &Instant) -> Result<String, DateTimeFormatError> {
        let date = calendar_date(instant)?;
        let mut out = date.format("%a, %d %b %Y %H:%M:%S").to_string();
        if instant.has_nanos() {
            out.push_str(&format!(".{:03}", instant.subsecond_nanos / 1_000_000));
        }
        out.push_str(" GMT");
        Ok(out)
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let naive = NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S%.f GMT")
            .map_err(|err| DateTimeParseError::Invalid(format!("{}: {}", s, err)))?;
        let date = Utc.from_utc_datetime(&naive);
        Ok(Instant::from_secs_and_nanos(
            date.timestamp(),
            date.timestamp_subsec_nanos(),
        ))
    }
}

pub(super) mod epoch_seconds {
    use super::*;

    const MAX_FRACTION_DIGITS: usize = 9;

    pub(crate) fn format(instant: &Instant) -> String {
        if !instant.has_nanos() {
            return instant.seconds.to_string();
        }
        let (sign, whole, nanos) = if instant.seconds < 0 {
            (
                "-",
                -(instant.seconds + 1),
                NANOS_PER_SECOND - instant.subsecond_nanos,
            )
        } else {
            ("", instant.seconds, instant.subsecond_nanos)
        };
        let fraction = format!("{:0>9}", nanos);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let invalid = || DateTimeParseError::Invalid(format!("not epoch seconds: {}", s));
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.find('.') {
            Some(idx) => (&unsigned[..idx], &unsigned[idx + 1..]),
            None => (unsigned, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }
        let seconds: i64 = whole
            .parse()
            .map_err(|_| DateTimeParseError::IntParseError)?;
        let nanos = if fraction.is_empty() {
            0
        } else {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let padded = format!("{:0<9}", digits);
            padded
                .parse::<u32>()
                .map_err(|_| DateTimeParseError::IntParseError)?
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(seconds, nanos),
            (true, 0) => Instant::from_epoch_seconds(-seconds),
            (true, _) => Instant {
                seconds: -seconds - 1,
                subsecond_nanos: NANOS_PER_SECOND - nanos,
            },
        })
    }
}
