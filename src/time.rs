//! Reconstruction of a UTC timestamp from the time of day carried by a
//! sentence. GGA has no date field, so the calendar date is supplied by the
//! caller.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::err::ParseError;

/// Combines the `hhmmss[.ss]` time field with `today` into seconds since the
/// Unix epoch. Fractional seconds are dropped.
///
/// No correction is made around midnight: a sentence stamped `235959` that is
/// resolved just after the date rolled over is attributed to the new day.
pub fn resolve_timestamp(utc: &str, today: NaiveDate) -> Result<i64, ParseError> {
    let time = parse_time(utc)?;
    let datetime = today.and_time(time);
    Ok(Utc.from_utc_datetime(&datetime).timestamp())
}

/// Parses `hhmmss[.ss]`. The fraction must be at least one digit when the
/// dot is present; its value is ignored.
fn parse_time(utc: &str) -> Result<NaiveTime, ParseError> {
    let invalid = || ParseError::InvalidTimeField(utc.to_string());

    let digits = match utc.get(..6) {
        Some(d) if d.bytes().all(|b| b.is_ascii_digit()) => d,
        _ => return Err(invalid()),
    };
    match utc[6..].as_bytes() {
        [] => (),
        [b'.', frac @ ..] if !frac.is_empty() && frac.iter().all(u8::is_ascii_digit) => (),
        _ => return Err(invalid()),
    }
    let part = |range: std::ops::Range<usize>| -> u32 {
        digits.as_bytes()[range]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };
    let (hour, min, sec) = (part(0..2), part(2..4), part(4..6));

    if hour >= 24 || min >= 60 || sec >= 60 {
        return Err(invalid());
    }
    NaiveTime::from_hms_opt(hour, min, sec).ok_or_else(invalid)
}
