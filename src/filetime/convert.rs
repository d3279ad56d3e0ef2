use chrono::{DateTime, Offset, TimeZone, Utc};

use crate::error::AppError;

pub const TICKS_PER_SECOND: i128 = 10_000_000;
pub const NANOS_PER_TICK: i128 = 100;

/// 100-ns intervals between 1601-01-01 and 1970-01-01 (Unix epoch).
pub const EPOCH_DIFFERENCE_TICKS: i128 = 116_444_736_000_000_000;
pub const EPOCH_DIFFERENCE_SECS: i128 = EPOCH_DIFFERENCE_TICKS / TICKS_PER_SECOND;

/// Splits a FILETIME into Unix seconds and the sub-second remainder in nanoseconds.
///
/// Negative values floor toward earlier instants, so the remainder is always
/// in `0..1_000_000_000`.
pub fn to_unix_parts(filetime: i128) -> (i128, u32) {
    let secs_since_1601 = filetime.div_euclid(TICKS_PER_SECOND);
    let nanos = (filetime.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    (secs_since_1601 - EPOCH_DIFFERENCE_SECS, nanos)
}

/// Converts a Windows / Active Directory FILETIME (100-ns ticks since
/// 1601-01-01 UTC) into an instant anchored to UTC.
pub fn convert(filetime: i128) -> Result<DateTime<Utc>, AppError> {
    let (secs, nanos) = to_unix_parts(filetime);
    let secs = i64::try_from(secs).map_err(|_| AppError::OutOfRange { filetime })?;

    DateTime::from_timestamp(secs, nanos).ok_or(AppError::OutOfRange { filetime })
}

/// ISO-8601 with a numeric offset (`+00:00`, never `Z`).
///
/// Fractional seconds are truncated to microseconds and printed as six digits
/// only when non-zero. Offsets that are not whole minutes keep their seconds
/// (`+00:19:32`) so the string always denotes the same instant.
pub fn to_iso8601<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let has_micros = instant.timestamp_subsec_micros() != 0;
    let whole_minute_offset = instant.offset().fix().local_minus_utc() % 60 == 0;

    let fmt = match (has_micros, whole_minute_offset) {
        (false, true) => "%Y-%m-%dT%H:%M:%S%:z",
        (true, true) => "%Y-%m-%dT%H:%M:%S%.6f%:z",
        (false, false) => "%Y-%m-%dT%H:%M:%S%::z",
        (true, false) => "%Y-%m-%dT%H:%M:%S%.6f%::z",
    };
    instant.format(fmt).to_string()
}
