use chrono::{DateTime, Local, TimeZone, Utc};

/// Re-expresses the instant in the system timezone, using the offset that
/// zone had at that instant (DST included). The instant itself is unchanged.
pub fn to_local(instant: &DateTime<Utc>) -> DateTime<Local> {
    to_zone(instant, &Local)
}

pub fn to_zone<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> DateTime<Tz> {
    instant.with_timezone(tz)
}
