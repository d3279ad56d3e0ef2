use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filetime::convert::{to_iso8601, to_unix_parts};
use crate::filetime::local::to_local;

#[derive(Debug, Serialize)]
pub struct ConvertedTimestamp {
    pub filetime: i128,
    pub unix_seconds: i64,
    pub nanoseconds: u32,
    pub utc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

impl ConvertedTimestamp {
    pub fn new(filetime: i128, instant: &DateTime<Utc>, with_local: bool) -> Self {
        let (_, nanoseconds) = to_unix_parts(filetime);
        Self {
            filetime,
            unix_seconds: instant.timestamp(),
            nanoseconds,
            utc: to_iso8601(instant),
            local: with_local.then(|| to_iso8601(&to_local(instant))),
        }
    }

    /// The string shown in plain output mode.
    pub fn display(&self) -> &str {
        self.local.as_deref().unwrap_or(&self.utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filetime::convert::convert;

    #[test]
    fn utc_record() {
        let filetime = 116_444_736_012_345_600;
        let record = ConvertedTimestamp::new(filetime, &convert(filetime).unwrap(), false);

        assert_eq!(record.unix_seconds, 1);
        assert_eq!(record.nanoseconds, 234_560_000);
        assert_eq!(record.utc, "1970-01-01T00:00:01.234560+00:00");
        assert!(record.local.is_none());
        assert_eq!(record.display(), record.utc);
    }

    #[test]
    fn local_record_prefers_local_for_display() {
        let record = ConvertedTimestamp::new(0, &convert(0).unwrap(), true);
        let local = record.local.clone().unwrap();
        assert_eq!(record.display(), local);
    }

    #[test]
    fn json_omits_missing_local() {
        let filetime = 116_444_736_000_000_000;
        let record = ConvertedTimestamp::new(filetime, &convert(filetime).unwrap(), false);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"filetime":116444736000000000,"unix_seconds":0,"nanoseconds":0,"utc":"1970-01-01T00:00:00+00:00"}"#
        );
    }
}
