use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use once_cell::sync::Lazy;
use time::{OffsetDateTime, UtcOffset};

use crate::Result;

/// Local date-time with millisecond precision, e.g. `2026-10-19T14:03:07.215`.
const ISO_8601_LOCAL: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]");

// Resolved once so every stamp in the process renders against the same offset.
static LOCAL_OFFSET: Lazy<UtcOffset> =
    Lazy::new(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC));

/// How timestamps are rendered in dumped log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Local date and time without offset, millisecond precision.
    #[default]
    Iso8601,
    /// RFC 3339 with full sub-second precision and the UTC offset.
    Rfc3339,
}

/// Wall-clock instant at which a failure was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Capture the current time.
    ///
    /// The local offset is looked up on first use and shared by every later
    /// stamp; when the platform cannot determine it, UTC is used instead.
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().to_offset(*LOCAL_OFFSET))
    }

    /// The underlying date-time value.
    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }

    /// Render this timestamp in the given format.
    pub fn format(&self, format: TimestampFormat) -> Result<String> {
        let rendered = match format {
            TimestampFormat::Iso8601 => self.0.format(ISO_8601_LOCAL)?,
            TimestampFormat::Rfc3339 => self.0.format(&Rfc3339)?,
        };
        Ok(rendered)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(ISO_8601_LOCAL).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_iso8601_rendering() {
        let ts = Timestamp::from(datetime!(2026-01-09 08:05:03.25 +02:00));
        assert_eq!(
            ts.format(TimestampFormat::Iso8601).unwrap(),
            "2026-01-09T08:05:03.250"
        );
        assert_eq!(ts.to_string(), "2026-01-09T08:05:03.250");
    }

    #[test]
    fn test_rfc3339_rendering_keeps_offset() {
        let ts = Timestamp::from(datetime!(2026-01-09 08:05:03.25 +02:00));
        assert_eq!(
            ts.format(TimestampFormat::Rfc3339).unwrap(),
            "2026-01-09T08:05:03.25+02:00"
        );
    }

    #[test]
    fn test_now_advances() {
        let first = Timestamp::now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = Timestamp::now();
        assert!(first <= second);
    }

    #[test]
    fn test_stamps_share_one_offset_across_threads() {
        let first = Timestamp::now();
        let second = std::thread::spawn(|| {
            std::thread::sleep(std::time::Duration::from_millis(2));
            Timestamp::now()
        })
        .join()
        .unwrap();
        let third = Timestamp::now();

        let offset = first.as_offset_date_time().offset();
        assert_eq!(second.as_offset_date_time().offset(), offset);
        assert_eq!(third.as_offset_date_time().offset(), offset);

        // Same offset means rendered order follows instant order.
        let rendered: Vec<String> = [first, second, third]
            .iter()
            .map(|ts| ts.format(TimestampFormat::Iso8601).unwrap())
            .collect();
        let mut sorted = rendered.clone();
        sorted.sort();
        assert_eq!(rendered, sorted);
    }

    #[test]
    fn test_default_format() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Iso8601);
    }
}
