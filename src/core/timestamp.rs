//! Timestamp formatting for log entries
//!
//! Entries carry an ISO-8601 timestamp with microsecond precision and an
//! explicit UTC offset, rendered in the logger's configured timezone.

use chrono::{DateTime, FixedOffset, Local, Utc};

const ISO_8601_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Timezone applied to entry timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogTimezone {
    /// Coordinated universal time, the default.
    #[default]
    Utc,
    /// The host's local timezone.
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl LogTimezone {
    /// Format the current instant in this timezone.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinklog::core::timestamp::LogTimezone;
    ///
    /// let stamp = LogTimezone::Utc.format_now();
    /// assert!(stamp.ends_with("+00:00"));
    /// ```
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(Utc::now())
    }

    /// Format a specific instant in this timezone.
    #[must_use]
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            LogTimezone::Utc => instant.format(ISO_8601_MICROS).to_string(),
            LogTimezone::Local => instant
                .with_timezone(&Local)
                .format(ISO_8601_MICROS)
                .to_string(),
            LogTimezone::Fixed(offset) => instant
                .with_timezone(offset)
                .format(ISO_8601_MICROS)
                .to_string(),
        }
    }
}
