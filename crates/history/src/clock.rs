//! crates/history/src/clock.rs
//! Process-wide wall clock that never runs backwards.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;
use time::macros::format_description;

const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00.000Z";

/// Latest value handed out by [`Timestamp::now`], in nanoseconds since the Unix epoch.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Creation time of a [`Record`](crate::Record).
///
/// Values produced by [`Timestamp::now`] are monotonically non-decreasing for
/// the lifetime of the process: when the system clock steps backwards the most
/// recently issued value is reused instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Timestamp {
    unix_nanos: u64,
}

impl Timestamp {
    /// Captures the current time.
    #[must_use]
    pub fn now() -> Self {
        let wall = u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos()).unwrap_or(0);
        let previous = LAST_ISSUED.fetch_max(wall, Ordering::AcqRel);
        Self {
            unix_nanos: previous.max(wall),
        }
    }

    /// Builds a timestamp from nanoseconds since the Unix epoch.
    ///
    /// The value bypasses the process clock; it is intended for replaying or
    /// constructing records with a known time.
    #[must_use]
    pub const fn from_unix_nanos(unix_nanos: u64) -> Self {
        Self { unix_nanos }
    }

    /// Nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn unix_nanos(self) -> u64 {
        self.unix_nanos
    }

    /// Converts into a UTC [`OffsetDateTime`].
    #[must_use]
    pub fn to_offset_date_time(self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.unix_nanos))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Renders the timestamp as fixed-width RFC 3339 text in UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use history::Timestamp;
    ///
    /// let ts = Timestamp::from_unix_nanos(1_714_564_800_123_000_000);
    /// assert_eq!(ts.to_rfc3339(), "2024-05-01T12:00:00.123Z");
    /// ```
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        self.to_offset_date_time()
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ))
            .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
