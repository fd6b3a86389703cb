//! Unsigned millisecond time management.
//!
//! `EndorserTime` is used both as a UNIX timestamp (status reporting) and as a
//! duration (scheduler periods, backoff, RPC timeouts in configuration files).
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod error;
pub use error::TimeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Milliseconds, either since 01/01/1970 or as a plain interval.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct EndorserTime(u64);

impl fmt::Display for EndorserTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_millis())
    }
}

impl TryFrom<Duration> for EndorserTime {
    type Error = TimeError;

    /// Conversion from `std::time::Duration`.
    /// ```
    /// # use std::time::Duration;
    /// # use endorser_time::*;
    /// let duration: Duration = Duration::from_millis(42);
    /// let time : EndorserTime = EndorserTime::from_millis(42);
    /// assert_eq!(time, EndorserTime::try_from(duration).unwrap());
    /// ```
    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        Ok(EndorserTime(
            value
                .as_millis()
                .try_into()
                .map_err(|_| TimeError::ConversionError)?,
        ))
    }
}

impl From<EndorserTime> for Duration {
    fn from(value: EndorserTime) -> Self {
        value.to_duration()
    }
}

impl FromStr for EndorserTime {
    type Err = TimeError;

    /// ```
    /// # use endorser_time::*;
    /// # use std::str::FromStr;
    /// assert_eq!(EndorserTime::from_millis(42), EndorserTime::from_str("42").unwrap());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EndorserTime(
            u64::from_str(s.trim()).map_err(|_| TimeError::ConversionError)?,
        ))
    }
}

impl EndorserTime {
    /// Conversion from `u64`, representing milliseconds.
    pub const fn from_millis(value: u64) -> Self {
        EndorserTime(value)
    }

    /// Conversion from `u64`, representing seconds.
    pub const fn from_secs(value: u64) -> Self {
        EndorserTime(value.saturating_mul(1000))
    }

    /// Gets current UNIX timestamp (resolution: milliseconds).
    pub fn now() -> Result<Self, TimeError> {
        let now: u64 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TimeError::TimeOverflowError)?
            .as_millis()
            .try_into()
            .map_err(|_| TimeError::TimeOverflowError)?;
        Ok(EndorserTime(now))
    }

    /// Conversion to `std::time::Duration`.
    /// ```
    /// # use std::time::Duration;
    /// # use endorser_time::*;
    /// let time : EndorserTime = EndorserTime::from_millis(42);
    /// assert_eq!(time.to_duration(), Duration::from_millis(42));
    /// ```
    pub fn to_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Conversion to `u64`, representing milliseconds.
    pub const fn to_millis(&self) -> u64 {
        self.0
    }

    /// ```
    /// # use endorser_time::*;
    /// let time_1 = EndorserTime::from_millis(42);
    /// let time_2 = EndorserTime::from_millis(7);
    /// assert_eq!(time_2.saturating_sub(time_1), EndorserTime::from_millis(0));
    /// ```
    #[must_use]
    pub fn saturating_sub(self, t: EndorserTime) -> Self {
        EndorserTime(self.0.saturating_sub(t.0))
    }

    /// Formats the timestamp as RFC 3339, second precision.
    ///
    /// ```
    /// # use endorser_time::*;
    /// let t = EndorserTime::from_millis(1_640_995_200_000);
    /// assert_eq!(t.format_instant(), String::from("2022-01-01T00:00:00Z"))
    /// ```
    pub fn format_instant(&self) -> String {
        let secs = i64::try_from(self.to_millis() / 1000).unwrap_or(i64::MAX);
        OffsetDateTime::from_unix_timestamp(secs)
            .ok()
            .and_then(|date_time| date_time.format(&Rfc3339).ok())
            .unwrap_or_else(|| format!("{}ms", self.0))
    }
}
