//! Timestamp and duration scalars
//!
//! Both follow the protobuf well-known types: whole seconds plus a nanosecond
//! adjustment. Values are stored as given; no normalization is applied, so two
//! values compare equal only if both components are equal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Point in time relative to the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

impl Timestamp {
    /// Create a timestamp from seconds and nanos since the epoch
    pub const fn create(seconds: i64, nanos: i32) -> Self {
        Timestamp { seconds, nanos }
    }

    /// Whole seconds since the epoch
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond adjustment
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seconds(f, self.seconds, self.nanos)
    }
}

/// Signed span of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

impl Duration {
    /// Create a duration from seconds and nanos
    pub const fn create(seconds: i64, nanos: i32) -> Self {
        Duration { seconds, nanos }
    }

    /// Whole seconds
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond adjustment
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seconds(f, self.seconds, self.nanos)?;
        f.write_str("s")
    }
}

// `seconds.fraction`, the fraction being |nanos|. A negative nanos with zero
// seconds carries the sign; mixed signs are not normalized.
fn write_seconds(f: &mut fmt::Formatter<'_>, seconds: i64, nanos: i32) -> fmt::Result {
    if seconds == 0 && nanos < 0 {
        f.write_str("-")?;
    }
    write!(f, "{}.{:09}", seconds, nanos.unsigned_abs())
}
