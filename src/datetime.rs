//! FILETIME conversion.
//!
//! A FILETIME counts 100-nanosecond ticks since 1601-01-01T00:00:00Z.

use chrono::{DateTime, Utc};

/// FILETIME to Unix epoch offset (100-nanosecond intervals)
pub const FILETIME_UNIX_EPOCH: i64 = 116_444_736_000_000_000;

const TICKS_PER_SECOND: i128 = 10_000_000;
const NANOS_PER_TICK: i128 = 100;

/// Nanoseconds since 1970-01-01T00:00:00Z for a FILETIME tick count.
///
/// Negative for instants before 1970. Every `u64` input is representable.
pub fn filetime_to_unix_nanos(ticks: u64) -> i128 {
    (i128::from(ticks) - i128::from(FILETIME_UNIX_EPOCH)) * NANOS_PER_TICK
}

/// Convert a FILETIME to `DateTime<Utc>` without losing the sub-second ticks
pub fn filetime_to_datetime(ticks: u64) -> DateTime<Utc> {
    let since_epoch = i128::from(ticks) - i128::from(FILETIME_UNIX_EPOCH);
    let seconds = since_epoch.div_euclid(TICKS_PER_SECOND);
    let nanos = since_epoch.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK;

    // u64::MAX ticks is around the year 60056, well inside chrono's range
    DateTime::from_timestamp(seconds as i64, nanos as u32).unwrap_or(DateTime::<Utc>::MAX_UTC)
}
