/*!
 * Text formatting helpers for the listing columns
 */

use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::types::Permissions;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Width of the date column
pub const DATE_WIDTH: usize = 12;

/// Width of the size column for files
pub const SIZE_WIDTH: usize = 5;

/// Width of the size placeholder for directories
pub const DIR_SIZE_WIDTH: usize = 4;

/// Left-pad `text` with spaces up to `width` characters
pub fn pad_left(width: usize, text: &str) -> String {
    format!("{:>width$}", text, width = width)
}

/// Format a byte count with binary unit suffixes, rounding down
pub fn friendly_size(size: u64) -> String {
    if size < KIB {
        size.to_string()
    } else if size < MIB {
        format!("{}Ki", size / KIB)
    } else if size < GIB {
        format!("{}Mi", size / MIB)
    } else {
        format!("{}Gi", size / GIB)
    }
}

/// Format a timestamp as `D Mon HH:MM`, right-aligned to the date column
pub fn format_date<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pad_left(DATE_WIDTH, &time.format("%-d %b %H:%M").to_string())
}

/// Placeholder for timestamps chrono cannot represent
const UNKNOWN_DATE: &str = "?";

/// Convert a filesystem timestamp, `None` when it is out of chrono's range
pub fn to_utc(time: SystemTime) -> Option<DateTime<Utc>> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (secs.checked_neg()?, 0),
                nanos => (secs.checked_neg()?.checked_sub(1)?, 1_000_000_000 - nanos),
            }
        }
    };
    DateTime::from_timestamp(secs, nanos)
}

/// Format a filesystem timestamp in the local time zone
pub fn format_system_time(time: SystemTime) -> String {
    match to_utc(time) {
        Some(utc) => format_date(&utc.with_timezone(&Local)),
        None => pad_left(DATE_WIDTH, UNKNOWN_DATE),
    }
}

/// The nine `rwx` characters for a set of permissions
pub fn permission_string(permissions: Permissions) -> String {
    Permissions::BITS
        .iter()
        .map(|&(bit, action)| {
            if permissions.is_set(bit) {
                action.letter()
            } else {
                '-'
            }
        })
        .collect()
}
