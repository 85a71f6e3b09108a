/// Transfer-to-bucket transformation
use chrono::{Local, TimeZone};
use tracing::debug;

use crate::activity::window::{day_key, ActivityWindow};
use crate::types::{ActivityHistogram, TimestampValue, TransferRecord};

/// Decode an upstream block timestamp to epoch milliseconds.
///
/// Numbers are epoch seconds. Strings are hex seconds when 0x-prefixed,
/// decimal seconds otherwise. Anything unparseable yields None and the
/// record is treated as outside the window.
pub fn decode_timestamp_millis(value: &TimestampValue) -> Option<i64> {
    let seconds = match value {
        TimestampValue::Seconds(s) => *s,
        TimestampValue::Text(text) => {
            let trimmed = text.trim();
            if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
                i64::from_str_radix(hex, 16).ok()?
            } else {
                trimmed.parse::<i64>().ok()?
            }
        }
    };

    if seconds < 0 {
        return None;
    }
    seconds.checked_mul(1000)
}

/// Derive the day key for an epoch-millisecond timestamp, using the local
/// calendar date (the same calendar the window builder anchors to).
fn day_key_for_millis(millis: i64) -> Option<String> {
    let datetime = Local.timestamp_millis_opt(millis).single()?;
    Some(day_key(datetime.date_naive()))
}

/// Bucket transfer records into a fresh zero-filled histogram over the
/// window. Records outside the window, or with missing/unparseable
/// timestamps, are silently dropped; a bad record never aborts aggregation.
pub fn bucket_transfers(window: &ActivityWindow, records: &[TransferRecord]) -> ActivityHistogram {
    let mut histogram = window.zero_histogram();
    let mut dropped = 0usize;

    for record in records {
        let bucketed = record
            .timestamp
            .as_ref()
            .and_then(decode_timestamp_millis)
            .and_then(|millis| day_key_for_millis(millis))
            .and_then(|key| histogram.get_mut(&key))
            .map(|count| *count += 1)
            .is_some();

        if !bucketed {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!("Dropped {} transfers outside the {}-day window", dropped, window.keys().len());
    }

    histogram
}
