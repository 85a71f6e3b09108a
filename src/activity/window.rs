/// Trailing 365-day window construction and day-key formatting
use chrono::{Duration, Local, NaiveDate};

use crate::types::ActivityHistogram;

/// Number of calendar days covered by the activity window
pub const WINDOW_DAYS: i64 = 365;

/// Format a calendar date as the canonical `YYYY-MM-DD` day key.
///
/// Every component of the pipeline must go through this formatter: histogram
/// lookups are exact string comparisons, so zero-padding and 1-based months
/// have to match everywhere.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The trailing 365-day window, anchored to a calendar date.
///
/// Keys are chronological (oldest first), one per calendar day, anchor
/// inclusive.
#[derive(Debug, Clone)]
pub struct ActivityWindow {
    anchor: NaiveDate,
    keys: Vec<String>,
}

impl ActivityWindow {
    /// Build the window ending at the given anchor date
    pub fn anchored(anchor: NaiveDate) -> Self {
        let keys = (0..WINDOW_DAYS)
            .rev()
            .map(|offset| day_key(anchor - Duration::days(offset)))
            .collect();

        ActivityWindow { anchor, keys }
    }

    /// Build the window for "now", anchored to the local calendar date
    pub fn current() -> Self {
        Self::anchored(Local::now().date_naive())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// A fresh zero-filled histogram over this window's keys.
    ///
    /// Always a new allocation: cached histograms must never share identity
    /// with the template handed to the transformer.
    pub fn zero_histogram(&self) -> ActivityHistogram {
        self.keys.iter().map(|key| (key.clone(), 0)).collect()
    }
}
