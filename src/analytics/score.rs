/// Derived activity score and qualitative level
use serde::{Deserialize, Serialize};

use crate::types::ActivityHistogram;

/// Qualitative activity level derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Beginner,
    Active,
    Intermediate,
    Advanced,
}

impl ActivityLevel {
    pub fn from_score(score: u64) -> Self {
        if score > 100 {
            ActivityLevel::Advanced
        } else if score > 50 {
            ActivityLevel::Intermediate
        } else if score > 10 {
            ActivityLevel::Active
        } else {
            ActivityLevel::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Beginner => "Beginner",
            ActivityLevel::Active => "Active",
            ActivityLevel::Intermediate => "Intermediate",
            ActivityLevel::Advanced => "Advanced",
        }
    }
}

/// Activity score summary for one histogram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityScore {
    pub total: u64,
    pub level: ActivityLevel,
}

/// Total score is the sum of all daily counts over the window
pub fn compute_score(histogram: &ActivityHistogram) -> ActivityScore {
    let total: u64 = histogram.values().map(|&count| count as u64).sum();
    ActivityScore {
        total,
        level: ActivityLevel::from_score(total),
    }
}
