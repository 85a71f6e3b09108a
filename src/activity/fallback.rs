/// Synthetic activity generation for degraded mode
use rand::Rng;

use crate::activity::window::{ActivityWindow, WINDOW_DAYS};
use crate::types::ActivityHistogram;

/// Random bursts spread over the window
const FALLBACK_BURSTS: usize = 100;

/// Build a plausible synthetic histogram over the window's exact key set.
///
/// Used when the address is invalid or the upstream fetch fails; the caller
/// still gets a histogram satisfying the 365-key domain invariant.
pub fn generate_fallback(window: &ActivityWindow) -> ActivityHistogram {
    let mut histogram = window.zero_histogram();
    let mut rng = rand::thread_rng();

    for _ in 0..FALLBACK_BURSTS {
        let offset = rng.gen_range(0..WINDOW_DAYS) as usize;
        let key = &window.keys()[offset];
        // 1-3 transactions on a random day
        if let Some(count) = histogram.get_mut(key) {
            *count += rng.gen_range(1..=3);
        }
    }

    histogram
}
