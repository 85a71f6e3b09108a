pub mod fallback;
pub mod tracker;
pub mod transform;
pub mod window;

pub use fallback::generate_fallback;
pub use tracker::ActivityTracker;
pub use transform::{bucket_transfers, decode_timestamp_millis};
pub use window::{day_key, ActivityWindow, WINDOW_DAYS};
