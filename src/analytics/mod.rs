pub mod score;

pub use score::{compute_score, ActivityLevel, ActivityScore};
