pub mod activity;
pub mod analytics;
pub mod chains;
pub mod config;
pub mod error;
pub mod provider;
pub mod types;
pub mod utils;

pub use error::{Result, TrackerError};
pub use types::*;
