pub mod address;

pub use address::is_valid_address;
