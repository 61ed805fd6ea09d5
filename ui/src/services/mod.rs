//! Page Services
//!
//! - **config**: page configuration (branding, validation settings, animation presets)
//! - **errors**: error types shared across the crate

pub mod config;
pub mod errors;

pub use config::PageConfig;
pub use errors::{ConfigError, ValidationErrors};
