//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging macros
//! - **validation**: string checks shared by the validation schema and inputs

pub mod console_macros;
pub mod validation;

pub use validation::*;
