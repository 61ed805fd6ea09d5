//! Sign-up feature: page state, validation schema and entry animations

pub mod animations;
pub mod types;
pub mod validation;

pub use animations::*;
pub use types::*;
pub use validation::*;
