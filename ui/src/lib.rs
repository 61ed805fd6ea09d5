//! Shared UI for the sign-up page: components, page state, validation and
//! configuration.

pub mod app;
pub use app::SignUpPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
