//! User Interface Components
//!
//! - **button**: buttons with primary, secondary and inline variants
//! - **forms**: the sign-up form and the login modal's form
//! - **icons**: glyphs shared by buttons, inputs and modals
//! - **inputs**: labelled inputs with inline errors and the visibility toggle
//! - **modal**: overlay dialog

pub mod button;
pub mod forms;
pub mod icons;
pub mod inputs;
pub mod modal;
