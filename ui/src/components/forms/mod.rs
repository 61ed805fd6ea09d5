pub mod login_form;
pub mod sign_up_form;

pub use login_form::*;
pub use sign_up_form::*;
