// Core types for the sign-up page - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::signup::validation::{SignUpSchema, ValidationErrors};

/// The five sign-up fields, declared in form order.
///
/// The derived `Ord` follows declaration order, so any ordered collection keyed
/// by `FormField` iterates fields the way the form renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    FullName,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::FullName,
        FormField::Username,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    /// Input name used in the rendered form.
    pub fn input_name(&self) -> &'static str {
        match self {
            FormField::FullName => "signName",
            FormField::Username => "signUsername",
            FormField::Email => "signEmail",
            FormField::Password => "signPassword",
            FormField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Values collected from the sign-up form
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SignUpPayload {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpPayload {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

// Passwords never reach logs
impl fmt::Debug for SignUpPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpPayload")
            .field("full_name", &self.full_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("confirm_password", &"[redacted]")
            .finish()
    }
}

/// Values typed into the login modal. Never validated or sent anywhere.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDraft")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Password inputs that can be switched between masked and plaintext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordInput {
    Password,
    ConfirmPassword,
    LoginPassword,
}

/// Masked (false) or plaintext (true) rendering per password input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub password: bool,
    pub confirm_password: bool,
    pub login_password: bool,
}

impl VisibilityFlags {
    pub fn is_visible(&self, input: PasswordInput) -> bool {
        match input {
            PasswordInput::Password => self.password,
            PasswordInput::ConfirmPassword => self.confirm_password,
            PasswordInput::LoginPassword => self.login_password,
        }
    }

    pub fn toggle(&mut self, input: PasswordInput) {
        let flag = match input {
            PasswordInput::Password => &mut self.password,
            PasswordInput::ConfirmPassword => &mut self.confirm_password,
            PasswordInput::LoginPassword => &mut self.login_password,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    SignUpConfirmation,
    LoginPrompt,
}

/// Open/closed state of the two overlays. The flags never affect each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    pub signup_confirmation: bool,
    pub login_prompt: bool,
}

impl ModalVisibility {
    pub fn is_open(&self, modal: ModalKind) -> bool {
        match modal {
            ModalKind::SignUpConfirmation => self.signup_confirmation,
            ModalKind::LoginPrompt => self.login_prompt,
        }
    }

    pub fn set(&mut self, modal: ModalKind, open: bool) {
        match modal {
            ModalKind::SignUpConfirmation => self.signup_confirmation = open,
            ModalKind::LoginPrompt => self.login_prompt = open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Confirmed,
}

/// Page view-model for the sign-up screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpState {
    pub draft: SignUpPayload,
    pub login: LoginDraft,
    pub errors: ValidationErrors,
    pub visibility: VisibilityFlags,
    pub modals: ModalVisibility,
    /// Payload of the last successful submission
    pub submitted: Option<SignUpPayload>,
    pub submit_attempted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignUpAction {
    // Sign-up form actions
    SetField(FormField, String),
    Submit,

    // Login modal actions
    SetLoginEmail(String),
    SetLoginPassword(String),
    SubmitLogin,

    // Presentation actions
    ToggleVisibility(PasswordInput),
    OpenModal(ModalKind),
    CloseModal(ModalKind),
}

impl SignUpAction {
    /// Variant name for logs. Field values are left out so passwords never leak.
    pub fn name(&self) -> &'static str {
        match self {
            SignUpAction::SetField(..) => "SetField",
            SignUpAction::Submit => "Submit",
            SignUpAction::SetLoginEmail(_) => "SetLoginEmail",
            SignUpAction::SetLoginPassword(_) => "SetLoginPassword",
            SignUpAction::SubmitLogin => "SubmitLogin",
            SignUpAction::ToggleVisibility(_) => "ToggleVisibility",
            SignUpAction::OpenModal(_) => "OpenModal",
            SignUpAction::CloseModal(_) => "CloseModal",
        }
    }
}

impl SignUpState {
    pub fn phase(&self) -> SubmissionPhase {
        if self.submitted.is_some() {
            SubmissionPhase::Confirmed
        } else {
            SubmissionPhase::Idle
        }
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Username and email shown by the confirmation modal
    pub fn confirmation_details(&self) -> Option<(&str, &str)> {
        self.submitted
            .as_ref()
            .map(|payload| (payload.username.as_str(), payload.email.as_str()))
    }

    /// Apply an action in place so the enclosing Signal keeps its identity.
    pub fn reduce_in_place(&mut self, action: SignUpAction, schema: &SignUpSchema) {
        match action {
            SignUpAction::SetField(field, value) => {
                self.draft.set_field(field, value);
                if self.submit_attempted && schema.live_validation() {
                    self.errors = match schema.validate(&self.draft) {
                        Ok(()) => ValidationErrors::default(),
                        Err(errors) => errors,
                    };
                }
            }
            SignUpAction::Submit => {
                self.submit_attempted = true;
                match schema.validate(&self.draft) {
                    Ok(()) => {
                        tracing::debug!(username = %self.draft.username, "sign-up form accepted");
                        self.errors = ValidationErrors::default();
                        let mut accepted = self.draft.clone();
                        accepted.email = accepted.email.trim().to_string();
                        self.submitted = Some(accepted);
                        self.modals.signup_confirmation = true;
                    }
                    Err(errors) => {
                        tracing::debug!(failed_fields = errors.len(), "sign-up form rejected");
                        self.errors = errors;
                    }
                }
            }
            SignUpAction::SetLoginEmail(email) => {
                self.login.email = email;
            }
            SignUpAction::SetLoginPassword(password) => {
                self.login.password = password;
            }
            SignUpAction::SubmitLogin => {
                // Login is not implemented; the modal's form accepts nothing.
                tracing::debug!("login submit ignored");
            }
            SignUpAction::ToggleVisibility(input) => {
                self.visibility.toggle(input);
            }
            SignUpAction::OpenModal(modal) => {
                self.modals.set(modal, true);
            }
            SignUpAction::CloseModal(modal) => {
                self.modals.set(modal, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::is_valid_email;

    fn ana() -> SignUpPayload {
        SignUpPayload {
            full_name: "Ana Silva".to_string(),
            username: "anasilva".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    fn fill(state: &mut SignUpState, schema: &SignUpSchema, payload: &SignUpPayload) {
        for field in FormField::ALL {
            state.reduce_in_place(
                SignUpAction::SetField(field, payload.field(field).to_string()),
                schema,
            );
        }
    }

    #[test]
    fn test_successful_submit_opens_confirmation() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        fill(&mut state, &schema, &ana());

        state.reduce_in_place(SignUpAction::Submit, &schema);

        assert_eq!(state.phase(), SubmissionPhase::Confirmed);
        assert!(state.modals.signup_confirmation);
        assert!(!state.modals.login_prompt);
        assert!(state.errors.is_empty());
        assert_eq!(
            state.confirmation_details(),
            Some(("anasilva", "ana@example.com"))
        );
    }

    #[test]
    fn test_failed_submit_stays_idle_with_errors() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        state.reduce_in_place(
            SignUpAction::SetField(FormField::Email, "ana".to_string()),
            &schema,
        );

        state.reduce_in_place(SignUpAction::Submit, &schema);

        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert!(!state.modals.signup_confirmation);
        assert!(state.error_for(FormField::FullName).is_some());
        assert_eq!(state.error_for(FormField::Email), Some("Email inválido"));
    }

    #[test]
    fn test_closing_confirmation_keeps_payload() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        fill(&mut state, &schema, &ana());
        state.reduce_in_place(SignUpAction::Submit, &schema);

        state.reduce_in_place(
            SignUpAction::CloseModal(ModalKind::SignUpConfirmation),
            &schema,
        );
        assert!(!state.modals.signup_confirmation);
        assert_eq!(state.submitted, Some(ana()));

        state.reduce_in_place(
            SignUpAction::OpenModal(ModalKind::SignUpConfirmation),
            &schema,
        );
        assert_eq!(
            state.confirmation_details(),
            Some(("anasilva", "ana@example.com"))
        );
    }

    #[test]
    fn test_resubmission_replaces_payload_and_failure_keeps_it() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        fill(&mut state, &schema, &ana());
        state.reduce_in_place(SignUpAction::Submit, &schema);

        state.reduce_in_place(
            SignUpAction::SetField(FormField::Username, "ana.s".to_string()),
            &schema,
        );
        state.reduce_in_place(SignUpAction::Submit, &schema);
        assert_eq!(state.confirmation_details(), Some(("ana.s", "ana@example.com")));

        state.reduce_in_place(
            SignUpAction::SetField(FormField::Password, "123".to_string()),
            &schema,
        );
        state.reduce_in_place(SignUpAction::Submit, &schema);
        assert!(state.error_for(FormField::Password).is_some());
        assert_eq!(state.confirmation_details(), Some(("ana.s", "ana@example.com")));
    }

    #[test]
    fn test_live_validation_after_first_attempt() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();

        // No errors while typing before the first submit
        state.reduce_in_place(
            SignUpAction::SetField(FormField::Password, "abc".to_string()),
            &schema,
        );
        assert!(state.errors.is_empty());

        state.reduce_in_place(SignUpAction::Submit, &schema);
        assert!(state.error_for(FormField::Password).is_some());

        state.reduce_in_place(
            SignUpAction::SetField(FormField::Password, "abcdef".to_string()),
            &schema,
        );
        assert_eq!(state.error_for(FormField::Password), None);
        assert!(state.error_for(FormField::FullName).is_some());
    }

    #[test]
    fn test_visibility_toggle_is_isolated() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::OpenModal(ModalKind::LoginPrompt), &schema);
        let modals_before = state.modals;

        state.reduce_in_place(
            SignUpAction::ToggleVisibility(PasswordInput::ConfirmPassword),
            &schema,
        );

        assert_eq!(
            state.visibility,
            VisibilityFlags {
                password: false,
                confirm_password: true,
                login_password: false,
            }
        );
        assert_eq!(state.modals, modals_before);

        state.reduce_in_place(
            SignUpAction::ToggleVisibility(PasswordInput::ConfirmPassword),
            &schema,
        );
        assert_eq!(state.visibility, VisibilityFlags::default());

        state.reduce_in_place(SignUpAction::ToggleVisibility(PasswordInput::Password), &schema);
        assert_eq!(
            state.visibility,
            VisibilityFlags {
                password: true,
                confirm_password: false,
                login_password: false,
            }
        );
        assert_eq!(state.modals, modals_before);

        state.reduce_in_place(SignUpAction::ToggleVisibility(PasswordInput::Password), &schema);
        state.reduce_in_place(
            SignUpAction::ToggleVisibility(PasswordInput::LoginPassword),
            &schema,
        );
        assert_eq!(
            state.visibility,
            VisibilityFlags {
                password: false,
                confirm_password: false,
                login_password: true,
            }
        );
        assert!(state.visibility.is_visible(PasswordInput::LoginPassword));
        assert_eq!(state.modals, modals_before);
    }

    #[test]
    fn test_modals_are_independent() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        fill(&mut state, &schema, &ana());

        state.reduce_in_place(SignUpAction::OpenModal(ModalKind::LoginPrompt), &schema);
        state.reduce_in_place(SignUpAction::Submit, &schema);
        assert!(state.modals.login_prompt);
        assert!(state.modals.signup_confirmation);

        state.reduce_in_place(SignUpAction::CloseModal(ModalKind::LoginPrompt), &schema);
        assert!(!state.modals.login_prompt);
        assert!(state.modals.signup_confirmation);
    }

    #[test]
    fn test_closing_confirmation_leaves_login_open() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        fill(&mut state, &schema, &ana());

        state.reduce_in_place(SignUpAction::OpenModal(ModalKind::LoginPrompt), &schema);
        state.reduce_in_place(SignUpAction::Submit, &schema);

        state.reduce_in_place(
            SignUpAction::CloseModal(ModalKind::SignUpConfirmation),
            &schema,
        );
        assert!(!state.modals.is_open(ModalKind::SignUpConfirmation));
        assert!(state.modals.is_open(ModalKind::LoginPrompt));
        assert_eq!(state.visibility, VisibilityFlags::default());
    }

    #[test]
    fn test_login_submit_is_inert() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::OpenModal(ModalKind::LoginPrompt), &schema);
        state.reduce_in_place(
            SignUpAction::SetLoginEmail("ana@example.com".to_string()),
            &schema,
        );
        let before = state.clone();

        state.reduce_in_place(SignUpAction::SubmitLogin, &schema);
        assert_eq!(state, before);
    }

    #[test]
    fn test_stored_email_is_trimmed() {
        let schema = SignUpSchema::default();
        let mut state = SignUpState::default();
        let padded = SignUpPayload {
            email: "  ana@example.com ".to_string(),
            ..ana()
        };
        fill(&mut state, &schema, &padded);

        state.reduce_in_place(SignUpAction::Submit, &schema);

        let (_, email) = state.confirmation_details().unwrap();
        assert_eq!(email, "ana@example.com");
        assert!(is_valid_email(email));
        // The draft keeps exactly what was typed
        assert_eq!(state.draft.email, "  ana@example.com ");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let rendered = format!("{:?}", ana());
        assert!(rendered.contains("anasilva"));
        assert!(!rendered.contains("secret1"));
    }
}
