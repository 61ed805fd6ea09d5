//! Sign-up validation schema
//!
//! The schema is an ordered list of per-field validators. Each validator sees the
//! whole payload so cross-field rules (password confirmation) read the current
//! value of the field they depend on. Within a field the first failing rule wins;
//! across fields every failure is collected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::features::signup::types::{FormField, SignUpPayload};
use crate::utils::validation::{char_count, is_blank, is_valid_email};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Field-level failures keyed in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("sign-up form has {} invalid field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: String) {
        self.0.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

/// User-facing messages for every rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub full_name_required: String,
    pub username_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub password_required: String,
    /// `{min}` is replaced with the configured minimum length
    pub password_too_short: String,
    pub confirm_password_required: String,
    pub passwords_differ: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            full_name_required: "Preencha com seu nome completo".to_string(),
            username_required: "Preencha um nome de usuário".to_string(),
            email_required: "Preencha seu email".to_string(),
            email_invalid: "Email inválido".to_string(),
            password_required: "Preencha uma senha".to_string(),
            password_too_short: "Senha deve ter no mínimo {min} caracteres".to_string(),
            confirm_password_required: "Confirmação de senha é obrigatória".to_string(),
            passwords_differ: "Senhas devem ser iguais".to_string(),
        }
    }
}

type FieldValidator = fn(&SignUpPayload, &SignUpSchema) -> Option<String>;

const RULES: [(FormField, FieldValidator); 5] = [
    (FormField::FullName, validate_full_name),
    (FormField::Username, validate_username),
    (FormField::Email, validate_email),
    (FormField::Password, validate_password),
    (FormField::ConfirmPassword, validate_confirm_password),
];

/// Sign-up rules plus the settings they are parameterised by
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpSchema {
    min_password_length: usize,
    live_validation: bool,
    messages: ValidationMessages,
}

impl Default for SignUpSchema {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH, true, ValidationMessages::default())
    }
}

impl SignUpSchema {
    pub fn new(min_password_length: usize, live_validation: bool, messages: ValidationMessages) -> Self {
        Self {
            min_password_length,
            live_validation,
            messages,
        }
    }

    /// Whether edits re-run the schema once a submit has been attempted
    pub fn live_validation(&self) -> bool {
        self.live_validation
    }

    pub fn validate(&self, payload: &SignUpPayload) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (field, rule) in RULES {
            if let Some(message) = rule(payload, self) {
                errors.insert(field, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            let fields: Vec<FormField> = errors.fields().collect();
            tracing::trace!(?fields, "validation failed");
            Err(errors)
        }
    }

    /// Run the rule for a single field
    pub fn validate_field(&self, payload: &SignUpPayload, field: FormField) -> Option<String> {
        RULES
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .and_then(|(_, rule)| rule(payload, self))
    }
}

fn validate_full_name(payload: &SignUpPayload, schema: &SignUpSchema) -> Option<String> {
    is_blank(&payload.full_name).then(|| schema.messages.full_name_required.clone())
}

fn validate_username(payload: &SignUpPayload, schema: &SignUpSchema) -> Option<String> {
    is_blank(&payload.username).then(|| schema.messages.username_required.clone())
}

fn validate_email(payload: &SignUpPayload, schema: &SignUpSchema) -> Option<String> {
    if is_blank(&payload.email) {
        Some(schema.messages.email_required.clone())
    } else if !is_valid_email(payload.email.trim()) {
        Some(schema.messages.email_invalid.clone())
    } else {
        None
    }
}

fn validate_password(payload: &SignUpPayload, schema: &SignUpSchema) -> Option<String> {
    if payload.password.is_empty() {
        Some(schema.messages.password_required.clone())
    } else if char_count(&payload.password) < schema.min_password_length {
        Some(
            schema
                .messages
                .password_too_short
                .replace("{min}", &schema.min_password_length.to_string()),
        )
    } else {
        None
    }
}

fn validate_confirm_password(payload: &SignUpPayload, schema: &SignUpSchema) -> Option<String> {
    if payload.confirm_password.is_empty() {
        Some(schema.messages.confirm_password_required.clone())
    } else if payload.confirm_password != payload.password {
        Some(schema.messages.passwords_differ.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> SignUpPayload {
        SignUpPayload {
            full_name: "Ana Silva".to_string(),
            username: "anasilva".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let schema = SignUpSchema::default();
        assert_eq!(schema.validate(&valid_payload()), Ok(()));
    }

    #[test]
    fn test_each_missing_field_reports_its_message() {
        let schema = SignUpSchema::default();
        let expected = [
            (FormField::FullName, "Preencha com seu nome completo"),
            (FormField::Username, "Preencha um nome de usuário"),
            (FormField::Email, "Preencha seu email"),
            (FormField::Password, "Preencha uma senha"),
            (FormField::ConfirmPassword, "Confirmação de senha é obrigatória"),
        ];

        for (field, message) in expected {
            let mut payload = valid_payload();
            payload.set_field(field, String::new());
            let errors = schema.validate(&payload).unwrap_err();
            assert_eq!(errors.get(field), Some(message), "field {:?}", field);
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let schema = SignUpSchema::default();
        let mut payload = valid_payload();
        payload.full_name = "   ".to_string();

        let errors = schema.validate(&payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::FullName),
            Some("Preencha com seu nome completo")
        );
    }

    #[test]
    fn test_whitespace_password_is_not_missing() {
        let schema = SignUpSchema::default();
        let mut payload = valid_payload();
        payload.password = "      ".to_string();
        payload.confirm_password = "      ".to_string();
        assert!(schema.validate(&payload).is_ok());

        payload.password = "   ".to_string();
        payload.confirm_password = "   ".to_string();
        let errors = schema.validate(&payload).unwrap_err();
        assert_eq!(
            errors.get(FormField::Password),
            Some("Senha deve ter no mínimo 6 caracteres")
        );
        assert_eq!(errors.get(FormField::ConfirmPassword), None);
    }

    #[test]
    fn test_short_password_fails_on_password() {
        let schema = SignUpSchema::default();
        let mut payload = valid_payload();
        payload.password = "abc12".to_string();
        payload.confirm_password = "abc12".to_string();

        let errors = schema.validate(&payload).unwrap_err();
        assert_eq!(
            errors.get(FormField::Password),
            Some("Senha deve ter no mínimo 6 caracteres")
        );
        assert_eq!(errors.get(FormField::ConfirmPassword), None);
    }

    #[test]
    fn test_password_length_counts_characters() {
        let schema = SignUpSchema::default();
        let mut payload = valid_payload();
        // Six characters, more than six bytes
        payload.password = "senhaç".to_string();
        payload.confirm_password = "senhaç".to_string();
        assert!(schema.validate(&payload).is_ok());
    }

    #[test]
    fn test_mismatch_fails_on_confirm_even_when_fields_are_valid() {
        let schema = SignUpSchema::default();
        let mut payload = valid_payload();
        payload.confirm_password = "secret2".to_string();

        let errors = schema.validate(&payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Senhas devem ser iguais")
        );
    }

    #[test]
    fn test_confirm_tracks_current_password() {
        let schema = SignUpSchema::default();
        let mut payload = valid_payload();
        assert_eq!(schema.validate_field(&payload, FormField::ConfirmPassword), None);

        payload.password = "another1".to_string();
        assert_eq!(
            schema.validate_field(&payload, FormField::ConfirmPassword),
            Some("Senhas devem ser iguais".to_string())
        );
    }

    #[test]
    fn test_malformed_emails_fail_on_email() {
        let schema = SignUpSchema::default();
        for email in ["ana", "ana@", "@example.com", "ana@example", "ana@@example.com"] {
            let mut payload = valid_payload();
            payload.email = email.to_string();
            let errors = schema.validate(&payload).unwrap_err();
            assert_eq!(errors.get(FormField::Email), Some("Email inválido"), "{}", email);
        }
    }

    #[test]
    fn test_errors_collect_across_fields_in_form_order() {
        let schema = SignUpSchema::default();
        let payload = SignUpPayload {
            email: "nope".to_string(),
            password: "123".to_string(),
            ..Default::default()
        };

        let errors = schema.validate(&payload).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), FormField::ALL.to_vec());
        assert_eq!(errors.to_string(), "sign-up form has 5 invalid field(s)");
    }

    #[test]
    fn test_custom_minimum_is_used_in_message() {
        let schema = SignUpSchema::new(8, true, ValidationMessages::default());
        let errors = schema.validate(&valid_payload()).unwrap_err();
        assert_eq!(
            errors.get(FormField::Password),
            Some("Senha deve ter no mínimo 8 caracteres")
        );
    }
}
