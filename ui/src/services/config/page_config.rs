//! Page Configuration
//!
//! Branding, validation settings and animation presets for the sign-up page.
//! Every section has working defaults; a JSON override only needs to name the
//! values it changes.

use serde::{Deserialize, Serialize};

use crate::features::signup::animations::{AnimationPresets, Transition};
use crate::features::signup::validation::{
    SignUpSchema, ValidationMessages, DEFAULT_MIN_PASSWORD_LENGTH,
};
use crate::services::errors::ConfigError;

/// Complete configuration for the sign-up page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Logos, organisation name and author credit
    pub branding: BrandingConfig,

    /// Validation rules and messages
    pub validation: ValidationConfig,

    /// Entry transitions
    pub animations: AnimationPresets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Name used in the heading and the welcome message
    pub organization: String,

    /// Large logo shown on the branding pane
    pub logo_url: String,

    /// Small logo shown on the login modal
    pub icon_url: String,

    pub author_name: String,
    pub author_url: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            organization: "Rocketseat".to_string(),
            logo_url: "https://rocketseat.com.br/static/images/experience/RSXP.svg".to_string(),
            icon_url: "https://rocketseat.com.br/static/images/logo-rocketseat.svg".to_string(),
            author_name: "Luke Morales".to_string(),
            author_url: "https://github.com/lukemorales".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_password_length: usize,

    /// Re-run validation on every edit once a submit has been attempted
    pub live_validation: bool,

    pub messages: ValidationMessages,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            live_validation: true,
            messages: ValidationMessages::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing sections and fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parse and validate an optional override, falling back to the defaults
    /// when it is absent or unusable.
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config.or_default_if_invalid(),
            Err(error) => {
                tracing::warn!(%error, "ignoring page configuration override");
                Self::default()
            }
        }
    }

    /// Keep this configuration if it validates, otherwise use the defaults
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(errors) => {
                for error in &errors {
                    tracing::warn!(%error, "ignoring page configuration override");
                }
                Self::default()
            }
        }
    }

    /// Validation schema built from this configuration
    pub fn schema(&self) -> SignUpSchema {
        SignUpSchema::new(
            self.validation.min_password_length,
            self.validation.live_validation,
            self.validation.messages.clone(),
        )
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.branding.organization.trim().is_empty() {
            errors.push(ConfigError::Empty {
                field: "branding.organization".to_string(),
            });
        }

        if self.validation.min_password_length == 0 {
            errors.push(ConfigError::InvalidValue {
                field: "validation.min_password_length".to_string(),
                value: "0".to_string(),
            });
        }

        let messages = &self.validation.messages;
        let message_fields = [
            ("full_name_required", &messages.full_name_required),
            ("username_required", &messages.username_required),
            ("email_required", &messages.email_required),
            ("email_invalid", &messages.email_invalid),
            ("password_required", &messages.password_required),
            ("password_too_short", &messages.password_too_short),
            ("confirm_password_required", &messages.confirm_password_required),
            ("passwords_differ", &messages.passwords_differ),
        ];
        for (name, message) in message_fields {
            if message.trim().is_empty() {
                errors.push(ConfigError::Empty {
                    field: format!("validation.messages.{}", name),
                });
            }
        }

        for (name, transition) in self.animations.all() {
            validate_transition(name, transition, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_transition(name: &str, transition: &Transition, errors: &mut Vec<ConfigError>) {
    let non_negative = [
        ("delay", transition.delay),
        ("delay_children", transition.delay_children),
        ("stagger_children", transition.stagger_children),
    ];
    let positive = [
        ("spring.stiffness", transition.spring.stiffness),
        ("spring.damping", transition.spring.damping),
        ("spring.mass", transition.spring.mass),
    ];

    for (field, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            errors.push(invalid(name, field, value));
        }
    }
    for (field, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            errors.push(invalid(name, field, value));
        }
    }

    let opacity = transition.from.opacity;
    if !(0.0..=1.0).contains(&opacity) {
        errors.push(invalid(name, "from.opacity", opacity));
    }
}

fn invalid(preset: &str, field: &str, value: f64) -> ConfigError {
    ConfigError::InvalidValue {
        field: format!("animations.{}.{}", preset, field),
        value: value.to_string(),
    }
}
