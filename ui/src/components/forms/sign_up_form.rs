use dioxus::prelude::*;

use crate::components::inputs::{FormInput, InputType, VisibilityToggle};
use crate::components::icons::Icon;
use crate::features::signup::{FormField, PasswordInput, SignUpAction, SignUpState};
use crate::services::config::PageConfig;

pub const SIGN_UP_FORM_ID: &str = "signUpForm";

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
}

/// The five sign-up inputs. Submitted by the page's "Criar conta" button
/// through the form id.
#[component]
pub fn SignUpForm(props: SignUpFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = use_context::<PageConfig>();
    let presets = config.animations;

    let field_error = move |field: FormField| state().error_for(field).map(str::to_string);
    let child_style = move |index: usize| presets.child_drop_in.child_style(&presets.form_fade_in, index);

    rsx! {
        form {
            id: SIGN_UP_FORM_ID,
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                dispatch.call(SignUpAction::Submit);
            },

            div {
                class: "form-row",
                FormInput {
                    name: FormField::FullName.input_name().to_string(),
                    value: state().draft.full_name,
                    input_type: InputType::Text,
                    label: "Nome Completo".to_string(),
                    error: field_error(FormField::FullName),
                    animation: child_style(0),
                    on_change: move |value: String| {
                        dispatch.call(SignUpAction::SetField(FormField::FullName, value));
                    }
                }
                FormInput {
                    name: FormField::Username.input_name().to_string(),
                    value: state().draft.username,
                    input_type: InputType::Text,
                    label: "Username".to_string(),
                    error: field_error(FormField::Username),
                    animation: child_style(1),
                    on_change: move |value: String| {
                        dispatch.call(SignUpAction::SetField(FormField::Username, value));
                    }
                }
            }

            FormInput {
                name: FormField::Email.input_name().to_string(),
                value: state().draft.email,
                input_type: InputType::Email,
                label: "Email".to_string(),
                icon: Icon::Email,
                error: field_error(FormField::Email),
                animation: child_style(2),
                on_change: move |value: String| {
                    dispatch.call(SignUpAction::SetField(FormField::Email, value));
                }
            }

            FormInput {
                name: FormField::Password.input_name().to_string(),
                value: state().draft.password,
                input_type: InputType::masked(state().visibility.password),
                label: "Senha".to_string(),
                icon: Icon::Lock,
                error: field_error(FormField::Password),
                animation: child_style(3),
                trailing: rsx! {
                    VisibilityToggle {
                        visible: state().visibility.password,
                        on_toggle: move |_| dispatch.call(SignUpAction::ToggleVisibility(PasswordInput::Password))
                    }
                },
                on_change: move |value: String| {
                    dispatch.call(SignUpAction::SetField(FormField::Password, value));
                }
            }

            FormInput {
                name: FormField::ConfirmPassword.input_name().to_string(),
                value: state().draft.confirm_password,
                input_type: InputType::masked(state().visibility.confirm_password),
                label: "Confirmar Senha".to_string(),
                icon: Icon::Lock,
                error: field_error(FormField::ConfirmPassword),
                animation: child_style(4),
                trailing: rsx! {
                    VisibilityToggle {
                        visible: state().visibility.confirm_password,
                        on_toggle: move |_| dispatch.call(SignUpAction::ToggleVisibility(PasswordInput::ConfirmPassword))
                    }
                },
                on_change: move |value: String| {
                    dispatch.call(SignUpAction::SetField(FormField::ConfirmPassword, value));
                }
            }
        }
    }
}
