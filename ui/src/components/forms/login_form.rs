use dioxus::prelude::*;

use crate::components::inputs::{FormInput, InputType, VisibilityToggle};
use crate::components::icons::Icon;
use crate::features::signup::{PasswordInput, SignUpAction, SignUpState};
use crate::services::config::PageConfig;

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormComponentProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
}

/// Email and password inputs of the login modal. Submitting does nothing;
/// there is no login backend.
#[component]
pub fn LoginFormComponent(props: LoginFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = use_context::<PageConfig>();
    let drop_in = config.animations.child_drop_in;

    rsx! {
        form {
            class: "login-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                dispatch.call(SignUpAction::SubmitLogin);
            },

            FormInput {
                name: "email".to_string(),
                value: state().login.email,
                input_type: InputType::Email,
                icon: Icon::Email,
                animation: drop_in.style(),
                on_change: move |value: String| dispatch.call(SignUpAction::SetLoginEmail(value))
            }

            FormInput {
                name: "password".to_string(),
                value: state().login.password,
                input_type: InputType::masked(state().visibility.login_password),
                label: "Senha".to_string(),
                icon: Icon::Lock,
                animation: drop_in.style(),
                trailing: rsx! {
                    VisibilityToggle {
                        visible: state().visibility.login_password,
                        on_toggle: move |_| dispatch.call(SignUpAction::ToggleVisibility(PasswordInput::LoginPassword))
                    }
                },
                on_change: move |value: String| dispatch.call(SignUpAction::SetLoginPassword(value))
            }
        }
    }
}
