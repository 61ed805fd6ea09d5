//! Form inputs with a label, leading icon, inline error and an optional
//! trailing control

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::utils::validation::input_class;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }

    /// Password inputs render as plain text while revealed
    pub fn masked(visible: bool) -> Self {
        if visible {
            InputType::Text
        } else {
            InputType::Password
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormInputProps {
    pub name: String,
    pub value: String,
    pub input_type: InputType,
    pub label: Option<String>,
    pub icon: Option<Icon>,
    /// Message rendered under the input
    pub error: Option<String>,
    /// Inline entry animation
    pub animation: Option<String>,
    /// Control rendered at the end of the input row
    pub trailing: Option<Element>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "form-input",
            style: props.animation.clone(),

            if let Some(text) = props.label.clone() {
                label {
                    class: "input-label",
                    r#for: "{props.name}",
                    "{text}"
                }
            }

            div {
                class: "input-row",
                if let Some(icon) = props.icon {
                    IconGlyph { icon }
                }
                input {
                    id: "{props.name}",
                    name: "{props.name}",
                    class: input_class(props.error.as_deref()),
                    r#type: props.input_type.as_str(),
                    value: "{props.value}",
                    oninput: move |event| on_change.call(event.value())
                }
                if let Some(trailing) = props.trailing.clone() {
                    {trailing}
                }
            }

            if let Some(error) = props.error.clone() {
                span {
                    class: "input-error",
                    role: "alert",
                    "{error}"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct VisibilityToggleProps {
    pub visible: bool,
    pub on_toggle: EventHandler<()>,
}

/// Masks or reveals the password input it sits in
#[component]
pub fn VisibilityToggle(props: VisibilityToggleProps) -> Element {
    let (icon, color) = if props.visible {
        (Icon::VisibilityOff, "#5E5C66")
    } else {
        (Icon::Visibility, "#fff")
    };
    let on_toggle = props.on_toggle;

    rsx! {
        button {
            class: "btn__transparent",
            r#type: "button",
            tabindex: "-1",
            onclick: move |_| on_toggle.call(()),
            IconGlyph { icon, color: color.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_input_type() {
        assert_eq!(InputType::masked(false), InputType::Password);
        assert_eq!(InputType::masked(true).as_str(), "text");
    }
}
