use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Rendered as a text link inside surrounding copy
    Inline,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Inline => "btn btn-inline",
        }
    }
}

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub button_type: ButtonType,
    /// Text shown next to the icon; icon-only buttons leave it out
    pub label: Option<String>,
    pub icon: Option<Icon>,
    #[props(default = 18)]
    pub icon_size: u32,
    /// Background colour override
    pub color: Option<String>,
    #[props(default)]
    pub large: bool,
    /// Id of the form this button submits when it sits outside that form
    pub form: Option<String>,
    pub onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let size_class = if props.large { " btn-large" } else { "" };
    let icon_only_class = if props.label.is_none() && props.icon.is_some() {
        " btn-icon"
    } else {
        ""
    };
    let style = props
        .color
        .as_deref()
        .map(|color| format!("background-color: {};", color))
        .unwrap_or_default();
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{props.variant.class()}{size_class}{icon_only_class}",
            style: "{style}",
            r#type: "{props.button_type.as_str()}",
            "form": props.form.clone(),
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            if let Some(icon) = props.icon {
                IconGlyph { icon, size: props.icon_size }
            }
            if let Some(label) = props.label.clone() {
                span { class: "btn-label", "{label}" }
            }
        }
    }
}
