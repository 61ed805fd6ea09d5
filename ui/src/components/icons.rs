use dioxus::prelude::*;

/// Glyphs used by buttons, inputs and modals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowBack,
    Google,
    Twitter,
    Facebook,
    Email,
    Lock,
    Visibility,
    VisibilityOff,
    CheckCircle,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::ArrowBack => "⬅",
            Icon::Google => "G",
            Icon::Twitter => "🐦",
            Icon::Facebook => "f",
            Icon::Email => "✉",
            Icon::Lock => "🔒",
            Icon::Visibility => "👁",
            Icon::VisibilityOff => "◌",
            Icon::CheckCircle => "✔",
        }
    }

    /// Accessible name announced for the glyph
    pub fn label(&self) -> &'static str {
        match self {
            Icon::ArrowBack => "Voltar",
            Icon::Google => "Google",
            Icon::Twitter => "Twitter",
            Icon::Facebook => "Facebook",
            Icon::Email => "Email",
            Icon::Lock => "Senha",
            Icon::Visibility => "Mostrar senha",
            Icon::VisibilityOff => "Ocultar senha",
            Icon::CheckCircle => "Sucesso",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Icon::ArrowBack => "icon icon-back",
            Icon::Google => "icon icon-google",
            Icon::Twitter => "icon icon-twitter",
            Icon::Facebook => "icon icon-facebook",
            Icon::Email => "icon icon-email",
            Icon::Lock => "icon icon-lock",
            Icon::Visibility => "icon icon-visibility",
            Icon::VisibilityOff => "icon icon-visibility-off",
            Icon::CheckCircle => "icon icon-check-circle",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[props(default = 18)]
    pub size: u32,
    pub color: Option<String>,
}

#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let color = props
        .color
        .as_deref()
        .map(|color| format!(" color: {};", color))
        .unwrap_or_default();

    rsx! {
        span {
            class: "{props.icon.class()}",
            role: "img",
            aria_label: "{props.icon.label()}",
            style: "font-size: {props.size}px;{color}",
            "{props.icon.glyph()}"
        }
    }
}
