use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    pub open: bool,
    pub icon: Element,
    /// Line breaks start a new title line
    pub title: String,
    #[props(default)]
    pub success: bool,
    pub footer: Option<Element>,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// Overlay dialog rendered only while `open`
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let class = if props.success { "modal modal-success" } else { "modal" };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "{class}",
                role: "dialog",
                aria_modal: "true",
                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Fechar",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                div { class: "modal-icon", {props.icon} }
                h2 {
                    class: "modal-title",
                    for (index, line) in props.title.lines().enumerate() {
                        span { key: "{index}", class: "modal-title-line", "{line}" }
                    }
                }
                div { class: "modal-body", {props.children} }
                if let Some(content) = props.footer.clone() {
                    footer { class: "modal-footer", {content} }
                }
            }
        }
    }
}
