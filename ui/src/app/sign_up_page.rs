use crate::{console_debug, console_info};
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonType, ButtonVariant};
use crate::components::forms::{LoginFormComponent, SignUpForm, SIGN_UP_FORM_ID};
use crate::components::icons::{Icon, IconGlyph};
use crate::components::modal::Modal;
use crate::features::signup::{ModalKind, SignUpAction, SignUpState};
use crate::services::config::PageConfig;

const SIGN_UP_CSS: Asset = asset!("/assets/styling/sign_up.css");

const SUCCESS_COLOR: &str = "#04D361";
const SOCIAL_COLOR: &str = "#373546";

#[derive(Props, PartialEq, Clone)]
pub struct SignUpPageProps {
    /// Invoked by the back button in the branding pane
    pub on_back: EventHandler<()>,
    /// Overrides the default branding, validation and animation settings
    pub config: Option<PageConfig>,
}

#[component]
pub fn SignUpPage(props: SignUpPageProps) -> Element {
    let initial_config = props.config.clone();
    let config =
        use_context_provider(move || initial_config.unwrap_or_default().or_default_if_invalid());
    let schema = use_hook(|| config.schema());

    let mut state = use_signal(SignUpState::default);

    // In-place reduction keeps the Signal's identity across actions
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        console_debug!("[SignUp] {}", action.name());
        let submitting = action == SignUpAction::Submit;

        state.with_mut(|s| s.reduce_in_place(action, &schema));

        if submitting {
            let current = state.peek();
            match current.confirmation_details() {
                Some((username, _)) if current.errors.is_empty() => {
                    console_info!("[SignUp] Account details accepted for {}", username);
                }
                _ => {
                    console_debug!("[SignUp] Submission rejected: {}", current.errors);
                }
            }
        }
    });

    let on_back = props.on_back;
    let branding = config.branding.clone();
    let presets = config.animations.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: SIGN_UP_CSS }

        div {
            class: "sign-up-page",

            aside {
                class: "left-container",
                style: presets.pane_slide_in.style(),

                header {
                    Button {
                        variant: ButtonVariant::Secondary,
                        icon: Icon::ArrowBack,
                        icon_size: 24,
                        onclick: move |_| on_back.call(())
                    }
                }

                h1 {
                    style: presets.logo_rise.style(),
                    img {
                        src: "{branding.logo_url}",
                        alt: "{branding.organization}"
                    }
                }

                small {
                    "Made by "
                    a {
                        href: "{branding.author_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{branding.author_name}"
                    }
                }
            }

            main {
                class: "right-container",

                header {
                    "Já é um membro? "
                    Button {
                        variant: ButtonVariant::Inline,
                        label: "Entrar".to_string(),
                        onclick: move |_| dispatch.call(SignUpAction::OpenModal(ModalKind::LoginPrompt))
                    }
                }

                section {
                    class: "form-pane",
                    style: presets.form_fade_in.style(),

                    h3 { "Inscreva-se na {branding.organization}" }

                    // Social sign-in is not available; the buttons are decorative
                    section {
                        class: "social-buttons",
                        Button { icon: Icon::Google, label: "Entrar com Google".to_string() }
                        Button { color: SOCIAL_COLOR.to_string(), icon: Icon::Twitter }
                        Button { color: SOCIAL_COLOR.to_string(), icon: Icon::Facebook }
                    }

                    div {
                        class: "divider",
                        hr {}
                        span { "Ou" }
                    }

                    SignUpForm { state, dispatch }

                    Button {
                        color: SUCCESS_COLOR.to_string(),
                        large: true,
                        button_type: ButtonType::Submit,
                        form: SIGN_UP_FORM_ID.to_string(),
                        label: "Criar conta".to_string()
                    }
                }
            }

            ConfirmationModal { state, dispatch, organization: branding.organization.clone() }

            Modal {
                open: state().modals.login_prompt,
                icon: rsx! {
                    img { src: "{branding.icon_url}", alt: "{branding.organization}" }
                },
                title: "Entrar com Sua Conta".to_string(),
                on_close: move |_| dispatch.call(SignUpAction::CloseModal(ModalKind::LoginPrompt)),
                footer: rsx! {
                    Button {
                        variant: ButtonVariant::Secondary,
                        label: "Cancelar".to_string(),
                        onclick: move |_| dispatch.call(SignUpAction::CloseModal(ModalKind::LoginPrompt))
                    }
                    Button {
                        label: "Entrar".to_string(),
                        onclick: move |_| dispatch.call(SignUpAction::CloseModal(ModalKind::LoginPrompt))
                    }
                },
                LoginFormComponent { state, dispatch }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct ConfirmationModalProps {
    state: Signal<SignUpState>,
    dispatch: EventHandler<SignUpAction>,
    organization: String,
}

/// Welcome dialog showing the retained username and email
#[component]
fn ConfirmationModal(props: ConfirmationModalProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();

    let Some(payload) = current.submitted.as_ref() else {
        return rsx! {};
    };

    rsx! {
        Modal {
            open: current.modals.signup_confirmation,
            icon: rsx! {
                IconGlyph { icon: Icon::CheckCircle, size: 48, color: SUCCESS_COLOR.to_string() }
            },
            title: format!("Bem-vindo a {},\n{}", props.organization, payload.full_name),
            success: true,
            on_close: move |_| dispatch.call(SignUpAction::CloseModal(ModalKind::SignUpConfirmation)),
            footer: rsx! {
                p { "Confira sua caixa de entrada pelo email que enviamos contendo o link de confirmação." }
            },
            p {
                "Seu usuário de acesso é: "
                em { "{payload.username}" }
                " e agora só falta confirmar seu email ("
                a { href: "mailto:{payload.email}", "{payload.email}" }
                ")."
            }
        }
    }
}
