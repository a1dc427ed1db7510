//! Login page with sign-in and sign-up modes against the mock session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toolbar::Toolbar;
use crate::i18n::{Translator, text};
use crate::state::auth::AuthState;

/// Which form the login card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Trim and require an email plus a password.
pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// Trim and require a display name on top of the sign-in fields.
pub(crate) fn validate_sign_up_input(name: &str, email: &str, password: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = validate_sign_in_input(email, password)?;
    Ok((name.to_owned(), email))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if auth.with(|a| a.user.is_some()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = match mode.get() {
            AuthMode::SignIn => validate_sign_in_input(&email.get(), &password.get()).map(|email| {
                auth.update(|a| a.login(&email));
            }),
            AuthMode::SignUp => {
                validate_sign_up_input(&name.get(), &email.get(), &password.get()).map(|(name, email)| {
                    auth.update(|a| a.signup(&name, &email));
                })
            }
        };
        match result {
            Ok(()) => info.set(String::new()),
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <Toolbar/>
            <div class="login-card">
                <h1>
                    {move || match mode.get() {
                        AuthMode::SignIn => i18n.with(|t| t.t("nav.login")),
                        AuthMode::SignUp => i18n.with(|t| t.t("nav.signup")),
                    }}
                </h1>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        {move || match mode.get() {
                            AuthMode::SignIn => i18n.with(|t| t.t("nav.login")),
                            AuthMode::SignUp => i18n.with(|t| t.t("nav.signup")),
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button
                    class="btn login-card__switch"
                    on:click=move |_| {
                        info.set(String::new());
                        mode.update(|m| *m = m.toggled());
                    }
                >
                    {move || match mode.get() {
                        AuthMode::SignIn => "Need an account? Sign up",
                        AuthMode::SignUp => "Already have an account? Sign in",
                    }}
                </button>
                <a class="login-card__back" href="/">{text(i18n, "nav.home")}</a>
            </div>
        </div>
    }
}
