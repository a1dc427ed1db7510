//! Site header: brand, navigation, language picker, theme toggle, session.

use leptos::prelude::*;

use crate::i18n::{Language, Translator, save_language, text};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = expect_context::<RwSignal<Translator>>();

    let on_language = move |ev: leptos::ev::Event| {
        let Some(language) = Language::from_code(&event_target_value(&ev)) else {
            return;
        };
        save_language(language);
        i18n.update(|t| t.language = language);
    };

    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()));

    view! {
        <header class="toolbar">
            <a class="toolbar__brand" href="/">"Bazaar"</a>
            <nav class="toolbar__nav">
                <a class="toolbar__link" href="/">{text(i18n, "nav.browse")}</a>
                <a class="toolbar__link" href="/sell">{text(i18n, "nav.sell")}</a>
            </nav>

            <span class="toolbar__spacer"></span>

            <select class="toolbar__language" on:change=on_language aria-label="Language">
                {Language::ALL
                    .into_iter()
                    .map(|lang| {
                        view! {
                            <option value=lang.code() selected=move || i18n.get().language == lang>
                                {lang.native_name()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let next = dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            {move || match user_name() {
                Some(name) => view! {
                    <a class="toolbar__link" href="/dashboard">{text(i18n, "nav.dashboard")}</a>
                    <span class="toolbar__self">{name}</span>
                    <button class="btn toolbar__logout" on:click=move |_| auth.update(AuthState::logout)>
                        {text(i18n, "nav.logout")}
                    </button>
                }
                .into_any(),
                None => view! {
                    <a class="btn toolbar__login" href="/login">{text(i18n, "nav.login")}</a>
                }
                .into_any(),
            }}
        </header>
    }
}
