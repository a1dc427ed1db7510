//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::i18n::{Translator, load_language};
use crate::pages::{
    browse::BrowsePage, dashboard::DashboardPage, login::LoginPage, product::ProductPage, sell::SellPage,
};
use crate::state::{
    auth::AuthState,
    catalog::{CatalogState, mock_products},
    dashboard::DashboardState,
    ui::UiState,
};
use crate::util::{countdown, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Server and hydrating client both start from defaults; browser storage
    // is only read by the restore effect below.
    let auth = RwSignal::new(AuthState::default());
    let i18n = RwSignal::new(Translator::default());
    let ui = RwSignal::new(UiState::default());
    let catalog = RwSignal::new(CatalogState::new(mock_products(countdown::now_ms())));
    let dashboard = RwSignal::new(DashboardState::seeded(countdown::now_ms()));

    provide_context(auth);
    provide_context(i18n);
    provide_context(ui);
    provide_context(catalog);
    provide_context(dashboard);

    Effect::new(move || {
        auth.set(AuthState::restore());
        i18n.set(Translator::new(load_language()));
        ui.update(|u| u.dark_mode = dark_mode::read_preference());
    });
    Effect::new(move || dark_mode::apply(ui.with(|u| u.dark_mode)));

    view! {
        <Stylesheet id="leptos" href="/pkg/bazaar.css"/>
        <Title text="Bazaar"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BrowsePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("sell") view=SellPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
            </Routes>
        </Router>
    }
}
