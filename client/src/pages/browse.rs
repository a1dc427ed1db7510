//! Browse page: hero search, category chips and the product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The visible products are a memoized filter over
//! the catalog context, keyed on the search query and category selector held
//! in `UiState`.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::toolbar::Toolbar;
use crate::i18n::{Translator, text};
use crate::state::catalog::{CatalogState, CategoryFilter, Product, filter_products};
use crate::state::taxonomy::Category;
use crate::state::ui::{UiState, ViewMode};

/// Categories offered as chips on the browse page.
const BROWSE_CATEGORIES: [Category; 5] = [
    Category::Electronics,
    Category::Fashion,
    Category::Home,
    Category::Collectibles,
    Category::Vehicles,
];

#[component]
pub fn BrowsePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = expect_context::<RwSignal<Translator>>();

    let query = Memo::new(move |_| ui.with(|u| u.search_query.clone()));
    let category = Memo::new(move |_| ui.with(|u| u.category));
    let visible = Memo::new(move |_| {
        let query = query.get();
        let category = category.get();
        catalog.with(|c| {
            filter_products(&c.products, &query, category)
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        })
    });

    let chip = move |filter: CategoryFilter, label_key: &'static str| {
        view! {
            <button
                class="chip"
                class:chip--active=move || category.get() == filter
                on:click=move |_| ui.update(|u| u.category = filter)
            >
                {move || i18n.with(|t| t.t(label_key))}
            </button>
        }
    };

    view! {
        <div class="browse-page">
            <Toolbar/>
            <section class="hero">
                <h1 class="hero__title">{text(i18n, "hero.title")}</h1>
                <p class="hero__subtitle">{text(i18n, "hero.subtitle")}</p>
                <input
                    class="hero__search"
                    type="search"
                    placeholder=text(i18n, "hero.search")
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ui.update(|u| u.search_query = value);
                    }
                />
            </section>

            <section class="browse-page__filters">
                <div class="browse-page__chips">
                    {chip(CategoryFilter::All, "category.all")}
                    {BROWSE_CATEGORIES
                        .into_iter()
                        .map(|c| chip(CategoryFilter::Only(c), c.label_key()))
                        .collect::<Vec<_>>()}
                </div>
                <div class="browse-page__layout">
                    <button
                        class="btn"
                        class:btn--active=move || ui.get().view_mode == ViewMode::Grid
                        on:click=move |_| ui.update(|u| u.view_mode = ViewMode::Grid)
                        title="Grid view"
                    >
                        "▦"
                    </button>
                    <button
                        class="btn"
                        class:btn--active=move || ui.get().view_mode == ViewMode::List
                        on:click=move |_| ui.update(|u| u.view_mode = ViewMode::List)
                        title="List view"
                    >
                        "☰"
                    </button>
                </div>
            </section>

            <h2 class="browse-page__count">
                {move || visible.with(Vec::len)}
                " "
                {text(i18n, "product.found")}
            </h2>

            <div class="browse-page__products" class:browse-page__products--list=move || ui.get().view_mode == ViewMode::List>
                {move || {
                    let list = ui.with(|u| u.view_mode == ViewMode::List);
                    visible
                        .get()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product list=list/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
