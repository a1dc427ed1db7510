//! Seller dashboard: profile summary, counters, and tabs for listings,
//! purchases and messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listings arrive here from the sell wizard through the shared
//! `DashboardState` context. The page redirects to `/login` when no session
//! is present. The listing search and the active tab are page-local.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toolbar::Toolbar;
use crate::i18n::{Translator, text};
use crate::state::auth::AuthState;
use crate::state::dashboard::{
    DashboardListing, DashboardState, DashboardStats, DashboardTab, ListingStatus, Message, Purchase,
};
use crate::util::auth::install_unauth_redirect;
use crate::util::countdown::{Age, now_ms};
use crate::util::files;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    install_unauth_redirect(auth, use_navigate());

    let tab = RwSignal::new(DashboardTab::default());
    let stats = Memo::new(move |_| dashboard.with(DashboardState::stats));
    let user = move || auth.get().user;

    let stat = move |label_key: &'static str, pick: fn(&DashboardStats) -> usize| {
        view! {
            <div class="stat-card">
                <span class="stat-card__value">{move || stats.with(pick)}</span>
                <span class="stat-card__label">{text(i18n, label_key)}</span>
            </div>
        }
    };

    view! {
        <div class="dashboard-page">
            <Toolbar/>
            {move || {
                user()
                    .map(|u| {
                        view! {
                            <section class="card dashboard-page__profile">
                                <h1>{u.name}</h1>
                                <span class="dashboard-page__email">{u.email}</span>
                                <span class="dashboard-page__meta">
                                    {format!("★ {:.1} · ", u.rating)}
                                    {text(i18n, "field.memberSince")}
                                    {format!(" {}", u.join_year)}
                                </span>
                            </section>
                        }
                    })
            }}

            <section class="dashboard-page__stats">
                {stat("dashboard.stat.total", |s| s.total)}
                {stat("dashboard.stat.active", |s| s.active)}
                {stat("dashboard.stat.sold", |s| s.sold)}
                {stat("dashboard.stat.fixed", |s| s.fixed)}
                {stat("dashboard.stat.auctions", |s| s.auctions)}
                {stat("dashboard.stat.trades", |s| s.trades)}
                {stat("dashboard.stat.multiPhoto", |s| s.multi_photo)}
                {stat("dashboard.stat.photos", |s| s.photos)}
                {stat("dashboard.stat.purchases", |s| s.purchases)}
                {stat("dashboard.stat.unread", |s| s.unread)}
            </section>

            <nav class="tabs dashboard-page__tabs">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {text(i18n, t.label_key())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            {move || match tab.get() {
                DashboardTab::Listings => view! { <ListingsTab/> }.into_any(),
                DashboardTab::Purchases => view! { <PurchasesTab/> }.into_any(),
                DashboardTab::Messages => view! { <MessagesTab/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ListingsTab() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    let query = RwSignal::new(String::new());

    let matches = Memo::new(move |_| {
        query.with(|q| dashboard.with(|d| d.search(q).into_iter().cloned().collect::<Vec<_>>()))
    });
    let empty_key = move || {
        if dashboard.with(|d| d.listings.is_empty()) { "dashboard.empty" } else { "dashboard.noMatches" }
    };

    view! {
        <section class="card dashboard-page__listings">
            <header class="dashboard-page__listings-header">
                <input
                    class="dashboard-page__search"
                    type="search"
                    placeholder=text(i18n, "dashboard.search")
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <a class="btn btn--primary" href="/sell">{text(i18n, "listing.create")}</a>
            </header>
            <Show
                when=move || matches.with(|m| !m.is_empty())
                fallback=move || {
                    view! { <p class="dashboard-page__empty">{move || i18n.with(|t| t.t(empty_key()))}</p> }
                }
            >
                <table class="listing-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{text(i18n, "field.title")}</th>
                            <th>{text(i18n, "field.category")}</th>
                            <th>{text(i18n, "field.terms")}</th>
                            <th>{text(i18n, "field.location")}</th>
                            <th>{text(i18n, "field.photos")}</th>
                            <th>{text(i18n, "field.status")}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            matches
                                .get()
                                .into_iter()
                                .map(|entry| view! { <ListingRow entry=entry/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn ListingRow(entry: DashboardListing) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    let DashboardListing { id, listing, status } = entry;
    let thumbnail = listing.images.first().and_then(|img| img.preview_url.clone()).unwrap_or_default();
    let category_key = listing.category.label_key();
    let terms = listing.terms.clone();
    let sold = status == ListingStatus::Sold;

    let on_remove = move |_| {
        let mut removed = None;
        dashboard.update(|d| removed = d.remove(id));
        if let Some(listing) = removed {
            log::info!("listing removed: {:?}", listing.title);
            listing.images.iter().for_each(files::release);
        }
    };

    view! {
        <tr class:listing-table__row--sold=sold>
            <td>
                <img class="listing-table__thumb" src=thumbnail alt=""/>
            </td>
            <td>{listing.title.clone()}</td>
            <td>{text(i18n, category_key)}</td>
            <td>{move || i18n.with(|t| terms.summary(t))}</td>
            <td>{listing.location.clone()}</td>
            <td>{listing.images.len()}</td>
            <td>
                <span class="badge">{text(i18n, status.label_key())}</span>
            </td>
            <td class="listing-table__actions">
                <Show when=move || !sold>
                    <button
                        class="btn"
                        on:click=move |_| {
                            dashboard.update(|d| {
                                d.mark_sold(id);
                            });
                        }
                    >
                        {text(i18n, "dashboard.markSold")}
                    </button>
                </Show>
                <button class="btn btn--danger" on:click=on_remove>
                    {text(i18n, "dashboard.remove")}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn PurchasesTab() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let now = now_ms();

    view! {
        <section class="dashboard-page__cards">
            {move || {
                dashboard
                    .get()
                    .purchases
                    .into_iter()
                    .map(|purchase| view! { <PurchaseCard purchase=purchase now=now/> })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[component]
fn PurchaseCard(purchase: Purchase, now: i64) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let age = Age::since(purchase.ordered_at, now);

    view! {
        <article class="card purchase-card">
            <img class="purchase-card__image" src=purchase.image.clone() alt=purchase.title.clone()/>
            <div class="purchase-card__body">
                <h3>{purchase.title.clone()}</h3>
                <span class="purchase-card__seller">{text(i18n, "field.seller")} ": " {purchase.seller.clone()}</span>
                <span class="purchase-card__age">{move || i18n.with(|t| t.ago(age))}</span>
            </div>
            <div class="purchase-card__side">
                <span class="purchase-card__price">{format!("${}", purchase.price)}</span>
                <span class="badge">{text(i18n, purchase.status.label_key())}</span>
            </div>
        </article>
    }
}

#[component]
fn MessagesTab() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let now = now_ms();

    view! {
        <section class="dashboard-page__cards">
            {move || {
                dashboard
                    .get()
                    .messages
                    .into_iter()
                    .map(|message| view! { <MessageCard message=message now=now/> })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[component]
fn MessageCard(message: Message, now: i64) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    let id = message.id;
    let unread = message.unread;
    let age = Age::since(message.sent_at, now);

    view! {
        <article class="card message-card" class:message-card--unread=unread>
            <header class="message-card__header">
                <h3>{message.from.clone()}</h3>
                <Show when=move || unread>
                    <span class="badge badge--alert">{text(i18n, "dashboard.unreadBadge")}</span>
                </Show>
                <span class="message-card__age">{move || i18n.with(|t| t.ago(age))}</span>
            </header>
            <h4>{message.subject.clone()}</h4>
            <p class="message-card__preview">{message.preview.clone()}</p>
            <Show when=move || unread>
                <button
                    class="btn"
                    on:click=move |_| {
                        dashboard.update(|d| {
                            d.mark_read(id);
                        });
                    }
                >
                    {text(i18n, "dashboard.markRead")}
                </button>
            </Show>
        </article>
    }
}
