//! Product detail page: image carousel, per-type price panel, watch toggle,
//! and tabs for description, details, shipping and (auctions only) bids.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::toolbar::Toolbar;
use crate::i18n::{Translator, text};
use crate::state::catalog::{Bid, CatalogState, Product, ProductKind};
use crate::state::ui::{Carousel, DetailTab, UiState, min_next_bid};
use crate::util::countdown::{Age, CountdownStyle, now_ms};

#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    let params = use_params_map();

    let product = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()))?;
        catalog.with(|c| c.find(id).cloned())
    });

    view! {
        <div class="product-page">
            <Toolbar/>
            <a class="product-page__back" href="/">{text(i18n, "listing.back")}</a>
            {move || match product.get() {
                Some(product) => view! { <ProductDetail product=product/> }.into_any(),
                None => view! { <p class="product-page__missing">{text(i18n, "product.notFound")}</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let id = product.id;
    let watching = Memo::new(move |_| ui.with(|u| u.is_watching(id)));
    let base_watchers = product.watchers;
    let views = product.views;
    let tabbed = product.clone();
    let images = product.images.clone();
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let multi = images.len() > 1;
    let current_image = {
        let images = images.clone();
        move || images.get(carousel.get().index).cloned().unwrap_or_default()
    };

    let panel = match product.kind.clone() {
        ProductKind::Fixed => view! {
            <div class="price-panel">
                <span class="price-panel__amount">{format!("${}", product.price)}</span>
                <button class="btn btn--primary">{text(i18n, "product.buyNow")}</button>
            </div>
        }
        .into_any(),
        ProductKind::Auction { current_bid, end_time } => view! {
            <div class="price-panel">
                <span class="price-panel__label">{text(i18n, "product.currentBid")}</span>
                <span class="price-panel__amount">{format!("${current_bid}")}</span>
                <span class="price-panel__hint">
                    {text(i18n, "product.minimumBid")}
                    {format!(": ${}", min_next_bid(current_bid))}
                </span>
                <CountdownTimer end_time=end_time style=CountdownStyle::Detailed/>
            </div>
        }
        .into_any(),
        ProductKind::Trade { trade_for } => view! {
            <div class="price-panel">
                <span class="price-panel__label">{text(i18n, "product.lookingFor")}</span>
                <span class="price-panel__trade-for">{trade_for}</span>
                <span class="price-panel__hint">
                    {text(i18n, "product.estimatedValue")}
                    {format!(": ${}", product.price)}
                </span>
                <button class="btn btn--primary">{text(i18n, "product.trade")}</button>
            </div>
        }
        .into_any(),
    };

    let category_key = product.category.label_key();

    view! {
        <article class="product-detail">
            <div class="carousel">
                <img class="carousel__image" src=current_image alt=product.title.clone()/>
                <Show when=move || multi>
                    <button class="carousel__prev" aria-label="Previous image" on:click=move |_| carousel.update(Carousel::prev)>
                        "‹"
                    </button>
                    <button class="carousel__next" aria-label="Next image" on:click=move |_| carousel.update(Carousel::next)>
                        "›"
                    </button>
                </Show>
                <div class="carousel__dots">
                    {(0..images.len())
                        .map(|i| {
                            view! {
                                <button
                                    class="carousel__dot"
                                    class:carousel__dot--active=move || carousel.get().index == i
                                    on:click=move |_| carousel.update(|c| c.select(i))
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="product-detail__info">
                <span class="product-detail__category">{move || i18n.with(|t| t.t(category_key))}</span>
                <h1 class="product-detail__title">{product.title.clone()}</h1>
                <span class="product-detail__seller">
                    {product.seller.clone()}
                    " ★ "
                    {format!("{:.1}", product.rating)}
                </span>
                <div class="product-detail__engagement">
                    <span>{move || i18n.with(|t| t.t_args("detail.views", &[("n", views.to_string())]))}</span>
                    <span>
                        {move || {
                            let count = base_watchers + u32::from(watching.get());
                            i18n.with(|t| t.t_args("detail.watchers", &[("n", count.to_string())]))
                        }}
                    </span>
                    <button
                        class="btn product-detail__watch"
                        class:product-detail__watch--on=move || watching.get()
                        aria-pressed=move || watching.get().to_string()
                        on:click=move |_| {
                            ui.update(|u| {
                                u.toggle_watch(id);
                            });
                        }
                    >
                        {move || i18n.with(|t| t.t(if watching.get() { "detail.watching" } else { "detail.watch" }))}
                    </button>
                </div>
                {panel}
            </div>
        </article>
        <DetailTabs product=tabbed/>
    }
}

#[component]
fn DetailTabs(product: Product) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let tabs = DetailTab::for_kind(&product.kind);
    let active = RwSignal::new(DetailTab::default());
    let details = product.details();
    let category_key = product.category.label_key();
    let condition_key = details.condition.label_key();
    let now = now_ms();
    let bids = product.bid_history(now);
    let rating = format!("{:.1}", product.rating);

    let body = move |tab: DetailTab| match tab {
        DetailTab::Description => view! { <p class="detail-tabs__text">{details.description.clone()}</p> }.into_any(),
        DetailTab::Details => view! {
            <dl class="detail-tabs__facts">
                <dt>{text(i18n, "field.condition")}</dt>
                <dd>{text(i18n, condition_key)}</dd>
                <dt>{text(i18n, "field.category")}</dt>
                <dd>{text(i18n, category_key)}</dd>
                <dt>{text(i18n, "field.location")}</dt>
                <dd>{details.location}</dd>
                <dt>{text(i18n, "field.sellerRating")}</dt>
                <dd>{format!("★ {rating}")}</dd>
                <dt>{text(i18n, "field.memberSince")}</dt>
                <dd>{details.seller_since.to_string()}</dd>
            </dl>
        }
        .into_any(),
        DetailTab::Shipping => view! {
            <dl class="detail-tabs__facts">
                <dt>{text(i18n, "field.shipping")}</dt>
                <dd>{details.shipping}</dd>
                <dt>{text(i18n, "field.returns")}</dt>
                <dd>{details.returns}</dd>
            </dl>
        }
        .into_any(),
        DetailTab::Bids => view! { <BidHistory bids=bids.clone() now=now/> }.into_any(),
    };

    view! {
        <section class="card detail-tabs">
            <nav class="tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || active.get() == tab
                                on:click=move |_| active.set(tab)
                            >
                                {text(i18n, tab.label_key())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="detail-tabs__body">{move || body(active.get())}</div>
        </section>
    }
}

#[component]
fn BidHistory(bids: Vec<Bid>, now: i64) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();

    view! {
        <ol class="bid-history">
            {bids
                .into_iter()
                .map(|bid| {
                    let age = Age::since(bid.placed_at, now);
                    view! {
                        <li class="bid-history__row">
                            <span class="bid-history__bidder">{bid.bidder}</span>
                            <span class="bid-history__age">{move || i18n.with(|t| t.ago(age))}</span>
                            <span class="bid-history__amount">{format!("${}", bid.amount)}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
