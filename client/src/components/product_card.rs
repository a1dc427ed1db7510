//! Catalog card for the browse grid and list.

use leptos::prelude::*;

use crate::components::countdown_timer::CountdownTimer;
use crate::i18n::{Translator, text};
use crate::state::catalog::{Product, ProductKind};

/// A clickable card linking to the product page.
#[component]
pub fn ProductCard(product: Product, #[prop(optional)] list: bool) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let href = format!("/product/{}", product.id);
    let image = product.main_image().unwrap_or_default().to_owned();
    let category_key = product.category.label_key();

    let price_block = match product.kind.clone() {
        ProductKind::Fixed => view! {
            <div class="product-card__price">
                <span class="product-card__amount">{format!("${}", product.price)}</span>
                <span class="badge">{text(i18n, "product.buyNow")}</span>
            </div>
        }
        .into_any(),
        ProductKind::Auction { current_bid, end_time } => view! {
            <div class="product-card__price">
                <span class="product-card__amount">{format!("${current_bid}")}</span>
                <span class="badge badge--auction">{text(i18n, "product.auction")}</span>
                <CountdownTimer end_time=end_time/>
            </div>
        }
        .into_any(),
        ProductKind::Trade { trade_for } => view! {
            <div class="product-card__price">
                <span class="product-card__amount">{format!("~${}", product.price)}</span>
                <span class="badge badge--trade">{text(i18n, "product.trade")}</span>
                <span class="product-card__trade-for">{trade_for}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <a class="product-card" class:product-card--list=list class:product-card--featured=product.featured href=href>
            <img class="product-card__image" src=image alt=product.title.clone()/>
            <div class="product-card__body">
                <span class="product-card__category">{move || i18n.with(|t| t.t(category_key))}</span>
                <h3 class="product-card__title">{product.title.clone()}</h3>
                {price_block}
                <span class="product-card__seller">
                    {product.seller.clone()}
                    " ★ "
                    {format!("{:.1}", product.rating)}
                </span>
            </div>
        </a>
    }
}
