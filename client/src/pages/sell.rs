//! Listing wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `ListingWizard` signal for its lifetime. Step bodies edit
//! the draft in place; the footer buttons bind their disabled state to the
//! wizard's gates. A successful publish hands the listing to the seller
//! dashboard and navigates there. Leaving without publishing drops the draft
//! and releases its photo previews.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::image_dropzone::ImageDropzone;
use crate::components::toolbar::Toolbar;
use crate::components::wizard_progress::WizardProgress;
use crate::i18n::{Translator, text};
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::state::listing::{
    DESCRIPTION_HINT_CHARS, Listing, ListingDraft, ListingSink, ListingWizard, TITLE_HINT_CHARS, WizardStep,
};
use crate::state::taxonomy::{AuctionDuration, Category, Condition, ListingType, ShippingOption};
use crate::util::auth::install_unauth_redirect;
use crate::util::files;

/// Submission sink that records listings on the seller dashboard.
#[derive(Clone, Copy)]
pub struct DashboardSink {
    dashboard: RwSignal<DashboardState>,
}

impl DashboardSink {
    pub fn new(dashboard: RwSignal<DashboardState>) -> Self {
        Self { dashboard }
    }
}

impl ListingSink for DashboardSink {
    fn accept(&self, listing: Listing) {
        log::info!(
            "listing published: {:?} ({}, {} photos)",
            listing.title,
            listing.terms.listing_type().value(),
            listing.images.len()
        );
        self.dashboard.update(|d| {
            d.record(listing);
        });
    }
}

fn edit_draft(wizard: RwSignal<ListingWizard>, f: impl FnOnce(&mut ListingDraft)) {
    wizard.update(|w| w.edit(f));
}

#[component]
pub fn SellPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let i18n = expect_context::<RwSignal<Translator>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let wizard = RwSignal::new(ListingWizard::new());
    let step = Memo::new(move |_| wizard.with(ListingWizard::step));
    let can_advance = Memo::new(move |_| wizard.with(ListingWizard::can_advance));
    let can_submit = Memo::new(move |_| wizard.with(ListingWizard::can_submit));

    on_cleanup(move || {
        let _ = wizard.try_with_untracked(|w| {
            if !w.is_submitted() {
                w.draft().images.images().iter().for_each(files::release);
            }
        });
    });

    let published = Memo::new(move |_| wizard.with(ListingWizard::is_submitted));
    Effect::new(move || {
        if published.get() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let sink = DashboardSink::new(dashboard);
    let on_publish = move |_| {
        wizard.update(|w| {
            w.submit(&sink);
        });
    };

    view! {
        <div class="sell-page">
            <Toolbar/>
            <header class="sell-page__header">
                <a class="btn" href="/">{text(i18n, "listing.back")}</a>
                <h1>{text(i18n, "listing.create")}</h1>
            </header>

            <WizardProgress current=step/>

            <section class="card sell-page__step">
                {move || match step.get() {
                    WizardStep::Basics => view! { <BasicsStep wizard=wizard/> }.into_any(),
                    WizardStep::Photos => view! { <ImageDropzone wizard=wizard/> }.into_any(),
                    WizardStep::Pricing => view! { <PricingStep wizard=wizard/> }.into_any(),
                    WizardStep::Shipping => view! { <ShippingStep wizard=wizard/> }.into_any(),
                    WizardStep::Review => view! { <ReviewStep wizard=wizard/> }.into_any(),
                }}
            </section>

            <footer class="sell-page__actions">
                <button
                    class="btn"
                    disabled=move || step.get() == WizardStep::Basics
                    on:click=move |_| wizard.update(ListingWizard::retreat)
                >
                    {text(i18n, "listing.previous")}
                </button>
                <Show
                    when=move || step.get() == WizardStep::Review
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || !can_advance.get()
                                on:click=move |_| wizard.update(ListingWizard::advance)
                            >
                                {text(i18n, "listing.next")}
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" disabled=move || !can_submit.get() on:click=on_publish>
                        {text(i18n, "listing.publish")}
                    </button>
                </Show>
            </footer>
        </div>
    }
}

#[component]
fn BasicsStep(wizard: RwSignal<ListingWizard>) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let title = move || wizard.with(|w| w.draft().title.clone());
    let description = move || wizard.with(|w| w.draft().description.clone());

    view! {
        <h2>{text(i18n, "sell.basicInfo")}</h2>
        <label class="field">
            {text(i18n, "sell.title")}
            <input
                type="text"
                placeholder=text(i18n, "sell.titlePlaceholder")
                prop:value=title
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_draft(wizard, |d| d.title = value);
                }
            />
            <span class="field__hint">{move || characters(i18n, &title(), TITLE_HINT_CHARS)}</span>
        </label>
        <label class="field">
            {text(i18n, "sell.description")}
            <textarea
                placeholder=text(i18n, "sell.descriptionPlaceholder")
                prop:value=description
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_draft(wizard, |d| d.description = value);
                }
            ></textarea>
            <span class="field__hint">{move || characters(i18n, &description(), DESCRIPTION_HINT_CHARS)}</span>
        </label>
        <label class="field">
            {text(i18n, "sell.category")}
            <select on:change=move |ev| {
                let category = Category::from_value(&event_target_value(&ev));
                edit_draft(wizard, |d| d.category = category);
            }>
                <option value="" selected=move || wizard.with(|w| w.draft().category.is_none())>
                    {text(i18n, "sell.selectCategory")}
                </option>
                {Category::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <option value=c.value() selected=move || wizard.with(|w| w.draft().category == Some(c))>
                                {move || i18n.with(|t| t.t(c.label_key()))}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
        <label class="field">
            {text(i18n, "sell.condition")}
            <select on:change=move |ev| {
                let condition = Condition::from_value(&event_target_value(&ev));
                edit_draft(wizard, |d| d.condition = condition);
            }>
                <option value="" selected=move || wizard.with(|w| w.draft().condition.is_none())>
                    {text(i18n, "sell.selectCondition")}
                </option>
                {Condition::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <option value=c.value() selected=move || wizard.with(|w| w.draft().condition == Some(c))>
                                {text(i18n, c.label_key())}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn PricingStep(wizard: RwSignal<ListingWizard>) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let listing_type = Memo::new(move |_| wizard.with(|w| w.draft().listing_type));

    let price_input = move |label_key: &'static str| {
        view! {
            <label class="field">
                {text(i18n, label_key)}
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || wizard.with(|w| w.draft().price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_draft(wizard, |d| d.price = value);
                    }
                />
            </label>
        }
    };

    view! {
        <h2>{text(i18n, "step.pricing")}</h2>
        <fieldset class="field field--radios">
            <legend>{text(i18n, "sell.listingType")}</legend>
            {ListingType::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <label class="radio">
                            <input
                                type="radio"
                                name="listing-type"
                                value=t.value()
                                prop:checked=move || listing_type.get() == t
                                on:change=move |_| edit_draft(wizard, |d| d.listing_type = t)
                            />
                            {text(i18n, t.label_key())}
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
        {move || match listing_type.get() {
            ListingType::Fixed => price_input("sell.price").into_any(),
            ListingType::Auction => view! {
                <label class="field">
                    {text(i18n, "sell.startingBid")}
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || wizard.with(|w| w.draft().starting_bid.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_draft(wizard, |d| d.starting_bid = value);
                        }
                    />
                </label>
                <label class="field">
                    {text(i18n, "sell.duration")}
                    <select on:change=move |ev| {
                        let duration = event_target_value(&ev).parse().ok().and_then(AuctionDuration::from_days);
                        edit_draft(wizard, |d| d.auction_duration = duration);
                    }>
                        {AuctionDuration::ALL
                            .into_iter()
                            .map(|duration| {
                                view! {
                                    <option
                                        value=duration.days().to_string()
                                        selected=move || wizard.with(|w| w.draft().auction_duration == Some(duration))
                                    >
                                        {move || format!("{} {}", duration.days(), i18n.with(|t| t.t("time.days")))}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            }
            .into_any(),
            ListingType::Trade => view! {
                <label class="field">
                    {text(i18n, "sell.tradeFor")}
                    <textarea
                        placeholder=text(i18n, "sell.tradeForPlaceholder")
                        prop:value=move || wizard.with(|w| w.draft().trade_for.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_draft(wizard, |d| d.trade_for = value);
                        }
                    ></textarea>
                </label>
                {price_input("sell.estimatedValue")}
            }
            .into_any(),
        }}
    }
}

#[component]
fn ShippingStep(wizard: RwSignal<ListingWizard>) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();

    view! {
        <h2>{text(i18n, "sell.shippingLocation")}</h2>
        <label class="field">
            {text(i18n, "sell.location")}
            <input
                type="text"
                placeholder=text(i18n, "sell.locationPlaceholder")
                prop:value=move || wizard.with(|w| w.draft().location.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_draft(wizard, |d| d.location = value);
                }
            />
        </label>
        <fieldset class="field field--checks">
            <legend>{text(i18n, "sell.shippingOptions")}</legend>
            {ShippingOption::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <label class="check">
                            <input
                                type="checkbox"
                                prop:checked=move || wizard.with(|w| w.draft().shipping.contains(&option))
                                on:change=move |_| edit_draft(wizard, |d| d.toggle_shipping(option))
                            />
                            {text(i18n, option.label_key())}
                            <span class="check__fee">{option.fee()}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
        <label class="check">
            <input
                type="checkbox"
                prop:checked=move || wizard.with(|w| w.draft().returns)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    edit_draft(wizard, |d| d.returns = checked);
                }
            />
            {text(i18n, "sell.acceptReturns")}
        </label>
    }
}

#[component]
fn ReviewStep(wizard: RwSignal<ListingWizard>) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let draft = wizard.with_untracked(|w| w.draft().clone());

    let category = draft.category.map_or("—", Category::label_key);
    let condition = draft.condition.map_or("—", Condition::label_key);
    let terms = draft.to_listing().map(|listing| listing.terms);
    let shipping_keys: Vec<&'static str> = draft.shipping.iter().map(|o| o.label_key()).collect();
    let returns_key = if draft.returns { "sell.returns30" } else { "sell.noReturns" };
    let photo_count = draft.images.len();
    let main_image = draft.images.main_image().and_then(|img| img.preview_url.clone()).unwrap_or_default();

    view! {
        <h2>{text(i18n, "sell.review")}</h2>
        <dl class="review">
            <dt>{text(i18n, "field.title")}</dt>
            <dd>{draft.title.clone()}</dd>
            <dt>{text(i18n, "field.category")}</dt>
            <dd>{text(i18n, category)}</dd>
            <dt>{text(i18n, "field.condition")}</dt>
            <dd>{text(i18n, condition)}</dd>
            <dt>{text(i18n, "field.price")}</dt>
            <dd>
                {move || {
                    i18n.with(|t| terms.as_ref().map_or_else(|| t.t("sell.incomplete"), |terms| terms.summary(t)))
                }}
            </dd>
            <dt>{text(i18n, "field.location")}</dt>
            <dd>{draft.location.clone()}</dd>
            <dt>{text(i18n, "field.shipping")}</dt>
            <dd>{move || i18n.with(|t| shipping_keys.iter().map(|key| t.t(key)).collect::<Vec<_>>().join(", "))}</dd>
            <dt>{text(i18n, "field.returns")}</dt>
            <dd>{text(i18n, returns_key)}</dd>
            <dt>{text(i18n, "field.photos")}</dt>
            <dd>{move || i18n.with(|t| t.t_args("sell.photoCount", &[("n", photo_count.to_string())]))}</dd>
        </dl>
        <img class="review__main-image" src=main_image alt=text(i18n, "sell.mainPhoto")/>
        <p class="review__description">{draft.description.clone()}</p>
    }
}

/// "12/80 characters" hint under a text input.
fn characters(i18n: RwSignal<Translator>, value: &str, hint: usize) -> String {
    i18n.with(|t| t.t_args("sell.characters", &[("n", value.chars().count().to_string()), ("max", hint.to_string())]))
}
