//! Photo picker with drag-and-drop for the listing wizard.
//!
//! DESIGN
//! ======
//! The hidden file input and the drop target feed the same ingest path, which
//! only converts as many files as the staging area can still take. Thumbnails
//! render in staging order; the first one carries the "Main" badge.

use leptos::prelude::*;

use crate::i18n::{Translator, text};
use crate::state::listing::ListingWizard;
use crate::state::staging::{DragPhase, MAX_IMAGES};
use crate::util::files;

#[component]
pub fn ImageDropzone(wizard: RwSignal<ListingWizard>) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let drag_active = RwSignal::new(false);
    let track = move |phase: DragPhase| drag_active.set(phase.highlights());

    #[cfg(feature = "hydrate")]
    let ingest = move |list: web_sys::FileList| {
        let limit = wizard.with_untracked(|w| {
            if w.is_submitted() { 0 } else { w.draft().images.remaining_capacity() }
        });
        let staged = files::stage_file_list(&list, limit);
        if staged.is_empty() {
            return;
        }
        wizard.update(|w| {
            w.edit(|d| {
                d.images.add_images(staged);
            });
        });
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        track(DragPhase::Drop);
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
                if list.length() > 0 {
                    ingest(list);
                }
            }
        }
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(list) = input.files() {
                ingest(list);
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let remove = move |index: usize| {
        let mut removed = None;
        wizard.update(|w| w.edit(|d| removed = d.images.remove_image(index)));
        if let Some(image) = removed {
            files::release(&image);
        }
    };

    let count = move || wizard.with(|w| w.draft().images.len());
    let full = move || wizard.with(|w| w.draft().images.is_full());

    view! {
        <div
            class="dropzone"
            class:dropzone--active=move || drag_active.get()
            on:dragenter=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                track(DragPhase::Enter);
            }
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                track(DragPhase::Over);
            }
            on:dragleave=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                track(DragPhase::Leave);
            }
            on:drop=on_drop
        >
            <p class="dropzone__title">{text(i18n, "photos.drop")}</p>
            <p class="dropzone__hint">
                {move || {
                    i18n.with(|t| {
                        t.t_args("photos.count", &[("n", count().to_string()), ("max", MAX_IMAGES.to_string())])
                    })
                }}
            </p>
            <label class="btn dropzone__browse">
                {text(i18n, "photos.choose")}
                <input
                    class="dropzone__input"
                    type="file"
                    accept="image/*"
                    multiple
                    disabled=full
                    on:change=on_pick
                />
            </label>
        </div>
        <div class="dropzone__thumbs">
            {move || {
                wizard
                    .with(|w| w.draft().images.images().to_vec())
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| {
                        view! {
                            <figure class="dropzone__thumb">
                                <img src=image.preview_url.clone().unwrap_or_default() alt=image.name.clone()/>
                                <Show when=move || index == 0>
                                    <span class="badge dropzone__main">{text(i18n, "photos.main")}</span>
                                </Show>
                                <figcaption>{image.name.clone()} " · " {files::format_size(image.size)}</figcaption>
                                <button
                                    class="dropzone__remove"
                                    title=text(i18n, "photos.remove")
                                    aria-label=text(i18n, "photos.remove")
                                    on:click=move |_| remove(index)
                                >
                                    "✕"
                                </button>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
