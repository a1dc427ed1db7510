//! Live "time left" label for auctions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each instance owns one once-per-second ticker. The ticker stops when the
//! component's reactive owner is disposed or once the label reaches "Ended";
//! an expired auction never starts one.

use leptos::prelude::*;

use crate::i18n::{Translator, text};
use crate::util::countdown::{CountdownStyle, format_remaining, now_ms};

/// Countdown to `end_time` (milliseconds since the Unix epoch).
#[component]
pub fn CountdownTimer(end_time: i64, #[prop(optional)] style: CountdownStyle) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();
    let label = RwSignal::new(format_remaining(end_time, now_ms(), style));

    #[cfg(feature = "hydrate")]
    {
        if !crate::util::countdown::has_ended(end_time, now_ms()) {
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        crate::util::countdown::TICK_MS,
                    )))
                    .await;
                    if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    let now = now_ms();
                    label.set(format_remaining(end_time, now, style));
                    if crate::util::countdown::has_ended(end_time, now) {
                        break;
                    }
                }
            });
            on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }

    match style {
        CountdownStyle::Compact => view! {
            <span class="countdown countdown--compact">{move || label.get()}</span>
        }
        .into_any(),
        CountdownStyle::Detailed => view! {
            <div class="countdown countdown--detailed">
                <span class="countdown__caption">{text(i18n, "time.ending")}</span>
                <span class="countdown__value">{move || label.get()}</span>
            </div>
        }
        .into_any(),
    }
}
