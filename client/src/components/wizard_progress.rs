//! Step indicator across the top of the listing wizard.

use leptos::prelude::*;

use crate::i18n::Translator;
use crate::state::listing::WizardStep;

#[component]
pub fn WizardProgress(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    let i18n = expect_context::<RwSignal<Translator>>();

    view! {
        <ol class="wizard-progress">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    let reached = move || current.get() >= step;
                    let passed = move || current.get() > step;
                    view! {
                        <li
                            class="wizard-progress__step"
                            class:wizard-progress__step--reached=reached
                            class:wizard-progress__step--passed=passed
                        >
                            <span class="wizard-progress__number">{step.number()}</span>
                            <span class="wizard-progress__title">{move || i18n.with(|t| t.t(step.title_key()))}</span>
                            <span class="wizard-progress__blurb">{step.blurb()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
