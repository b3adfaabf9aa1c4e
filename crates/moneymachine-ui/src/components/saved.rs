//! Transient "saved" acknowledgment.
//!
//! # Design
//! - The reset timer lives in a ref owned by the panel; replacing it cancels
//!   the previous reset and unmounting drops it.

use crate::core::feedback::SavedScope;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Returns whether the acknowledgment is showing and a callback that shows it.
#[hook]
pub(crate) fn use_saved_flag(scope: SavedScope) -> (bool, Callback<()>) {
    let saved = use_state(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);
    {
        let timer = timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    timer.borrow_mut().take();
                }
            },
            (),
        );
    }
    let flash = {
        let saved = saved.clone();
        Callback::from(move |()| {
            saved.set(true);
            let reset = saved.clone();
            let handle = Timeout::new(scope.duration_ms(), move || reset.set(false));
            *timer.borrow_mut() = Some(handle);
        })
    };
    (*saved, flash)
}

#[derive(Properties, PartialEq)]
pub(crate) struct SavedBadgeProps {
    pub(crate) visible: bool,
}

#[function_component(SavedBadge)]
pub(crate) fn saved_badge(props: &SavedBadgeProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    if !props.visible {
        return html! {};
    }
    html! {
        <span class="badge badge-success" role="status">
            {bundle.text("settings.saved", "Saved")}
        </span>
    }
}
