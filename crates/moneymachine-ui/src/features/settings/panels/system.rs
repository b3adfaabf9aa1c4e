use crate::core::store::AppStore;
use crate::core::system_info::system_rows;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(SystemPanel)]
pub(crate) fn system_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let preferences = use_selector(|store: &AppStore| store.preferences.clone());
    let rows = system_rows(&preferences, &bundle);

    html! {
        <dl class="grid grid-cols-2 gap-x-6 gap-y-2">
            {for rows.into_iter().map(|row| html! {
                <>
                    <dt class="opacity-70">{row.label}</dt>
                    <dd class="font-medium">{row.value}</dd>
                </>
            })}
        </dl>
    }
}
