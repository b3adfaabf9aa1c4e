use super::choice_buttons;
use crate::app::context::use_settings;
use crate::core::options::currency_choices;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moneymachine_config::CurrencyCode;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(CurrencyPanel)]
pub(crate) fn currency_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let ctx = use_settings();
    let currency = *use_selector(|store: &AppStore| store.preferences.currency);
    let on_pick =
        Callback::from(move |currency: CurrencyCode| ctx.preferences.set_currency(currency));

    html! {
        <div class="flex flex-col gap-3">
            <span class="text-sm opacity-70">
                {bundle.text("settings.currency.label", "Main currency")}
            </span>
            {choice_buttons(currency_choices(currency), |choice| choice.label.clone(), &on_pick)}
        </div>
    }
}
