use super::choice_buttons;
use crate::app::context::use_settings;
use crate::core::options::language_choices;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moneymachine_config::Language;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(LanguagePanel)]
pub(crate) fn language_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let ctx = use_settings();
    let language = *use_selector(|store: &AppStore| store.preferences.language);
    let on_pick =
        Callback::from(move |language: Language| ctx.preferences.set_language(language));

    html! {
        <div class="flex flex-col gap-3">
            <span class="text-sm opacity-70">
                {bundle.text("settings.language.label", "Interface language")}
            </span>
            {choice_buttons(language_choices(language), |choice| choice.label.clone(), &on_pick)}
        </div>
    }
}
