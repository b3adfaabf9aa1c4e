use super::choice_buttons;
use crate::app::context::use_settings;
use crate::core::options::theme_choices;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moneymachine_config::ThemeMode;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(AppearancePanel)]
pub(crate) fn appearance_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let ctx = use_settings();
    let theme = *use_selector(|store: &AppStore| store.preferences.theme);
    let on_pick = Callback::from(move |theme: ThemeMode| ctx.preferences.set_theme(theme));

    html! {
        <div class="flex flex-col gap-3">
            <span class="text-sm opacity-70">{bundle.text("settings.appearance.theme", "Theme")}</span>
            {choice_buttons(theme_choices(theme), |choice| bundle.text(&choice.label, choice.value.as_str()), &on_pick)}
        </div>
    }
}
