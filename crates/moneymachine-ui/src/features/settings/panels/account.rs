use crate::app::Route;
use crate::app::context::use_settings;
use crate::components::daisy::{Button, DaisyColor, DaisyVariant};
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

#[function_component(AccountPanel)]
pub(crate) fn account_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let ctx = use_settings();
    let navigator = use_navigator();
    let email = use_selector(|store: &AppStore| {
        store.session.as_ref().map(|user| user.email.clone())
    });
    let on_sign_out = Callback::from(move |_: MouseEvent| {
        ctx.sign_out();
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Login);
        }
    });
    let shown = (*email)
        .clone()
        .unwrap_or_else(|| bundle.text("settings.account.not_logged_in", "Not logged in"));

    html! {
        <div class="flex flex-col gap-4">
            <div>
                <span class="text-sm opacity-70">{bundle.text("settings.account.email", "Email")}</span>
                <p class="font-medium">{shown}</p>
            </div>
            <Button
                tone={Some(DaisyColor::Error)}
                variant={DaisyVariant::Outline}
                onclick={on_sign_out}
            >
                {bundle.text("settings.account.sign_out", "Sign out")}
            </Button>
        </div>
    }
}
