use crate::app::Route;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Landing page after sign-out; the sign-in form lives outside this screen.
#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="placeholder">
            <h2>{bundle.text("login.title", "Sign in")}</h2>
            <p class="muted">{bundle.text("login.body", "")}</p>
            <Link<Route> to={Route::Settings} classes="link">
                {bundle.text("login.back", "Back to settings")}
            </Link<Route>>
        </div>
    }
}
