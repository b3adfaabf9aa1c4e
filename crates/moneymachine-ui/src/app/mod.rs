//! Application root: contexts, theme, breakpoint tracking, and routing.

use crate::components::login::LoginPage;
use crate::core::breakpoints::{is_compact, width_from_px};
use crate::core::document_root::root_attributes;
use crate::core::store::AppStore;
use crate::features::settings::view::SettingsPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use context::SettingsCtx;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use moneymachine_config::ThemeMode;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod context;
mod routes;
mod storage;

#[function_component(MoneymachineApp)]
fn moneymachine_app() -> Html {
    let ctx = use_memo(|_| SettingsCtx::boot(), ());
    let theme = use_selector(|store: &AppStore| store.preferences.theme);
    let locale = use_selector(|store: &AppStore| LocaleCode::from(store.preferences.language));
    let bundle = use_memo(|locale| TranslationBundle::new(*locale), *locale);
    let width = use_state(current_width);

    {
        let ctx = (*ctx).clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                let id = ctx.preferences.subscribe(move |prefs| {
                    dispatch.reduce_mut(|store| store.apply_preferences(prefs));
                });
                move || {
                    ctx.preferences.unsubscribe(id);
                }
            },
            (),
        );
    }
    use_effect_with_deps(
        |(theme, locale): &(ThemeMode, LocaleCode)| {
            apply_root_attributes(*theme, *locale);
            || ()
        },
        (*theme, *locale),
    );
    {
        let width = width.clone();
        use_effect(move || {
            let handler = EventListener::new(&window(), "resize", {
                let width = width.clone();
                move |_event| {
                    let next = current_width();
                    if next != *width {
                        width.set(next);
                    }
                }
            });
            move || drop(handler)
        });
    }

    let compact = is_compact(*width);
    html! {
        <ContextProvider<SettingsCtx> context={(*ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <main class="app-main">
                        <Switch<Route> render={move |route| switch(route, compact)} />
                    </main>
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<SettingsCtx>>
    }
}

fn switch(route: Route, compact: bool) -> Html {
    match route {
        Route::Settings => html! { <SettingsPage compact={compact} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Home | Route::NotFound => html! { <Redirect<Route> to={Route::Settings} /> },
    }
}

fn apply_root_attributes(theme: ThemeMode, locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        for (name, value) in root_attributes(theme, locale) {
            let _ = root.set_attribute(name, value);
        }
    }
}

fn current_width() -> u16 {
    width_from_px(window().inner_width().ok().and_then(|w| w.as_f64()))
}

/// Entry point invoked by the wasm binary.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<MoneymachineApp>::with_root(root).render();
    } else {
        yew::Renderer::<MoneymachineApp>::new().render();
    }
}
