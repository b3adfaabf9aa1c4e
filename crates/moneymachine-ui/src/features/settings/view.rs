//! Settings page view.
//!
//! # Design
//! - The side menu and the compact selector both route through
//!   `SettingsCtx`, so the persisted section and the yewdux slice stay aligned.
//! - Below the `md` breakpoint the menu is replaced by a select.

use crate::app::context::use_settings;
use crate::components::daisy::{DaisySize, Select};
use crate::components::section_card::SectionCard;
use crate::components::settings_menu::SettingsMenu;
use crate::core::menu::{menu_entries, selector_options};
use crate::core::store::AppStore;
use crate::features::settings::panels::{
    AccountPanel, AppearancePanel, CurrencyPanel, InvoicingPanel, LanguagePanel, PrinterPanel,
    SystemPanel, TaxesPanel,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moneymachine_config::SectionId;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsPageProps {
    pub(crate) compact: bool,
}

#[function_component(SettingsPage)]
pub(crate) fn settings_page(props: &SettingsPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| bundle.text(key, fallback);
    let ctx = use_settings();
    let active = *use_selector(|store: &AppStore| store.settings.active);

    let on_select = {
        let ctx = ctx.clone();
        Callback::from(move |id: SectionId| ctx.select_section(id))
    };
    let on_select_raw = Callback::from(move |raw: AttrValue| ctx.select_raw(&raw));
    let selector = if props.compact {
        let options = selector_options()
            .into_iter()
            .map(|(value, label)| (AttrValue::from(value), AttrValue::from(label)))
            .collect::<Vec<_>>();
        html! {
            <label class="form-control w-full settings-selector" for="settings-section">
                <span class="label-text">{t("settings.section_select", "Section")}</span>
                <Select
                    id="settings-section"
                    size={DaisySize::Sm}
                    class="w-full"
                    options={options}
                    value={Some(AttrValue::from(active.as_str()))}
                    onchange={on_select_raw}
                />
            </label>
        }
    } else {
        html! {}
    };
    let menu = if props.compact {
        html! {}
    } else {
        html! { <SettingsMenu entries={menu_entries(active)} on_select={on_select} /> }
    };

    html! {
        <section class="settings-page">
            <header class="settings-header">
                <h1 class="text-2xl font-semibold">{t("settings.title", "Settings")}</h1>
                <p class="opacity-70">{t("settings.subtitle", "")}</p>
            </header>
            {selector}
            <div class="settings-layout flex gap-6">
                {menu}
                <div class="flex-1">
                    <SectionCard descriptor={*active.descriptor()}>
                        {render_panel(active)}
                    </SectionCard>
                </div>
            </div>
        </section>
    }
}

fn render_panel(active: SectionId) -> Html {
    match active {
        SectionId::Account => html! { <AccountPanel /> },
        SectionId::Appearance => html! { <AppearancePanel /> },
        SectionId::Language => html! { <LanguagePanel /> },
        SectionId::Currency => html! { <CurrencyPanel /> },
        SectionId::Taxes => html! { <TaxesPanel /> },
        SectionId::Printer => html! { <PrinterPanel /> },
        SectionId::Facturacion => html! { <InvoicingPanel /> },
        SectionId::System => html! { <SystemPanel /> },
    }
}
