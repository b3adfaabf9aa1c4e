use super::edit;
use crate::app::context::use_settings;
use crate::components::daisy::{Button, DaisyColor, Input, Select, Toggle};
use crate::components::saved::{SavedBadge, use_saved_flag};
use crate::core::drafts::InvoicingForm;
use crate::core::feedback::SavedScope;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moneymachine_config::{ConfigError, PaymentMethod, TaxRegime};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(InvoicingPanel)]
pub(crate) fn invoicing_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| bundle.text(key, fallback);
    let ctx = use_settings();
    let stored = use_selector(|store: &AppStore| store.preferences.invoicing.clone());
    let form = use_state(|| InvoicingForm::from_profile(&stored));
    let error = use_state(|| None::<String>);
    let (saved, flash) = use_saved_flag(SavedScope::Invoicing);

    let on_regime = edit(&form, |form: &mut InvoicingForm, raw: AttrValue| {
        form.tax_regime = raw.to_string();
    });
    let on_rfc = edit(&form, |form: &mut InvoicingForm, raw: String| form.set_rfc(&raw));
    let on_legal_name = edit(&form, |form: &mut InvoicingForm, raw: String| {
        form.legal_name = raw;
    });
    let on_postal_code = edit(&form, |form: &mut InvoicingForm, raw: String| {
        form.postal_code = raw;
    });
    let on_series = edit(&form, |form: &mut InvoicingForm, raw: String| form.set_series(&raw));
    let on_folio = edit(&form, |form: &mut InvoicingForm, raw: String| {
        form.next_folio = raw;
    });
    let on_payment = edit(&form, |form: &mut InvoicingForm, raw: AttrValue| {
        form.payment_method = raw.to_string();
    });
    let on_cfdi_use = edit(&form, |form: &mut InvoicingForm, raw: String| {
        form.set_cfdi_use(&raw);
    });
    let on_enabled = edit(&form, |form: &mut InvoicingForm, value: bool| {
        form.enabled = value;
    });
    let on_ask_customer = edit(&form, |form: &mut InvoicingForm, value: bool| {
        form.ask_customer = value;
    });
    let on_save = {
        let form = form.clone();
        let error = error.clone();
        let folio_error = t("settings.invoicing.folio_error", "");
        Callback::from(move |_: MouseEvent| match form.to_profile() {
            Ok(profile) => {
                ctx.preferences.set_invoicing(profile);
                error.set(None);
                flash.emit(());
            }
            Err(ConfigError::InvalidField { .. }) => error.set(Some(folio_error.clone())),
            Err(err) => error.set(Some(err.to_string())),
        })
    };

    let regimes = TaxRegime::all()
        .iter()
        .map(|regime| (AttrValue::from(regime.as_str()), AttrValue::from(regime.label())))
        .collect::<Vec<_>>();
    let methods = PaymentMethod::all()
        .iter()
        .map(|method| (AttrValue::from(method.as_str()), AttrValue::from(method.label())))
        .collect::<Vec<_>>();
    let regime_value = (!form.tax_regime.is_empty()).then(|| AttrValue::from(form.tax_regime.clone()));
    let folio_tone = error.is_some().then_some(DaisyColor::Error);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <label class="form-control md:col-span-2" for="cfdi-regime">
                <span class="label-text">{t("settings.invoicing.regime", "Tax regime")}</span>
                <Select
                    id="cfdi-regime"
                    options={regimes}
                    value={regime_value}
                    placeholder={AttrValue::from(t("settings.invoicing.regime_placeholder", "Select a regime"))}
                    onchange={on_regime}
                />
            </label>
            <label class="form-control" for="cfdi-rfc">
                <span class="label-text">{t("settings.invoicing.rfc", "RFC")}</span>
                <Input id="cfdi-rfc" maxlength="13" value={AttrValue::from(form.rfc.clone())} oninput={on_rfc} />
            </label>
            <label class="form-control" for="cfdi-legal-name">
                <span class="label-text">{t("settings.invoicing.legal_name", "Legal name")}</span>
                <Input id="cfdi-legal-name" value={AttrValue::from(form.legal_name.clone())} oninput={on_legal_name} />
            </label>
            <label class="form-control" for="cfdi-postal-code">
                <span class="label-text">{t("settings.invoicing.postal_code", "Postal code")}</span>
                <Input
                    id="cfdi-postal-code"
                    inputmode="numeric"
                    maxlength="5"
                    value={AttrValue::from(form.postal_code.clone())}
                    oninput={on_postal_code}
                />
            </label>
            <label class="form-control" for="cfdi-series">
                <span class="label-text">{t("settings.invoicing.series", "Series")}</span>
                <Input id="cfdi-series" value={AttrValue::from(form.series.clone())} oninput={on_series} />
            </label>
            <label class="form-control" for="cfdi-folio">
                <span class="label-text">{t("settings.invoicing.next_folio", "Next folio")}</span>
                <Input
                    id="cfdi-folio"
                    input_type="number"
                    inputmode="numeric"
                    tone={folio_tone}
                    value={AttrValue::from(form.next_folio.clone())}
                    oninput={on_folio}
                />
                {(*error).clone().map(|message| html! {
                    <span class="text-error text-xs" role="alert">{message}</span>
                }).unwrap_or_default()}
            </label>
            <label class="form-control" for="cfdi-payment">
                <span class="label-text">{t("settings.invoicing.payment_method", "Payment method")}</span>
                <Select
                    id="cfdi-payment"
                    options={methods}
                    value={Some(AttrValue::from(form.payment_method.clone()))}
                    onchange={on_payment}
                />
            </label>
            <label class="form-control" for="cfdi-use">
                <span class="label-text">{t("settings.invoicing.cfdi_use", "CFDI use")}</span>
                <Input id="cfdi-use" value={AttrValue::from(form.cfdi_use.clone())} oninput={on_cfdi_use} />
            </label>
            <div class="flex flex-col gap-2 md:col-span-2">
                <Toggle
                    label={AttrValue::from(t("settings.invoicing.enabled", "Enable invoicing"))}
                    checked={form.enabled}
                    onchange={on_enabled}
                />
                <Toggle
                    label={AttrValue::from(t("settings.invoicing.ask_customer", "Ask the customer for invoicing data"))}
                    checked={form.ask_customer}
                    onchange={on_ask_customer}
                />
            </div>
            <div class="flex items-center gap-3 md:col-span-2">
                <Button tone={Some(DaisyColor::Primary)} onclick={on_save}>
                    {t("settings.save", "Save")}
                </Button>
                <SavedBadge visible={saved} />
            </div>
        </div>
    }
}
