use crate::app::context::use_settings;
use crate::components::daisy::{Button, DaisyColor, Input};
use crate::components::saved::{SavedBadge, use_saved_flag};
use crate::core::drafts::TaxDraft;
use crate::core::feedback::SavedScope;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(TaxesPanel)]
pub(crate) fn taxes_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let ctx = use_settings();
    let rate = *use_selector(|store: &AppStore| store.preferences.tax_rate);
    let draft = use_state(|| TaxDraft::from_rate(rate));
    let (saved, flash) = use_saved_flag(SavedScope::Taxes);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |text: String| draft.set(TaxDraft { text }))
    };
    let on_save = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let stored = ctx.preferences.set_tax_rate_input(&draft.text);
            draft.set(TaxDraft::from_rate(stored));
            flash.emit(());
        })
    };

    html! {
        <div class="flex flex-col gap-3 max-w-sm">
            <label class="form-control" for="tax-rate">
                <span class="label-text">{bundle.text("settings.taxes.label", "Default tax rate (%)")}</span>
                <Input
                    id="tax-rate"
                    input_type="number"
                    inputmode="decimal"
                    value={AttrValue::from(draft.text.clone())}
                    oninput={on_input}
                />
            </label>
            <p class="text-xs opacity-60">{bundle.text("settings.taxes.hint", "")}</p>
            <div class="flex items-center gap-3">
                <Button tone={Some(DaisyColor::Primary)} onclick={on_save}>
                    {bundle.text("settings.save", "Save")}
                </Button>
                <SavedBadge visible={saved} />
            </div>
        </div>
    }
}
