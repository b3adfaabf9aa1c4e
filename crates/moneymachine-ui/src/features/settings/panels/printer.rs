use super::edit;
use crate::app::context::use_settings;
use crate::components::daisy::{Button, DaisyColor, Input, Select, Textarea, Toggle};
use crate::components::saved::{SavedBadge, use_saved_flag};
use crate::core::drafts::PrinterForm;
use crate::core::feedback::SavedScope;
use crate::core::store::AppStore;
use crate::core::ticket_preview::ticket_preview;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moneymachine_config::{PaperWidth, TicketIcon, TicketTemplate};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(PrinterPanel)]
pub(crate) fn printer_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| bundle.text(key, fallback);
    let ctx = use_settings();
    let stored = use_selector(|store: &AppStore| store.preferences.printer.clone());
    let form = use_state(|| PrinterForm::from_settings(&stored));
    let (saved, flash) = use_saved_flag(SavedScope::Printer);

    let on_name = edit(&form, PrinterForm::set_printer_name);
    let on_business = edit(&form, PrinterForm::set_business_name);
    let on_footer = edit(&form, PrinterForm::set_footer_lines);
    let on_auto_print = edit(&form, PrinterForm::set_auto_print);
    let on_width = edit(&form, |form: &mut PrinterForm, raw: AttrValue| form.set_paper_width(&raw));
    let on_template = edit(&form, |form: &mut PrinterForm, raw: AttrValue| {
        form.set_ticket_template(&raw);
    });
    let on_icon = edit(&form, |form: &mut PrinterForm, raw: AttrValue| form.set_ticket_icon(&raw));
    let on_save = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.preferences
                .set_printer_settings((*form).clone().into_settings());
            flash.emit(());
        })
    };

    let settings = form.settings();
    let preview = ticket_preview(settings).join("\n");
    let widths = PaperWidth::all()
        .iter()
        .map(|width| (AttrValue::from(width.as_str()), AttrValue::from(width.as_str())))
        .collect::<Vec<_>>();
    let templates = TicketTemplate::all()
        .iter()
        .map(|template| {
            let key = format!("settings.printer.template_{}", template.as_str());
            (AttrValue::from(template.as_str()), AttrValue::from(t(&key, template.as_str())))
        })
        .collect::<Vec<_>>();
    let icons = TicketIcon::all()
        .iter()
        .map(|icon| {
            let key = format!("settings.printer.icon_{}", icon.as_str());
            (AttrValue::from(icon.as_str()), AttrValue::from(t(&key, icon.as_str())))
        })
        .collect::<Vec<_>>();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <label class="form-control" for="printer-name">
                <span class="label-text">{t("settings.printer.name", "Printer name")}</span>
                <Input id="printer-name" value={AttrValue::from(settings.printer_name.clone())} oninput={on_name} />
            </label>
            <label class="form-control" for="printer-width">
                <span class="label-text">{t("settings.printer.width", "Paper width")}</span>
                <Select
                    id="printer-width"
                    options={widths}
                    value={Some(AttrValue::from(settings.paper_width.as_str()))}
                    onchange={on_width}
                />
            </label>
            <label class="form-control" for="printer-template">
                <span class="label-text">{t("settings.printer.template", "Ticket template")}</span>
                <Select
                    id="printer-template"
                    options={templates}
                    value={Some(AttrValue::from(settings.ticket_template.as_str()))}
                    onchange={on_template}
                />
            </label>
            <label class="form-control" for="printer-icon">
                <span class="label-text">{t("settings.printer.icon", "Ticket icon")}</span>
                <Select
                    id="printer-icon"
                    options={icons}
                    value={Some(AttrValue::from(settings.ticket_icon.as_str()))}
                    onchange={on_icon}
                />
            </label>
            <label class="form-control md:col-span-2" for="printer-business">
                <span class="label-text">{t("settings.printer.business", "Business name")}</span>
                <Input id="printer-business" value={AttrValue::from(settings.business_name.clone())} oninput={on_business} />
            </label>
            <label class="form-control md:col-span-2">
                <span class="label-text">{t("settings.printer.footer", "Footer lines")}</span>
                <Textarea value={AttrValue::from(settings.ticket_footer_lines.clone())} oninput={on_footer} />
            </label>
            <div class="form-control md:col-span-2">
                <span class="label-text">{t("settings.printer.preview", "Ticket preview")}</span>
                <pre class="ticket-preview font-mono text-xs whitespace-pre overflow-x-auto rounded-box bg-base-200 p-4">
                    {preview}
                </pre>
            </div>
            <div class="md:col-span-2">
                <Toggle
                    label={AttrValue::from(t("settings.printer.auto_print", "Print tickets automatically"))}
                    checked={settings.auto_print}
                    onchange={on_auto_print}
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
