use std::io::Write;

use moneymachine_config::{CurrencyCode, Language, ThemeMode};
use tracing::info;

use crate::cli::{OutputFormat, SetCommand};
use crate::context::{AppContext, CliResult};
use crate::output::{render_preferences, render_update};

pub(crate) fn handle_show(
    ctx: &AppContext,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    render_preferences(&ctx.preferences.get(), ctx.sections.active(), format, out)
}

pub(crate) fn handle_set(
    ctx: &AppContext,
    command: SetCommand,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let (field, value) = match command {
        SetCommand::Theme(args) => {
            let theme: ThemeMode = args.value.parse()?;
            ctx.preferences.set_theme(theme);
            ("theme", theme.to_string())
        }
        SetCommand::Language(args) => {
            let language: Language = args.value.parse()?;
            ctx.preferences.set_language(language);
            ("language", language.to_string())
        }
        SetCommand::Currency(args) => {
            let currency: CurrencyCode = args.value.parse()?;
            ctx.preferences.set_currency(currency);
            ("currency", currency.to_string())
        }
        SetCommand::TaxRate(args) => {
            let rate = ctx.preferences.set_tax_rate_input(&args.value);
            ("tax rate", rate.to_string())
        }
    };
    ctx.ensure_saved()?;
    info!(field, value = %value, "preference updated");
    render_update(field, &value, format, out)
}
