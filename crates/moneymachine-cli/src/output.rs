//! Output renderers and formatting helpers for CLI commands.

use std::io::Write;

use anyhow::anyhow;
use moneymachine_config::{Preferences, SECTIONS, SectionId};
use serde_json::{Value, json};

use crate::cli::{OutputFormat, write_line};
use crate::context::{CliError, CliResult};

pub(crate) fn render_preferences(
    prefs: &Preferences,
    active: SectionId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let preferences = serde_json::to_value(prefs)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            write_json(
                &json!({ "preferences": preferences, "section": active.as_str() }),
                out,
            )
        }
        OutputFormat::Table => {
            let printer = &prefs.printer;
            let invoicing = &prefs.invoicing;
            let rows = [
                ("theme", prefs.theme.to_string()),
                (
                    "language",
                    format!("{} ({})", prefs.language, prefs.language.native_name()),
                ),
                (
                    "currency",
                    format!(
                        "{} ({} {})",
                        prefs.currency,
                        prefs.currency.symbol(),
                        prefs.currency.name()
                    ),
                ),
                ("tax rate", prefs.tax_rate.to_string()),
                ("printer", or_unset(&printer.printer_name)),
                ("paper width", printer.paper_width.to_string()),
                ("auto print", printer.auto_print.to_string()),
                ("ticket template", printer.ticket_template.to_string()),
                ("ticket icon", printer.ticket_icon.to_string()),
                ("business name", or_unset(&printer.business_name)),
                (
                    "invoicing",
                    if invoicing.enabled {
                        "enabled".to_string()
                    } else {
                        "disabled".to_string()
                    },
                ),
                (
                    "tax regime",
                    invoicing
                        .tax_regime
                        .map_or_else(|| "<unset>".to_string(), |regime| regime.label().to_string()),
                ),
                ("rfc", or_unset(&invoicing.rfc)),
                ("series", or_unset(&invoicing.series)),
                (
                    "next folio",
                    invoicing
                        .next_folio
                        .map_or_else(|| "<unset>".to_string(), |folio| folio.to_string()),
                ),
                ("payment method", invoicing.payment_method.label().to_string()),
                ("section", active.to_string()),
            ];
            for (label, value) in rows {
                write_line(out, &format!("{label}: {value}"))?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_update(
    field: &str,
    value: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(&json!({ "field": field, "value": value }), out),
        OutputFormat::Table => write_line(out, &format!("{field}: {value}")),
    }
}

pub(crate) fn render_section(
    active: SectionId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(&descriptor_json(active, active), out),
        OutputFormat::Table => write_line(out, active.as_str()),
    }
}

pub(crate) fn render_sections(
    active: SectionId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<Value> = SECTIONS
                .iter()
                .map(|section| descriptor_json(section.id, active))
                .collect();
            write_json(&Value::Array(entries), out)
        }
        OutputFormat::Table => {
            write_line(out, &format!("  {:<12} {:<16} DESCRIPTION", "ID", "TITLE"))?;
            for section in &SECTIONS {
                let marker = if section.id == active { '*' } else { ' ' };
                write_line(
                    out,
                    &format!(
                        "{marker} {:<12} {:<16} {}",
                        section.id.as_str(),
                        section.title,
                        section.description
                    ),
                )?;
            }
            Ok(())
        }
    }
}

fn descriptor_json(id: SectionId, active: SectionId) -> Value {
    let descriptor = id.descriptor();
    json!({
        "id": id.as_str(),
        "title": descriptor.title,
        "description": descriptor.description,
        "icon": descriptor.icon,
        "active": id == active,
    })
}

fn write_json(value: &Value, out: &mut dyn Write) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

fn or_unset(value: &str) -> String {
    if value.trim().is_empty() {
        "<unset>".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymachine_config::{CurrencyCode, TaxRate};

    fn render(f: impl FnOnce(&mut dyn Write) -> CliResult<()>) -> String {
        let mut out = Vec::new();
        assert!(f(&mut out).is_ok());
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn table_lists_every_preference() {
        let prefs = Preferences {
            currency: CurrencyCode::Mxn,
            tax_rate: TaxRate::new(16.0),
            ..Preferences::default()
        };
        let text = render(|out| {
            render_preferences(&prefs, SectionId::Taxes, OutputFormat::Table, out)
        });
        assert!(text.contains("currency: MXN ($ Mexican Peso)"));
        assert!(text.contains("tax rate: 16%"));
        assert!(text.contains("printer: <unset>"));
        assert!(text.contains("section: taxes"));
    }

    #[test]
    fn sections_table_marks_exactly_one_entry() {
        let text = render(|out| render_sections(SectionId::Printer, OutputFormat::Table, out));
        let marked: Vec<&str> = text.lines().filter(|line| line.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("printer"));
        assert_eq!(text.lines().count(), SECTIONS.len() + 1);
    }

    #[test]
    fn sections_json_flags_active_entry() -> anyhow::Result<()> {
        let text = render(|out| render_sections(SectionId::System, OutputFormat::Json, out));
        let value: Value = serde_json::from_str(&text)?;
        let entries = value.as_array().map(Vec::as_slice).unwrap_or_default();
        assert_eq!(entries.len(), 8);
        let active: Vec<&Value> = entries.iter().filter(|e| e["active"] == true).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["id"], "system");
        Ok(())
    }
}
