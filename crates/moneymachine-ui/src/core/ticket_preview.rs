//! Plain-text ticket preview for the printer panel.
//!
//! # Design
//! - Lays out a fixed sample sale on a 32-column roll so the preview only
//!   changes when the draft's template, icon, business name, or footer does.
//! - Accented letters are folded to ASCII the way thermal printers expect.

use moneymachine_config::{PrinterSettings, TicketIcon, TicketTemplate};

/// Columns on the narrowest supported paper roll.
pub const TICKET_WIDTH: usize = 32;
/// Title used when no business name is set.
pub const FALLBACK_TITLE: &str = "TICKET";

const NAME_WIDTH: usize = 10;
const NAME_LINES: usize = 3;

const SAMPLE_NUMBER: &str = "001";
const SAMPLE_DATE: &str = "01/01/2025, 12:00:00";
const SAMPLE_PAYMENT: &str = "Efectivo";
const SAMPLE_SUBTOTAL: f64 = 35.0;
const SAMPLE_TAX: f64 = 5.6;
const SAMPLE_TOTAL: f64 = 40.6;

struct SampleItem {
    quantity: u32,
    name: &'static str,
    unit_price: f64,
    subtotal: f64,
}

const SAMPLE_ITEMS: [SampleItem; 2] = [
    SampleItem {
        quantity: 2,
        name: "Producto ejemplo",
        unit_price: 10.0,
        subtotal: 20.0,
    },
    SampleItem {
        quantity: 1,
        name: "Otro producto",
        unit_price: 15.0,
        subtotal: 15.0,
    },
];

/// Ticket lines for a sample sale printed with `settings`.
#[must_use]
pub fn ticket_preview(settings: &PrinterSettings) -> Vec<String> {
    let template = settings.ticket_template;
    let minimal = template == TicketTemplate::Minimal;
    let title = match settings.business_name.trim() {
        "" => FALLBACK_TITLE,
        name => name,
    };
    let icon = icon_art(settings.ticket_icon);
    let sep = "-".repeat(TICKET_WIDTH);
    let mut lines = Vec::new();

    if minimal {
        lines.extend(icon.iter().map(|row| center_line(row)));
        lines.push(center_line(title));
        lines.push(format!("#{SAMPLE_NUMBER}  {SAMPLE_DATE}"));
        lines.push(format!("Pago: {SAMPLE_PAYMENT}"));
        lines.push(String::new());
    } else {
        lines.push(sep.clone());
        if !icon.is_empty() {
            lines.extend(icon.iter().map(|row| center_line(row)));
            lines.push(" ".repeat(TICKET_WIDTH));
        }
        lines.push(center_line(title));
        lines.push(sep.clone());
        lines.push(format!("Ticket #{SAMPLE_NUMBER}"));
        lines.push(format!("Fecha: {SAMPLE_DATE}"));
        lines.push(format!("Pago: {SAMPLE_PAYMENT}"));
        lines.push(sep.clone());
        if template == TicketTemplate::Full {
            lines.push("Conserve este ticket".to_string());
            lines.push(sep.clone());
        }
    }

    lines.push(fit("Cant Producto  P.Unit Total"));
    if !minimal {
        lines.push(sep.clone());
    }
    for item in &SAMPLE_ITEMS {
        lines.extend(item_lines(item));
    }
    if !minimal {
        lines.push(sep.clone());
    }
    lines.push(format!("Subtotal:                ${SAMPLE_SUBTOTAL:.2}"));
    lines.push(format!("Impuesto:                ${SAMPLE_TAX:.2}"));
    if !minimal {
        lines.push(sep.clone());
    }
    lines.push(format!("TOTAL:                   ${SAMPLE_TOTAL:.2}"));
    lines.push(sep.clone());

    lines.extend(footer_lines(&settings.ticket_footer_lines).map(ToString::to_string));
    lines.push("   Gracias por su compra".to_string());
    lines.push(sep);
    // Feed so the cutter does not clip the last row.
    lines.push(String::new());
    lines.push(String::new());

    lines.iter().map(|line| fold_accents(line)).collect()
}

fn footer_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

const fn icon_art(icon: TicketIcon) -> &'static [&'static str] {
    match icon {
        TicketIcon::Blank => &[],
        TicketIcon::Tools => &["+---+", "| + |", "+---+"],
        TicketIcon::Florist => &["  *  ", " *** ", "*****", " *** ", "  *  "],
        TicketIcon::Beauty => &["\\   /", " \\ / ", "  X  ", " / \\ ", "/   \\"],
    }
}

fn center_line(text: &str) -> String {
    let text: String = text.chars().take(TICKET_WIDTH).collect();
    let len = text.chars().count();
    let left = (TICKET_WIDTH - len) / 2;
    let right = TICKET_WIDTH - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

fn fit(text: &str) -> String {
    let text: String = text.chars().take(TICKET_WIDTH).collect();
    format!("{text:<width$}", width = TICKET_WIDTH)
}

fn item_lines(item: &SampleItem) -> Vec<String> {
    let chars: Vec<char> = item.name.trim().chars().collect();
    let parts: Vec<String> = chars
        .chunks(NAME_WIDTH)
        .take(NAME_LINES)
        .map(|chunk| {
            let part: String = chunk.iter().collect();
            format!("{part:<width$}", width = NAME_WIDTH)
        })
        .collect();
    let unit = format!("${:.2}", item.unit_price);
    let total = format!("${:.2}", item.subtotal);
    let prices = format!("   {unit:>6}  {total:>6}");
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let left = if index == 0 {
                format!("{:>4} ", item.quantity)
            } else {
                " ".repeat(5)
            };
            let tail = if index == last { prices.as_str() } else { "" };
            fit(&format!("{left}{part}{tail}"))
        })
        .collect()
}

fn fold_accents(line: &str) -> String {
    line.chars()
        .map(|ch| match ch {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'Á' | 'À' | 'Ä' | 'Â' => 'A',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'É' | 'È' | 'Ë' | 'Ê' => 'E',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(template: TicketTemplate) -> PrinterSettings {
        PrinterSettings {
            ticket_template: template,
            ..PrinterSettings::default()
        }
    }

    fn separator() -> String {
        "-".repeat(TICKET_WIDTH)
    }

    #[test]
    fn simple_template_frames_the_header() {
        let lines = ticket_preview(&settings(TicketTemplate::Simple));
        assert_eq!(lines[0], separator());
        assert_eq!(lines[1], format!("{}TICKET{}", " ".repeat(13), " ".repeat(13)));
        assert_eq!(lines[2], separator());
        assert_eq!(lines[3], "Ticket #001");
        assert!(!lines.iter().any(|line| line == "Conserve este ticket"));
        assert!(lines.contains(&"TOTAL:                   $40.60".to_string()));
    }

    #[test]
    fn full_template_adds_the_keep_notice() {
        let lines = ticket_preview(&settings(TicketTemplate::Full));
        let notice = lines
            .iter()
            .position(|line| line == "Conserve este ticket")
            .expect("notice present");
        assert_eq!(lines[notice - 1], separator());
        assert_eq!(lines[notice + 1], separator());
    }

    #[test]
    fn minimal_template_skips_header_rules() {
        let lines = ticket_preview(&PrinterSettings {
            business_name: "  Ferretería Luna ".into(),
            ..settings(TicketTemplate::Minimal)
        });
        assert_eq!(lines[0].trim(), "Ferreteria Luna");
        assert_eq!(lines[0].len(), TICKET_WIDTH);
        assert!(lines[1].starts_with("#001  "));
        let first_rule = lines
            .iter()
            .position(|line| *line == separator())
            .expect("closing rule");
        assert!(lines[first_rule - 1].starts_with("TOTAL:"));
    }

    #[test]
    fn icon_rows_are_centred_above_the_title() {
        let lines = ticket_preview(&PrinterSettings {
            ticket_icon: TicketIcon::Florist,
            ..PrinterSettings::default()
        });
        assert_eq!(lines[1], format!("{}  *  {}", " ".repeat(13), " ".repeat(14)));
        assert_eq!(lines[3], center_line("*****"));
        assert_eq!(lines[6], " ".repeat(TICKET_WIDTH));
        assert_eq!(lines[7].trim(), FALLBACK_TITLE);
    }

    #[test]
    fn footer_rows_are_trimmed_before_the_closing() {
        let lines = ticket_preview(&PrinterSettings {
            ticket_footer_lines: "  Gracias, vuelva pronto \r\n\n Síguenos @flores ".into(),
            ..PrinterSettings::default()
        });
        let closing = lines
            .iter()
            .position(|line| line == "   Gracias por su compra")
            .expect("closing line");
        assert_eq!(lines[closing - 2], "Gracias, vuelva pronto");
        assert_eq!(lines[closing - 1], "Siguenos @flores");
        assert_eq!(&lines[lines.len() - 2..], &[String::new(), String::new()]);
    }

    #[test]
    fn long_item_names_wrap_with_prices_on_the_last_row() {
        let lines = ticket_preview(&PrinterSettings::default());
        let first = lines
            .iter()
            .position(|line| line.starts_with("   2 Producto e"))
            .expect("first item");
        assert_eq!(lines[first].len(), TICKET_WIDTH);
        assert_eq!(lines[first + 1], "     jemplo       $10.00  $20.00");
        assert_eq!(lines[first + 2], format!("{:<32}", "   1 Otro produ"));
        assert_eq!(lines[first + 3], "     cto          $15.00  $15.00");
    }
}
