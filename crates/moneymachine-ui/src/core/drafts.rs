//! Panel-local drafts edited before an explicit save.
//!
//! # Design
//! - Drafts hold raw control values; only `commit`/`to_*` conversions touch
//!   the typed model, so an abandoned edit never reaches the store.
//! - Unknown values from string-valued controls leave the field unchanged.

use moneymachine_config::validate::{coerce_tax_rate, parse_folio};
use moneymachine_config::{
    ConfigResult, InvoicingProfile, PaymentMethod, PrinterSettings, TaxRate, TaxRegime,
};

/// Free-form text behind the tax percentage input.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TaxDraft {
    /// Current input text.
    pub text: String,
}

impl TaxDraft {
    /// Seed the input from the stored rate.
    #[must_use]
    pub fn from_rate(rate: TaxRate) -> Self {
        Self {
            text: rate.percent().to_string(),
        }
    }

    /// Rate the draft would store; invalid text becomes zero.
    #[must_use]
    pub fn commit(&self) -> TaxRate {
        coerce_tax_rate(&self.text)
    }
}

/// Editable copy of the printer settings.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PrinterForm {
    settings: PrinterSettings,
}

impl PrinterForm {
    /// Start editing from the stored settings.
    #[must_use]
    pub fn from_settings(settings: &PrinterSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Current draft values.
    #[must_use]
    pub const fn settings(&self) -> &PrinterSettings {
        &self.settings
    }

    /// Set the printer name.
    pub fn set_printer_name(&mut self, value: String) {
        self.settings.printer_name = value;
    }

    /// Set the business name printed on tickets.
    pub fn set_business_name(&mut self, value: String) {
        self.settings.business_name = value;
    }

    /// Set the ticket footer text.
    pub fn set_footer_lines(&mut self, value: String) {
        self.settings.ticket_footer_lines = value;
    }

    /// Toggle automatic printing.
    pub const fn set_auto_print(&mut self, value: bool) {
        self.settings.auto_print = value;
    }

    /// Apply a paper width chosen from a select control.
    pub fn set_paper_width(&mut self, raw: &str) {
        if let Ok(width) = raw.parse() {
            self.settings.paper_width = width;
        }
    }

    /// Apply a ticket template chosen from a select control.
    pub fn set_ticket_template(&mut self, raw: &str) {
        if let Ok(template) = raw.parse() {
            self.settings.ticket_template = template;
        }
    }

    /// Apply a ticket icon chosen from a select control.
    pub fn set_ticket_icon(&mut self, raw: &str) {
        if let Ok(icon) = raw.parse() {
            self.settings.ticket_icon = icon;
        }
    }

    /// Settings to hand to the store.
    #[must_use]
    pub fn into_settings(self) -> PrinterSettings {
        self.settings
    }
}

/// Raw values of the ten invoicing fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoicingForm {
    /// Regime code, empty when none is chosen.
    pub tax_regime: String,
    /// Taxpayer id, upper-cased as typed.
    pub rfc: String,
    /// Registered legal name.
    pub legal_name: String,
    /// Fiscal postal code.
    pub postal_code: String,
    /// Invoice series, upper-cased as typed.
    pub series: String,
    /// Folio text, empty when unset.
    pub next_folio: String,
    /// Payment method code.
    pub payment_method: String,
    /// CFDI use code, upper-cased as typed.
    pub cfdi_use: String,
    /// Invoicing switched on.
    pub enabled: bool,
    /// Ask for the customer's fiscal data at checkout.
    pub ask_customer: bool,
}

impl Default for InvoicingForm {
    fn default() -> Self {
        Self::from_profile(&InvoicingProfile::default())
    }
}

impl InvoicingForm {
    /// Start editing from the stored profile.
    #[must_use]
    pub fn from_profile(profile: &InvoicingProfile) -> Self {
        Self {
            tax_regime: profile
                .tax_regime
                .map(|regime| regime.as_str().to_string())
                .unwrap_or_default(),
            rfc: profile.rfc.clone(),
            legal_name: profile.legal_name.clone(),
            postal_code: profile.postal_code.clone(),
            series: profile.series.clone(),
            next_folio: profile
                .next_folio
                .map(|folio| folio.to_string())
                .unwrap_or_default(),
            payment_method: profile.payment_method.as_str().to_string(),
            cfdi_use: profile.cfdi_use.clone(),
            enabled: profile.enabled,
            ask_customer: profile.ask_customer,
        }
    }

    /// Set the RFC, upper-casing it.
    pub fn set_rfc(&mut self, value: &str) {
        self.rfc = value.to_uppercase();
    }

    /// Set the series, upper-casing it.
    pub fn set_series(&mut self, value: &str) {
        self.series = value.to_uppercase();
    }

    /// Set the CFDI use, upper-casing it.
    pub fn set_cfdi_use(&mut self, value: &str) {
        self.cfdi_use = value.to_uppercase();
    }

    /// Convert to a profile, rejecting unknown codes and non-positive folios.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails to parse.
    pub fn to_profile(&self) -> ConfigResult<InvoicingProfile> {
        let tax_regime = match self.tax_regime.trim() {
            "" => None,
            code => Some(code.parse::<TaxRegime>()?),
        };
        let payment_method = self.payment_method.parse::<PaymentMethod>()?;
        Ok(InvoicingProfile {
            tax_regime,
            rfc: self.rfc.clone(),
            legal_name: self.legal_name.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            series: self.series.clone(),
            next_folio: parse_folio(&self.next_folio)?,
            payment_method,
            cfdi_use: self.cfdi_use.clone(),
            enabled: self.enabled,
            ask_customer: self.ask_customer,
        }
        .normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymachine_config::{ConfigError, PaperWidth, TicketIcon};

    #[test]
    fn tax_draft_coerces_on_commit() {
        let draft = TaxDraft {
            text: "16.5".into(),
        };
        assert!((draft.commit().percent() - 16.5).abs() < f64::EPSILON);
        let draft = TaxDraft { text: "abc".into() };
        assert!(draft.commit().percent().abs() < f64::EPSILON);
        assert_eq!(TaxDraft::from_rate(TaxRate::new(16.0)).text, "16");
    }

    #[test]
    fn printer_form_ignores_unknown_select_values() {
        let mut form = PrinterForm::from_settings(&PrinterSettings::default());
        form.set_paper_width("58mm");
        form.set_paper_width("12in");
        form.set_ticket_icon("florist");
        form.set_auto_print(true);
        let settings = form.into_settings();
        assert_eq!(settings.paper_width, PaperWidth::Mm58);
        assert_eq!(settings.ticket_icon, TicketIcon::Florist);
        assert!(settings.auto_print);
    }

    #[test]
    fn printer_form_keeps_the_stored_logo() {
        let stored = PrinterSettings {
            business_logo: "data:image/png;base64,AAAA".into(),
            ticket_print_logo: false,
            ..PrinterSettings::default()
        };
        let mut form = PrinterForm::from_settings(&stored);
        form.set_business_name("Flores Ana".into());
        let settings = form.into_settings();
        assert_eq!(settings.business_logo, stored.business_logo);
        assert!(!settings.ticket_print_logo);
    }

    #[test]
    fn invoicing_form_upper_cases_codes() -> anyhow::Result<()> {
        let mut form = InvoicingForm::default();
        form.set_rfc("xaxx010101000");
        form.set_series("a");
        form.set_cfdi_use("g03");
        assert_eq!(form.rfc, "XAXX010101000");

        form.tax_regime = "612".into();
        form.next_folio = "42".into();
        let profile = form.to_profile()?;
        assert_eq!(profile.tax_regime, Some(TaxRegime::BusinessIndividuals));
        assert_eq!(profile.series, "A");
        assert_eq!(profile.cfdi_use, "G03");
        assert_eq!(profile.next_folio, Some(42));
        assert!(profile.ask_customer);
        Ok(())
    }

    #[test]
    fn invoicing_form_rejects_zero_folio() {
        let form = InvoicingForm {
            next_folio: "0".into(),
            ..InvoicingForm::default()
        };
        assert!(matches!(
            form.to_profile(),
            Err(ConfigError::InvalidField { field: "next_folio", .. })
        ));
    }

    #[test]
    fn empty_form_round_trips_default_profile() -> anyhow::Result<()> {
        let profile = InvoicingForm::default().to_profile()?;
        assert_eq!(profile, InvoicingProfile::default());
        Ok(())
    }
}
