//! Typed preference model and the fixed catalogs it draws from.
//!
//! # Design
//! - Every catalog is a closed enum with a stable string form shared by the
//!   stored document, the command line, and the browser controls.
//! - Decoding the stored document is lenient per field: a missing or unknown
//!   value takes that field's default instead of discarding the whole profile.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::defaults::{FIRST_FOLIO, MAX_TAX_RATE};
use crate::error::{ConfigError, StorageError, StorageResult};
use crate::validate::normalize_upper;

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Stable string form used in storage and on the command line.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Every member in display order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|member| member.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ConfigError::UnknownValue {
                        field: $field,
                        value: trimmed.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

catalog! {
    /// Colour scheme applied to the whole application.
    #[derive(Default)]
    ThemeMode, "theme" {
        /// Dark palette.
        #[default]
        Dark => "dark",
        /// Light palette.
        Light => "light",
    }
}

catalog! {
    /// Interface language.
    #[derive(Default)]
    Language, "language" {
        /// English.
        #[default]
        En => "en",
        /// Spanish.
        Es => "es",
        /// French.
        Fr => "fr",
        /// German.
        De => "de",
    }
}

impl Language {
    /// Name of the language in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
        }
    }
}

catalog! {
    /// Currency used to format prices.
    #[derive(Default)]
    CurrencyCode, "currency" {
        /// United States dollar.
        #[default]
        Usd => "USD",
        /// Euro.
        Eur => "EUR",
        /// Mexican peso.
        Mxn => "MXN",
        /// Pound sterling.
        Gbp => "GBP",
        /// Japanese yen.
        Jpy => "JPY",
    }
}

impl CurrencyCode {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.as_str()
    }

    /// Symbol printed next to amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd | Self::Mxn => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
        }
    }

    /// English display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Mxn => "Mexican Peso",
            Self::Gbp => "British Pound",
            Self::Jpy => "Japanese Yen",
        }
    }
}

catalog! {
    /// Thermal paper roll width.
    #[derive(Default)]
    PaperWidth, "paper width" {
        /// 58 mm roll.
        Mm58 => "58mm",
        /// 80 mm roll.
        #[default]
        Mm80 => "80mm",
        /// 110 mm roll.
        Mm110 => "110mm",
    }
}

catalog! {
    /// Layout used when rendering a sales ticket.
    #[derive(Default)]
    TicketTemplate, "ticket template" {
        /// Header, items, and totals.
        #[default]
        Simple => "simple",
        /// Totals only.
        Minimal => "minimal",
        /// Everything including tax breakdown and footer.
        Full => "full",
    }
}

catalog! {
    /// Decorative icon printed in the ticket header.
    #[derive(Default)]
    TicketIcon, "ticket icon" {
        /// No icon.
        #[default]
        Blank => "none",
        /// Hardware store.
        Tools => "tools",
        /// Flower shop.
        Florist => "florist",
        /// Beauty salon.
        Beauty => "beauty",
    }
}

catalog! {
    /// SAT fiscal regime of the issuer.
    TaxRegime, "tax regime" {
        /// General regime for legal entities.
        GeneralLegalEntities => "601",
        /// Salaried individuals.
        Wages => "605",
        /// Individuals with business activities.
        BusinessIndividuals => "612",
    }
}

impl TaxRegime {
    /// Catalog label shown next to the code.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralLegalEntities => "601 - General de Ley Personas Morales",
            Self::Wages => "605 - Sueldos y Salarios",
            Self::BusinessIndividuals => "612 - Personas Físicas con Actividades Empresariales",
        }
    }
}

catalog! {
    /// Default payment method written on invoices.
    #[derive(Default)]
    PaymentMethod, "payment method" {
        /// Paid in a single instalment.
        #[default]
        Pue => "PUE",
        /// Paid in instalments or deferred.
        Ppd => "PPD",
    }
}

impl PaymentMethod {
    /// Catalog label shown next to the code.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pue => "PUE - Pago en una sola exhibición",
            Self::Ppd => "PPD - Pago en parcialidades o diferido",
        }
    }
}

/// Sales tax percentage, always finite and within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Build a rate, clamping into range and mapping non-finite input to zero.
    #[must_use]
    pub const fn new(percent: f64) -> Self {
        if percent.is_finite() {
            Self(percent.clamp(0.0, MAX_TAX_RATE))
        } else {
            Self(0.0)
        }
    }

    /// Percentage value.
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TaxRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Ticket printer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterSettings {
    /// Operating-system printer name, empty when unset.
    #[serde(deserialize_with = "lenient")]
    pub printer_name: String,
    /// Paper roll width.
    #[serde(rename = "printerWidth", deserialize_with = "lenient")]
    pub paper_width: PaperWidth,
    /// Print a ticket automatically after every sale.
    #[serde(deserialize_with = "lenient")]
    pub auto_print: bool,
    /// Ticket layout.
    #[serde(deserialize_with = "lenient")]
    pub ticket_template: TicketTemplate,
    /// Free-form footer text, one line per row.
    #[serde(deserialize_with = "lenient")]
    pub ticket_footer_lines: String,
    /// Business name printed in the ticket header.
    #[serde(deserialize_with = "lenient")]
    pub business_name: String,
    /// Header icon.
    #[serde(deserialize_with = "lenient")]
    pub ticket_icon: TicketIcon,
    /// Uploaded logo as a data URL, empty when none was chosen.
    #[serde(deserialize_with = "lenient")]
    pub business_logo: String,
    /// Print the uploaded logo above the header; only an explicit `false` disables it.
    #[serde(deserialize_with = "enabled_unless_false")]
    pub ticket_print_logo: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            printer_name: String::new(),
            paper_width: PaperWidth::default(),
            auto_print: false,
            ticket_template: TicketTemplate::default(),
            ticket_footer_lines: String::new(),
            business_name: String::new(),
            ticket_icon: TicketIcon::default(),
            business_logo: String::new(),
            ticket_print_logo: true,
        }
    }
}

/// Issuer data used for Mexican electronic invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicingProfile {
    /// Fiscal regime, unset until chosen.
    #[serde(deserialize_with = "lenient")]
    pub tax_regime: Option<TaxRegime>,
    /// Issuer taxpayer id.
    #[serde(deserialize_with = "lenient")]
    pub rfc: String,
    /// Registered legal name.
    #[serde(deserialize_with = "lenient")]
    pub legal_name: String,
    /// Fiscal address postal code.
    #[serde(deserialize_with = "lenient")]
    pub postal_code: String,
    /// Invoice series prefix.
    #[serde(deserialize_with = "lenient")]
    pub series: String,
    /// Next folio to issue; always at least one when present.
    #[serde(deserialize_with = "lenient_folio")]
    pub next_folio: Option<u32>,
    /// Default payment method.
    #[serde(deserialize_with = "lenient")]
    pub payment_method: PaymentMethod,
    /// Default CFDI use code.
    #[serde(deserialize_with = "lenient")]
    pub cfdi_use: String,
    /// Whether invoices can be issued from the register.
    #[serde(deserialize_with = "lenient")]
    pub enabled: bool,
    /// Ask for customer tax data at checkout.
    #[serde(deserialize_with = "lenient")]
    pub ask_customer: bool,
}

impl Default for InvoicingProfile {
    fn default() -> Self {
        Self {
            tax_regime: None,
            rfc: String::new(),
            legal_name: String::new(),
            postal_code: String::new(),
            series: String::new(),
            next_folio: None,
            payment_method: PaymentMethod::default(),
            cfdi_use: String::new(),
            enabled: false,
            ask_customer: true,
        }
    }
}

impl InvoicingProfile {
    /// Return the profile with code fields upper-cased and trimmed.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.rfc = normalize_upper(&self.rfc);
        self.series = normalize_upper(&self.series);
        self.cfdi_use = normalize_upper(&self.cfdi_use);
        self.next_folio = self.next_folio.filter(|folio| *folio >= FIRST_FOLIO);
        self
    }
}

/// The complete set of user preferences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Colour scheme.
    #[serde(deserialize_with = "lenient")]
    pub theme: ThemeMode,
    /// Interface language.
    #[serde(deserialize_with = "lenient")]
    pub language: Language,
    /// Display currency.
    #[serde(deserialize_with = "lenient")]
    pub currency: CurrencyCode,
    /// Sales tax percentage.
    #[serde(deserialize_with = "lenient")]
    pub tax_rate: TaxRate,
    /// Ticket printer configuration, stored as top-level keys.
    #[serde(flatten)]
    pub printer: PrinterSettings,
    /// Invoicing issuer profile.
    #[serde(deserialize_with = "lenient")]
    pub invoicing: InvoicingProfile,
}

impl Preferences {
    /// Decode a stored preferences document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] when the text is not a JSON object.
    pub fn from_document(raw: &str) -> StorageResult<Self> {
        serde_json::from_str(raw).map_err(|source| StorageError::Serialization {
            operation: "decode",
            source,
        })
    }

    /// Encode the preferences as a stored document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] if encoding fails.
    pub fn to_document(&self) -> StorageResult<String> {
        serde_json::to_string(self).map_err(|source| StorageError::Serialization {
            operation: "encode",
            source,
        })
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn enabled_unless_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value != Value::Bool(false))
}

fn lenient_folio<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let folio: Option<u32> = lenient(deserializer)?;
    Ok(folio.filter(|value| *value >= FIRST_FOLIO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_register() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.currency, CurrencyCode::Usd);
        assert!(prefs.tax_rate.percent().abs() < f64::EPSILON);
        assert_eq!(prefs.printer.paper_width, PaperWidth::Mm80);
        assert_eq!(prefs.printer.ticket_icon, TicketIcon::Blank);
        assert!(prefs.printer.ticket_print_logo);
        assert!(prefs.invoicing.ask_customer);
        assert!(!prefs.invoicing.enabled);
    }

    #[test]
    fn catalogs_parse_case_insensitively() {
        assert_eq!("eur".parse::<CurrencyCode>().ok(), Some(CurrencyCode::Eur));
        assert_eq!(" Light ".parse::<ThemeMode>().ok(), Some(ThemeMode::Light));
        assert_eq!("none".parse::<TicketIcon>().ok(), Some(TicketIcon::Blank));
        assert!(matches!(
            "BTC".parse::<CurrencyCode>(),
            Err(ConfigError::UnknownValue { field: "currency", .. })
        ));
    }

    #[test]
    fn tax_rate_is_clamped_and_finite() {
        assert!((TaxRate::new(16.5).percent() - 16.5).abs() < f64::EPSILON);
        assert!((TaxRate::new(250.0).percent() - 100.0).abs() < f64::EPSILON);
        assert!(TaxRate::new(-3.0).percent().abs() < f64::EPSILON);
        assert!(TaxRate::new(f64::NAN).percent().abs() < f64::EPSILON);
        assert_eq!(TaxRate::new(16.0).to_string(), "16%");
    }

    #[test]
    fn document_uses_flat_camel_case_keys() {
        let mut prefs = Preferences::default();
        prefs.printer.paper_width = PaperWidth::Mm58;
        prefs.tax_rate = TaxRate::new(8.0);
        let raw = prefs.to_document().expect("encode");
        let value: Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["printerWidth"], "58mm");
        assert_eq!(value["taxRate"], 8.0);
        assert_eq!(value["invoicing"]["askCustomer"], true);
        assert_eq!(Preferences::from_document(&raw).expect("decode"), prefs);
    }

    #[test]
    fn unknown_or_mistyped_fields_fall_back_per_field() {
        let raw = r#"{
            "theme": "sepia",
            "language": "es",
            "currency": 42,
            "taxRate": "abc",
            "printerName": "EPSON TM-T20",
            "ticketIcon": "florist",
            "businessLogo": "",
            "invoicing": { "nextFolio": 0, "taxRegime": "612", "paymentMethod": "XYZ" }
        }"#;
        let prefs = Preferences::from_document(raw).expect("decode");
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.language, Language::Es);
        assert_eq!(prefs.currency, CurrencyCode::Usd);
        assert!(prefs.tax_rate.percent().abs() < f64::EPSILON);
        assert_eq!(prefs.printer.printer_name, "EPSON TM-T20");
        assert_eq!(prefs.printer.ticket_icon, TicketIcon::Florist);
        assert_eq!(prefs.invoicing.next_folio, None);
        assert_eq!(
            prefs.invoicing.tax_regime,
            Some(TaxRegime::BusinessIndividuals)
        );
        assert_eq!(prefs.invoicing.payment_method, PaymentMethod::Pue);
        assert!(prefs.printer.business_logo.is_empty());
        assert!(prefs.printer.ticket_print_logo);
    }

    #[test]
    fn logo_fields_round_trip_with_their_stored_names() {
        let raw = r#"{"businessLogo":"data:image/png;base64,AAAA","ticketPrintLogo":false}"#;
        let prefs = Preferences::from_document(raw).expect("decode");
        assert_eq!(prefs.printer.business_logo, "data:image/png;base64,AAAA");
        assert!(!prefs.printer.ticket_print_logo);

        let value: Value =
            serde_json::from_str(&prefs.to_document().expect("encode")).expect("json");
        assert_eq!(value["businessLogo"], "data:image/png;base64,AAAA");
        assert_eq!(value["ticketPrintLogo"], false);

        let mistyped = Preferences::from_document(r#"{"ticketPrintLogo":"no"}"#).expect("decode");
        assert!(mistyped.printer.ticket_print_logo);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(Preferences::from_document("not json").is_err());
        assert!(Preferences::from_document("[1, 2]").is_err());
    }

    #[test]
    fn normalized_profile_upper_cases_codes() {
        let profile = InvoicingProfile {
            rfc: " xaxx010101000 ".into(),
            series: "pos".into(),
            cfdi_use: "g03".into(),
            next_folio: Some(0),
            ..InvoicingProfile::default()
        }
        .normalized();
        assert_eq!(profile.rfc, "XAXX010101000");
        assert_eq!(profile.series, "POS");
        assert_eq!(profile.cfdi_use, "G03");
        assert_eq!(profile.next_folio, None);
    }
}
