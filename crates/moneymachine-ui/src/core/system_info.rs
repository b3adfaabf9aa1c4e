//! Rows of the read-only system information panel.

use moneymachine_config::Preferences;

use crate::core::options::theme_label_key;
use crate::i18n::TranslationBundle;

/// Application version shown in the panel.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One labelled value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRow {
    /// Translated label.
    pub label: String,
    /// Display value.
    pub value: String,
}

/// Build environment name.
#[must_use]
pub const fn environment() -> &'static str {
    if cfg!(debug_assertions) {
        "Development"
    } else {
        "Production"
    }
}

/// Rows derived from the current preferences, in display order.
#[must_use]
pub fn system_rows(preferences: &Preferences, bundle: &TranslationBundle) -> Vec<InfoRow> {
    let row = |key: &str, default: &str, value: String| InfoRow {
        label: bundle.text(key, default),
        value,
    };
    let theme_key = theme_label_key(preferences.theme);
    vec![
        row("settings.system.version", "Version", APP_VERSION.to_string()),
        row(
            "settings.system.environment",
            "Environment",
            environment().to_string(),
        ),
        row(
            "settings.system.theme",
            "Theme",
            bundle.text(theme_key, preferences.theme.as_str()),
        ),
        row(
            "settings.system.language",
            "Language",
            preferences.language.native_name().to_string(),
        ),
        row(
            "settings.system.currency",
            "Currency",
            preferences.currency.code().to_string(),
        ),
        row(
            "settings.system.tax_rate",
            "Tax rate",
            preferences.tax_rate.to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use moneymachine_config::{CurrencyCode, Language, TaxRate, ThemeMode};

    fn value_of<'a>(rows: &'a [InfoRow], label: &str) -> &'a str {
        rows.iter()
            .find(|row| row.label == label)
            .map_or("", |row| row.value.as_str())
    }

    #[test]
    fn rows_reflect_preferences() {
        let prefs = Preferences {
            language: Language::Es,
            currency: CurrencyCode::Mxn,
            tax_rate: TaxRate::new(16.0),
            ..Preferences::default()
        };
        let rows = system_rows(&prefs, &TranslationBundle::new(LocaleCode::En));
        assert_eq!(rows.len(), 6);
        assert_eq!(value_of(&rows, "Version"), APP_VERSION);
        assert_eq!(value_of(&rows, "Language"), "Español");
        assert_eq!(value_of(&rows, "Currency"), "MXN");
        assert_eq!(value_of(&rows, "Tax rate"), "16%");
    }

    #[test]
    fn theme_label_switches_without_residue() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let dark = system_rows(&Preferences::default(), &bundle);
        assert_eq!(value_of(&dark, "Theme"), "Dark mode");

        let light = Preferences {
            theme: ThemeMode::Light,
            ..Preferences::default()
        };
        let rows = system_rows(&light, &bundle);
        assert_eq!(value_of(&rows, "Theme"), "Light mode");
        assert!(!rows.iter().any(|row| row.value.contains("Dark")));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn debug_builds_report_development() {
        assert_eq!(environment(), "Development");
    }
}
