//! Lightweight JSON-backed translations with per-locale bundles.

use moneymachine_config::Language;
use serde_json::Value;
use std::sync::LazyLock;

/// Locales with a bundled translation file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 4] {
        [Self::En, Self::Es, Self::Fr, Self::De]
    }

    /// Two-letter language code, also used for the document `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }
}

impl From<Language> for LocaleCode {
    fn from(language: Language) -> Self {
        match language {
            Language::En => Self::En,
            Language::Es => Self::Es,
            Language::Fr => Self::Fr,
            Language::De => Self::De,
        }
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Keys missing from the locale resolve against English, then the caller default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
        LocaleCode::De => include_str!("../../i18n/de.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn partial_locales_fall_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::De);
        assert_eq!(bundle.text("settings.invoicing.rfc", "x"), "RFC");
        assert_eq!(bundle.text("settings.save", "x"), "Speichern");
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert_ne!(bundle.text("settings.title", ""), "");
            assert_ne!(bundle.text("settings.account.not_logged_in", ""), "");
        }
    }

    #[test]
    fn stored_languages_map_to_bundles() {
        for language in Language::all() {
            let locale = LocaleCode::from(*language);
            assert_eq!(locale.code(), language.as_str());
        }
    }

    #[test]
    fn theme_labels_have_no_residue_between_modes() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("settings.dark_mode", ""), "Dark mode");
        assert_eq!(bundle.text("settings.light_mode", ""), "Light mode");
    }
}
