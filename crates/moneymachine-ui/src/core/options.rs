//! Choice lists for the appearance, language, and currency panels.

use moneymachine_config::{CurrencyCode, Language, ThemeMode};

/// A selectable value and whether it matches the stored preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    /// Value written to the store when chosen.
    pub value: T,
    /// Primary label.
    pub label: String,
    /// Secondary label, empty when the option has none.
    pub detail: String,
    /// Whether this is the stored value.
    pub active: bool,
}

/// Dark and light buttons; `label` is a translation key.
#[must_use]
pub fn theme_choices(current: ThemeMode) -> Vec<Choice<ThemeMode>> {
    ThemeMode::all()
        .iter()
        .map(|theme| Choice {
            value: *theme,
            label: theme_label_key(*theme).to_string(),
            detail: String::new(),
            active: *theme == current,
        })
        .collect()
}

/// Translation key naming a theme.
#[must_use]
pub const fn theme_label_key(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => "settings.dark_mode",
        ThemeMode::Light => "settings.light_mode",
    }
}

/// The four interface languages, labelled in their own language.
#[must_use]
pub fn language_choices(current: Language) -> Vec<Choice<Language>> {
    Language::all()
        .iter()
        .map(|language| Choice {
            value: *language,
            label: language.native_name().to_string(),
            detail: language.as_str().to_uppercase(),
            active: *language == current,
        })
        .collect()
}

/// The supported currencies as `symbol code` with the currency name.
#[must_use]
pub fn currency_choices(current: CurrencyCode) -> Vec<Choice<CurrencyCode>> {
    CurrencyCode::all()
        .iter()
        .map(|currency| Choice {
            value: *currency,
            label: format!("{} {}", currency.symbol(), currency.code()),
            detail: currency.name().to_string(),
            active: *currency == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active<T: Copy>(choices: &[Choice<T>]) -> Vec<T> {
        choices
            .iter()
            .filter(|choice| choice.active)
            .map(|choice| choice.value)
            .collect()
    }

    #[test]
    fn euro_marks_exactly_one_currency() {
        let choices = currency_choices(CurrencyCode::Eur);
        assert_eq!(choices.len(), 5);
        assert_eq!(active(&choices), vec![CurrencyCode::Eur]);
        assert_eq!(choices[1].label, "€ EUR");
    }

    #[test]
    fn language_choices_use_native_names() {
        let choices = language_choices(Language::Fr);
        assert_eq!(active(&choices), vec![Language::Fr]);
        let labels: Vec<&str> = choices.iter().map(|choice| choice.label.as_str()).collect();
        assert_eq!(labels, ["English", "Español", "Français", "Deutsch"]);
    }

    #[test]
    fn theme_choices_highlight_current_mode() {
        let dark = theme_choices(ThemeMode::Dark);
        assert_eq!(active(&dark), vec![ThemeMode::Dark]);
        let light = theme_choices(ThemeMode::Light);
        assert_eq!(active(&light), vec![ThemeMode::Light]);
        assert_eq!(light[1].label, "settings.light_mode");
    }
}
