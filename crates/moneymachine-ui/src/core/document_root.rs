//! Attributes mirrored onto the `<html>` element.

use crate::i18n::LocaleCode;
use moneymachine_config::ThemeMode;

/// Attribute read by the stylesheet to pick the colour scheme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Standard document language attribute.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Name and value pairs to set on the document element.
#[must_use]
pub const fn root_attributes(
    theme: ThemeMode,
    locale: LocaleCode,
) -> [(&'static str, &'static str); 2] {
    [
        (THEME_ATTRIBUTE, theme.as_str()),
        (LANG_ATTRIBUTE, locale.code()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_and_language_land_on_the_root() {
        assert_eq!(
            root_attributes(ThemeMode::Light, LocaleCode::Es),
            [("data-theme", "light"), ("lang", "es")]
        );
        assert_eq!(
            root_attributes(ThemeMode::default(), LocaleCode::De)[0],
            ("data-theme", "dark")
        );
    }
}
