//! Timings for the transient "saved" acknowledgment shown after a panel save.

/// Panels that acknowledge an explicit save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavedScope {
    /// Tax percentage.
    Taxes,
    /// Invoicing profile.
    Invoicing,
    /// Printer settings.
    Printer,
}

impl SavedScope {
    /// How long the acknowledgment stays visible, in milliseconds.
    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Taxes => 800,
            Self::Invoicing => 900,
            Self::Printer => 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SavedScope;

    #[test]
    fn durations_follow_panel() {
        assert_eq!(SavedScope::Taxes.duration_ms(), 800);
        assert_eq!(SavedScope::Invoicing.duration_ms(), 900);
        assert_eq!(SavedScope::Printer.duration_ms(), 1000);
    }
}
