//! Settings section registry and the active-section controller.
//!
//! # Design
//! - The registry is a static ordered array; ids are a closed enum so an
//!   invalid active section cannot be represented.
//! - The controller persists the bare id string and falls back to
//!   [`DEFAULT_SECTION`] when the stored value is missing or unknown.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::defaults::SECTION_STORAGE_KEY;
use crate::error::ConfigError;
use crate::storage::SettingsStorage;

/// Identifier of one settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Signed-in user and sign-out.
    Account,
    /// Theme selection.
    Appearance,
    /// Interface language.
    Language,
    /// Display currency.
    Currency,
    /// Default tax percentage.
    Taxes,
    /// Ticket printer.
    Printer,
    /// Mexican invoicing issuer data.
    Facturacion,
    /// Read-only system information.
    System,
}

/// Section shown when nothing valid is persisted.
pub const DEFAULT_SECTION: SectionId = SectionId::Account;

impl SectionId {
    /// Stable id used in storage, URLs, and the compact selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Appearance => "appearance",
            Self::Language => "language",
            Self::Currency => "currency",
            Self::Taxes => "taxes",
            Self::Printer => "printer",
            Self::Facturacion => "facturacion",
            Self::System => "system",
        }
    }

    /// Resolve a stored id; unknown ids yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == value)
    }

    /// Registry order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Account,
            Self::Appearance,
            Self::Language,
            Self::Currency,
            Self::Taxes,
            Self::Printer,
            Self::Facturacion,
            Self::System,
        ]
    }

    /// Registry entry for this id.
    #[must_use]
    pub fn descriptor(self) -> &'static SectionDescriptor {
        &SECTIONS[self as usize]
    }
}

impl FromStr for SectionId {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value.trim()).ok_or_else(|| ConfigError::UnknownSection {
            value: value.trim().to_string(),
        })
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Section id.
    pub id: SectionId,
    /// Menu title.
    pub title: &'static str,
    /// One-line menu subtitle.
    pub description: &'static str,
    /// Longer text shown above the panel.
    pub summary: &'static str,
    /// Feather icon name.
    pub icon: &'static str,
}

/// The section registry, in menu order.
pub static SECTIONS: [SectionDescriptor; 8] = [
    SectionDescriptor {
        id: SectionId::Account,
        title: "Cuenta",
        description: "Sesión y datos del usuario",
        summary: "Gestión de tu sesión y datos básicos.",
        icon: "user",
    },
    SectionDescriptor {
        id: SectionId::Appearance,
        title: "Apariencia",
        description: "Tema oscuro / claro",
        summary: "Tema visual de la aplicación.",
        icon: "monitor",
    },
    SectionDescriptor {
        id: SectionId::Language,
        title: "Idioma",
        description: "Lenguaje de la interfaz",
        summary: "Idioma de la interfaz de Moneymachine POS.",
        icon: "globe",
    },
    SectionDescriptor {
        id: SectionId::Currency,
        title: "Moneda",
        description: "Moneda principal del negocio",
        summary: "Selecciona la moneda principal de tu negocio.",
        icon: "dollar-sign",
    },
    SectionDescriptor {
        id: SectionId::Taxes,
        title: "Impuestos",
        description: "IVA / porcentaje de impuestos",
        summary: "Configura el porcentaje de impuestos que se aplicará por defecto.",
        icon: "percent",
    },
    SectionDescriptor {
        id: SectionId::Printer,
        title: "Impresora",
        description: "Ticket y auto-impresión",
        summary: "Configura la impresora de tickets y el tamaño del papel.",
        icon: "printer",
    },
    SectionDescriptor {
        id: SectionId::Facturacion,
        title: "Facturación MX",
        description: "Datos fiscales para CFDI",
        summary: "Datos fiscales para emitir CFDI en México.",
        icon: "file-text",
    },
    SectionDescriptor {
        id: SectionId::System,
        title: "Sistema",
        description: "Información del sistema",
        summary: "Información general de la aplicación y entorno.",
        icon: "cpu",
    },
];

/// Tracks and persists the displayed section.
pub struct SectionController<S> {
    storage: S,
    active: Cell<SectionId>,
}

impl<S: SettingsStorage> SectionController<S> {
    /// Restore the persisted section, or [`DEFAULT_SECTION`] when it is
    /// absent, unknown, or unreadable.
    pub fn rehydrate(storage: S) -> Self {
        let active = match storage.read(SECTION_STORAGE_KEY) {
            Ok(Some(raw)) => SectionId::parse(&raw).unwrap_or_else(|| {
                debug!(value = %raw, "ignoring unknown persisted section");
                DEFAULT_SECTION
            }),
            Ok(None) => DEFAULT_SECTION,
            Err(err) => {
                warn!(error = %err, key = SECTION_STORAGE_KEY, "failed to read active section");
                DEFAULT_SECTION
            }
        };
        Self {
            storage,
            active: Cell::new(active),
        }
    }

    /// Currently displayed section.
    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active.get()
    }

    /// Backing storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Display `id` and persist it.
    pub fn select(&self, id: SectionId) {
        self.active.set(id);
        debug!(section = id.as_str(), "settings section selected");
        if let Err(err) = self.storage.write(SECTION_STORAGE_KEY, id.as_str()) {
            warn!(error = %err, key = SECTION_STORAGE_KEY, "failed to persist active section");
        }
    }

    /// Select from a string-valued control; unknown ids are ignored.
    pub fn select_raw(&self, raw: &str) -> Option<SectionId> {
        let id = SectionId::parse(raw)?;
        self.select(id);
        Some(id)
    }
}
