//! Responsive breakpoint definitions for the settings UI.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Tailwind-style name.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound, `None` for the widest breakpoint.
    pub max_width: Option<u16>,
}

/// Phones in portrait.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(479),
};
/// Phones in landscape.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 480,
    max_width: Some(767),
};
/// Tablets; the side menu appears from here up.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// Laptops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: Some(1439),
};
/// Desktops.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1440,
    max_width: Some(1919),
};
/// Wide displays.
pub const XXL: Breakpoint = Breakpoint {
    name: "2xl",
    min_width: 1920,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 6] = [XS, SM, MD, LG, XL, XXL];

/// Width assumed when the window size cannot be read.
pub const FALLBACK_WIDTH: u16 = 1280;

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XXL)
}

/// Whether the compact section selector replaces the side menu.
#[must_use]
pub const fn is_compact(width: u16) -> bool {
    width < MD.min_width
}

/// Convert a `window.innerWidth` reading into a breakpoint width.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn width_from_px(px: Option<f64>) -> u16 {
    match px {
        Some(value) if value.is_finite() => value.clamp(0.0, 65_535.0) as u16,
        _ => FALLBACK_WIDTH,
    }
}
