//! Theme system for livepen
//!
//! Light and dark color palettes driven by one global signal, so the page
//! chrome and every editor derive from the same flag and can never disagree.

use floem::prelude::*;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Status glyph shown on the toolbar toggle for the current mode.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }
}

/// Color palette for a theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    // Backgrounds
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
    pub bg_hover: Color,
    pub bg_selected: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border: Color,

    // Accents
    pub accent: Color,
    pub accent_hover: Color,
}

impl ThemeColors {
    /// Get colors for the dark theme
    pub const fn dark() -> Self {
        Self {
            bg_base: Color::rgb8(30, 30, 30),
            bg_surface: Color::rgb8(38, 38, 38),
            bg_elevated: Color::rgb8(50, 50, 50),
            bg_hover: Color::rgb8(60, 60, 60),
            bg_selected: Color::rgb8(70, 70, 70),

            text_primary: Color::WHITE,
            text_secondary: Color::rgb8(180, 180, 180),
            text_muted: Color::rgb8(128, 128, 128),

            border: Color::rgb8(60, 60, 60),

            accent: Color::rgb8(33, 150, 243),
            accent_hover: Color::rgb8(66, 165, 245),
        }
    }

    /// Get colors for the light theme
    pub const fn light() -> Self {
        Self {
            bg_base: Color::WHITE,
            bg_surface: Color::rgb8(250, 250, 250),
            bg_elevated: Color::rgb8(245, 245, 245),
            bg_hover: Color::rgb8(235, 235, 235),
            bg_selected: Color::rgb8(225, 225, 225),

            text_primary: Color::rgb8(30, 30, 30),
            text_secondary: Color::rgb8(80, 80, 80),
            text_muted: Color::rgb8(128, 128, 128),

            border: Color::rgb8(220, 220, 220),

            accent: Color::rgb8(25, 118, 210),
            accent_hover: Color::rgb8(21, 101, 192),
        }
    }

    /// Get colors for the given theme
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

/// Global theme signal
static THEME_SIGNAL: std::sync::OnceLock<RwSignal<Theme>> = std::sync::OnceLock::new();

/// Initialize the global theme signal
pub fn init_theme(theme: Theme) -> RwSignal<Theme> {
    let signal = RwSignal::new(theme);
    let _ = THEME_SIGNAL.set(signal);
    signal
}

/// Get the global theme signal (returns None if not initialized)
pub fn theme_signal() -> Option<RwSignal<Theme>> {
    THEME_SIGNAL.get().copied()
}

/// Current theme, defaulting to dark before initialization.
pub fn current_theme() -> Theme {
    theme_signal().map(|s| s.get()).unwrap_or_default()
}

/// Flip the global theme. Every themed style and editor palette follows.
pub fn toggle_theme() {
    if let Some(signal) = theme_signal() {
        signal.update(|t| *t = t.toggled());
    }
}

/// Get the current theme colors (convenience function)
/// Returns dark theme colors if theme signal is not initialized
pub fn colors() -> ThemeColors {
    ThemeColors::for_theme(current_theme())
}

/// Create a reactive closure that returns theme-aware colors
/// Use this in style closures for automatic theme updates
pub fn themed<F, T>(f: F) -> impl Fn() -> T + Clone + 'static
where
    F: Fn(ThemeColors) -> T + Clone + 'static,
{
    move || f(colors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn glyph_reflects_mode() {
        assert_ne!(Theme::Dark.glyph(), Theme::Light.glyph());
        assert_eq!(Theme::Dark.toggled().toggled().glyph(), Theme::Dark.glyph());
    }
}
