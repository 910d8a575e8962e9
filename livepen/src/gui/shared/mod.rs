//! Shared UI infrastructure

pub mod theme;

pub use theme::{
    Theme, ThemeColors, colors, current_theme, init_theme, theme_signal, themed, toggle_theme,
};
