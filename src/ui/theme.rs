//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML files with a name, a light/dark flag and a color table.
//! Two are bundled, and a custom one can be loaded from a file. Colors are hex
//! strings converted to 24-bit ANSI escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme (default)
//! - `catppuccin-mocha`: Dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! dark = true
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! overlay_border = "#89b4fa"
//! overlay_title_fg = "#89b4fa"
//! ```

use crate::domain::error::{Result, UserdeckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bundled light theme, used when nothing else is configured.
pub const LIGHT_THEME: &str = "catppuccin-latte";

/// Bundled dark theme.
pub const DARK_THEME: &str = "catppuccin-mocha";

/// Complete theme definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,

    /// Whether this is a dark theme. Drives the light/dark toggle.
    #[serde(default)]
    pub dark: bool,

    pub colors: ThemeColors,
}

/// Hex color values for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Error notification and overlay error text.
    pub error_fg: String,

    pub overlay_border: String,
    pub overlay_title_fg: String,
}

impl Theme {
    /// Loads a bundled theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            LIGHT_THEME => include_str!("../../themes/catppuccin-latte.toml"),
            DARK_THEME => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme = name, error = %e, "bundled theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| UserdeckError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| UserdeckError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// The bundled theme of the opposite brightness.
    #[must_use]
    pub fn toggled(&self) -> Self {
        let target = if self.dark { LIGHT_THEME } else { DARK_THEME };
        Self::from_name(target).unwrap_or_else(|| self.clone())
    }

    /// Plain theme used if the bundled files are unusable.
    fn fallback() -> Self {
        let white = "#ffffff".to_string();
        let black = "#000000".to_string();
        let grey = "#808080".to_string();
        Self {
            name: "fallback".to_string(),
            dark: false,
            colors: ThemeColors {
                header_fg: black.clone(),
                header_bg: None,
                selection_fg: white.clone(),
                selection_bg: black.clone(),
                text_normal: black.clone(),
                text_dim: grey.clone(),
                border: grey.clone(),
                search_bar_border: grey,
                match_highlight_fg: black.clone(),
                match_highlight_bg: "#ffff00".to_string(),
                empty_state_fg: black.clone(),
                error_fg: "#ff0000".to_string(),
                overlay_border: black.clone(),
                overlay_title_fg: black,
            },
        }
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(LIGHT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        let light = Theme::from_name(LIGHT_THEME).unwrap();
        let dark = Theme::from_name(DARK_THEME).unwrap();
        assert!(!light.dark);
        assert!(dark.dark);
        assert_eq!(Theme::default(), light);
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn toggle_switches_brightness() {
        let light = Theme::default();
        let dark = light.toggled();
        assert_eq!(dark.name, DARK_THEME);
        assert_eq!(dark.toggled().name, LIGHT_THEME);
    }

    #[test]
    fn hex_colors_become_escapes() {
        assert_eq!(Theme::fg("#1e66f5"), "\u{1b}[38;2;30;102;245m");
        assert_eq!(Theme::bg("ffffff"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".into();
        theme.dark = true;
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_file(&path).unwrap();
        assert_eq!(loaded, theme);
        assert_eq!(loaded.toggled().name, LIGHT_THEME);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(UserdeckError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("absent.toml")),
            Err(UserdeckError::Theme(_))
        ));
    }
}
