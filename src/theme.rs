//! Theme support for the catalog browser
//!
//! Built-in color schemes (Light, Dark, Dracula) and a manager that applies
//! them to egui visuals.
//!
//! # Examples
//!
//! ```
//! use rcatalog::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Card fill: {:?}", dracula.colors.card_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette used by catalog panels and cards
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub panel_background: Color32,
    pub extreme_background: Color32,

    pub card_background: Color32,
    pub card_border: Color32,
    /// Fill of a placeholder that has not been turned into a card yet
    pub placeholder: Color32,

    pub text: Color32,
    pub text_dim: Color32,
    pub title: Color32,
    pub sku: Color32,
    pub label: Color32,

    pub accent: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub error: Color32,
    pub success: Color32,
    pub toast_background: Color32,
}

/// A named theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Returns the named theme, falling back to Dark for unknown names
    pub fn get_theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get("Dark"))
            .expect("built-in Dark theme is always registered")
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme close to egui defaults".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(246, 246, 246),
            extreme_background: Color32::from_rgb(255, 255, 255),

            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(204, 204, 204),
            placeholder: Color32::from_rgb(236, 236, 236),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(110, 110, 110),
            title: Color32::from_rgb(0, 0, 0),
            sku: Color32::from_rgb(102, 102, 102),
            label: Color32::from_rgb(60, 60, 60),

            accent: Color32::from_rgb(40, 100, 200),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(222, 222, 222),
            error: Color32::from_rgb(200, 40, 40),
            success: Color32::from_rgb(40, 150, 60),
            toast_background: Color32::from_rgb(50, 50, 50),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme close to egui defaults".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(32, 32, 32),
            extreme_background: Color32::from_rgb(16, 16, 16),

            card_background: Color32::from_rgb(44, 44, 44),
            card_border: Color32::from_rgb(70, 70, 70),
            placeholder: Color32::from_rgb(38, 38, 38),

            text: Color32::from_rgb(230, 230, 230),
            text_dim: Color32::from_rgb(150, 150, 150),
            title: Color32::from_rgb(255, 255, 255),
            sku: Color32::from_rgb(149, 165, 166),
            label: Color32::from_rgb(190, 190, 190),

            accent: Color32::from_rgb(52, 152, 219),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(64, 64, 64),
            error: Color32::from_rgb(231, 76, 60),
            success: Color32::from_rgb(46, 204, 113),
            toast_background: Color32::from_rgb(60, 60, 60),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            card_background: hex_to_color32("#343746"),
            card_border: hex_to_color32("#6272a4"),
            placeholder: hex_to_color32("#2c2e3b"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            title: hex_to_color32("#f8f8f2"),
            sku: hex_to_color32("#8be9fd"),
            label: hex_to_color32("#bd93f9"),

            accent: hex_to_color32("#ff79c6"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            error: hex_to_color32("#ff5555"),
            success: hex_to_color32("#50fa7b"),
            toast_background: hex_to_color32("#44475a"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let manager = ThemeManager::new();
        assert_eq!(manager.get_theme_or_default("Solarized").name, "Dark");
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }
}
