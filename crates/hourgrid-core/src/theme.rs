//! Theme system for consistent styling.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A color palette for theming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Primary brand color
    pub primary: Color,
    /// Background color
    pub background: Color,
    /// Surface color (cards, tooltips)
    pub surface: Color,
    /// Primary text color
    pub text: Color,
    /// Muted text color (axis labels)
    pub text_muted: Color,
    /// Weak border color (separators)
    pub border_weak: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Create a light color palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::new(0.2, 0.47, 0.96, 1.0),
            background: Color::new(0.98, 0.98, 0.98, 1.0),
            surface: Color::WHITE,
            text: Color::new(0.13, 0.13, 0.13, 1.0),
            text_muted: Color::new(0.13, 0.13, 0.13, 0.6),
            border_weak: Color::new(0.0, 0.0, 0.0, 0.12),
        }
    }

    /// Create a dark color palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::new(0.51, 0.71, 1.0, 1.0),
            background: Color::new(0.07, 0.07, 0.07, 1.0),
            surface: Color::new(0.14, 0.14, 0.14, 1.0),
            text: Color::new(0.9, 0.9, 0.9, 1.0),
            text_muted: Color::new(0.9, 0.9, 0.9, 0.6),
            border_weak: Color::new(1.0, 1.0, 1.0, 0.12),
        }
    }
}

/// The named hues available to visualizations.
///
/// Panels let users pick a palette color by name ("blue", "red", ...);
/// [`VisualizationPalette::color_by_name`] resolves the name to a concrete
/// color for the active theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationPalette {
    /// Blue hue
    pub blue: Color,
    /// Red hue
    pub red: Color,
    /// Green hue
    pub green: Color,
    /// Orange hue
    pub orange: Color,
    /// Purple hue
    pub purple: Color,
    /// Yellow hue
    pub yellow: Color,
    /// Fallback for unknown names
    pub fallback: Color,
}

impl Default for VisualizationPalette {
    fn default() -> Self {
        Self {
            blue: Color::new(0.2, 0.47, 0.96, 1.0),
            red: Color::new(0.88, 0.25, 0.25, 1.0),
            green: Color::new(0.22, 0.66, 0.37, 1.0),
            orange: Color::new(0.96, 0.59, 0.11, 1.0),
            purple: Color::new(0.58, 0.35, 0.85, 1.0),
            yellow: Color::new(0.95, 0.82, 0.2, 1.0),
            fallback: Color::new(0.5, 0.5, 0.5, 1.0),
        }
    }
}

impl VisualizationPalette {
    /// Resolve a color name to a palette color.
    ///
    /// Named hues are matched first; a hex string ("#40a0ff") is parsed as
    /// a literal color; anything else resolves to the fallback gray.
    #[must_use]
    pub fn color_by_name(&self, name: &str) -> Color {
        match name {
            "blue" => self.blue,
            "red" => self.red,
            "green" => self.green,
            "orange" => self.orange,
            "purple" => self.purple,
            "yellow" => self.yellow,
            other => Color::from_hex(other).unwrap_or(self.fallback),
        }
    }
}

/// Complete theme definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color palette
    pub colors: ColorPalette,
    /// Visualization hues
    pub visualization: VisualizationPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ColorPalette::light(),
            visualization: VisualizationPalette::default(),
        }
    }

    /// Create a dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ColorPalette::dark(),
            visualization: VisualizationPalette::default(),
        }
    }

    /// Create a theme with custom colors.
    #[must_use]
    pub fn with_colors(mut self, colors: ColorPalette) -> Self {
        self.colors = colors;
        self
    }
}
