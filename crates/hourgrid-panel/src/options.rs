//! Panel options and their declarative schema.

use serde::{Deserialize, Serialize};

/// Slider range for the gradient exponent.
pub const EXPONENT_MIN: f64 = 0.1;
/// Upper bound of the gradient exponent slider.
pub const EXPONENT_MAX: f64 = 5.0;

/// User-configurable options for the hourly heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapOptions {
    /// Palette color name for cells
    pub color: String,
    /// Free-text label shown in the tooltip
    pub label: String,
    /// Gradient curve shape; 1.0 is linear
    pub exponent: f64,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            label: "Items".to_string(),
            exponent: 1.0,
        }
    }
}

impl HeatmapOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette color name.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the tooltip label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the gradient exponent, clamped to the slider range [0.1, 5.0].
    #[must_use]
    pub fn exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent.clamp(EXPONENT_MIN, EXPONENT_MAX);
        self
    }
}

/// The kind of control the host renders for an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionControl {
    /// Palette color picker
    ColorPicker {
        /// Default color name
        default: &'static str,
    },
    /// Free-text input
    TextInput {
        /// Default text
        default: &'static str,
    },
    /// Numeric slider
    Slider {
        /// Default value
        default: f64,
        /// Minimum value
        min: f64,
        /// Maximum value
        max: f64,
        /// Step size
        step: f64,
    },
}

/// One entry in the panel's option schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Field path within [`HeatmapOptions`]
    pub path: &'static str,
    /// Display name in the options editor
    pub name: &'static str,
    /// Control to render
    pub control: OptionControl,
}

/// The option schema the host options editor consumes.
#[must_use]
pub fn option_defs() -> Vec<OptionDef> {
    vec![
        OptionDef {
            path: "color",
            name: "Colour",
            control: OptionControl::ColorPicker { default: "blue" },
        },
        OptionDef {
            path: "label",
            name: "Label",
            control: OptionControl::TextInput { default: "Items" },
        },
        OptionDef {
            path: "exponent",
            name: "Gradient exponent",
            control: OptionControl::Slider {
                default: 1.0,
                min: EXPONENT_MIN,
                max: EXPONENT_MAX,
                step: 0.1,
            },
        },
    ]
}
