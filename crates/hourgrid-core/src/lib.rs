//! Core types and traits for Hourgrid dashboard panels.
//!
//! This crate provides the host-framework contract a panel consumes:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The [`Widget`] and [`Canvas`] traits, plus a [`RecordingCanvas`]
//!   for testing what a widget painted
//! - Column-oriented data frames: [`Field`], [`Frame`], [`PanelData`]
//! - Theming: [`Theme`] with a named [`VisualizationPalette`]

mod canvas;
mod color;
mod constraints;
mod event;
mod frame;
mod geometry;
mod theme;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas, StrokeStyle};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, MouseButton};
pub use frame::{Field, FieldType, FieldValues, Frame, PanelData};
pub use geometry::{Point, Rect, Size};
pub use theme::{ColorPalette, Theme, VisualizationPalette};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};

#[cfg(test)]
mod tests {
    use super::*;

    mod color_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
                let c = Color::new(r, g, b, a);
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.g >= 0.0 && c.g <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
                prop_assert!(c.a >= 0.0 && c.a <= 1.0);
            }

            #[test]
            fn prop_with_alpha_preserves_hue(r in 0.0f32..1.0, g in 0.0f32..1.0, b in 0.0f32..1.0, a in -1.0f32..2.0) {
                let c = Color::rgb(r, g, b).with_alpha(a);
                prop_assert_eq!(c.r, r);
                prop_assert_eq!(c.g, g);
                prop_assert_eq!(c.b, b);
                prop_assert!(c.a >= 0.0 && c.a <= 1.0);
            }

            #[test]
            fn prop_hex_roundtrip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                let c = Color::from_hex(&hex).expect("valid hex");
                prop_assert_eq!(c.to_hex(), hex);
            }
        }
    }

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_rect_area_non_negative(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, w in 0.0f32..1000.0, h in 0.0f32..1000.0) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.size().area() >= 0.0);
            }

            #[test]
            fn prop_rect_contains_center(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, w in 1.0f32..1000.0, h in 1.0f32..1000.0) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.contains_point(&r.center()));
            }
        }
    }

    mod constraints_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_constrain_stays_within_bounds(
                min_w in 0.0f32..100.0, extra_w in 0.0f32..400.0,
                min_h in 0.0f32..100.0, extra_h in 0.0f32..400.0,
                w in -100.0f32..1000.0, h in -100.0f32..1000.0
            ) {
                let c = Constraints::new(min_w, min_w + extra_w, min_h, min_h + extra_h);
                let s = c.constrain(Size::new(w, h));
                prop_assert!(s.width >= c.min_width && s.width <= c.max_width);
                prop_assert!(s.height >= c.min_height && s.height <= c.max_height);
            }
        }
    }
}
