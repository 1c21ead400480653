//! Hover tooltip for heatmap cells.

use hourgrid_core::{
    widget::{FontWeight, TextStyle},
    Canvas, Point, Rect, Size, Theme,
};
use serde::{Deserialize, Serialize};

use crate::axis::{day_label, hour_range_label};

/// The payload shown when hovering a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellTooltip {
    /// Heading line, e.g. `"Mon, 1am - 2am"`
    pub heading: String,
    /// Configured label text
    pub label: String,
    /// Raw (non-normalized) value
    pub value: f64,
}

impl CellTooltip {
    /// Build the tooltip payload for a cell.
    ///
    /// Days outside the labeled range fall back to their numeric form, so
    /// the heading never goes missing entirely.
    #[must_use]
    pub fn new(day: f64, hour: u32, label: impl Into<String>, value: f64) -> Self {
        let day_text = day_label(day).map_or_else(|| day.to_string(), str::to_string);
        Self {
            heading: format!("{day_text}, {}", hour_range_label(hour)),
            label: label.into(),
            value,
        }
    }

    /// Second line: label and value.
    #[must_use]
    pub fn body(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Paints a [`CellTooltip`] as a small floating box above its anchor.
#[derive(Debug, Clone)]
pub struct TooltipBox {
    text_size: f32,
    padding: f32,
    gap: f32,
}

impl Default for TooltipBox {
    fn default() -> Self {
        Self {
            text_size: 12.0,
            padding: 8.0,
            gap: 6.0,
        }
    }
}

impl TooltipBox {
    /// Create a tooltip box with default styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate rendered text width from character count.
    fn estimate_text_width(&self, text: &str) -> f32 {
        let char_width = self.text_size * 0.6;
        text.len() as f32 * char_width
    }

    /// Compute the box size for a tooltip payload.
    #[must_use]
    pub fn measure(&self, tooltip: &CellTooltip) -> Size {
        let content_width = self
            .estimate_text_width(&tooltip.heading)
            .max(self.estimate_text_width(&tooltip.body()));
        // Heading, separator gap, body line.
        let content_height = 2.0 * self.text_size * 1.4 + self.gap;
        Size::new(
            content_width + 2.0 * self.padding,
            content_height + 2.0 * self.padding,
        )
    }

    /// Position the box above the anchor, clamped into the panel bounds.
    #[must_use]
    pub fn position(&self, anchor: Rect, size: Size, bounds: Rect) -> Point {
        let x = anchor.x + (anchor.width - size.width) / 2.0;
        let mut y = anchor.y - size.height - self.gap;
        if y < bounds.y {
            // No room above; flip below the anchor.
            y = anchor.y + anchor.height + self.gap;
        }
        let max_x = bounds.x + bounds.width - size.width;
        Point::new(x.clamp(bounds.x, max_x.max(bounds.x)), y)
    }

    /// Paint the tooltip box, heading and body.
    pub fn paint(
        &self,
        canvas: &mut dyn Canvas,
        tooltip: &CellTooltip,
        anchor: Rect,
        bounds: Rect,
        theme: &Theme,
    ) {
        let size = self.measure(tooltip);
        let origin = self.position(anchor, size, bounds);
        let frame = Rect::new(origin.x, origin.y, size.width, size.height);

        canvas.fill_rect(frame, theme.colors.surface);
        canvas.stroke_rect(frame, theme.colors.border_weak, 1.0);

        let heading_style = TextStyle {
            size: self.text_size,
            color: theme.colors.text,
            weight: FontWeight::Medium,
            ..TextStyle::default()
        };
        let body_style = TextStyle {
            size: self.text_size,
            color: theme.colors.text,
            ..TextStyle::default()
        };

        let heading_baseline = Point::new(
            frame.x + self.padding,
            frame.y + self.padding + self.text_size,
        );
        canvas.draw_text(&tooltip.heading, heading_baseline, &heading_style);

        // Separator under the heading.
        let sep_y = heading_baseline.y + self.gap / 2.0;
        canvas.draw_line(
            Point::new(frame.x + self.padding, sep_y),
            Point::new(frame.x + frame.width - self.padding, sep_y),
            theme.colors.border_weak,
            1.0,
        );

        let body_baseline = Point::new(frame.x + self.padding, sep_y + self.gap / 2.0 + self.text_size);
        canvas.draw_text(&tooltip.body(), body_baseline, &body_style);
    }
}
