//! The hourly heatmap panel widget.
//!
//! Renders a 7×24 grid (days down the side, hours across the bottom) where
//! each supplied observation becomes one cell whose opacity encodes its
//! normalized value. Everything is recomputed from the current data and
//! options on every render pass; nothing is cached across renders.

use hourgrid_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Constraints, Event, PanelData, Point, Rect, Size, Theme, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::axis::{axis_index, hour_label, DAY_LABELS, DAY_VALUES, HOUR_VALUES};
use crate::labels::{hour_label_stride, is_hour_labeled};
use crate::options::HeatmapOptions;
use crate::scale::IntensityScale;
use crate::tooltip::{CellTooltip, TooltipBox};
use crate::validate::{validate, DataError};

/// Width of the day-label column on the left.
pub const DAY_LABEL_WIDTH: f32 = 32.0;
/// Height of the hour-label row at the bottom.
pub const HOUR_LABEL_HEIGHT: f32 = 25.0;

/// One renderable cell, derived per render from one input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Grid row index (0..=6, day order)
    pub row: usize,
    /// Grid column index (0..=23, hour order)
    pub column: usize,
    /// Raw day value
    pub day: f64,
    /// Raw hour value
    pub hour: f64,
    /// Raw measurement
    pub value: f64,
    /// Normalized opacity
    pub opacity: f64,
}

impl HeatmapCell {
    /// The 1-based grid row slot; track 1 is reserved for axis labels.
    #[must_use]
    pub const fn grid_row(&self) -> usize {
        self.row + 2
    }

    /// The 1-based grid column slot; track 1 is reserved for axis labels.
    #[must_use]
    pub const fn grid_column(&self) -> usize {
        self.column + 2
    }
}

/// Message emitted when the hovered cell changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHovered {
    /// Hovered grid row (0..=6)
    pub row: usize,
    /// Hovered grid column (0..=23)
    pub column: usize,
}

/// The hourly heatmap panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyHeatmap {
    /// Panel options
    options: HeatmapOptions,
    /// Data for the current render
    data: PanelData,
    /// Active theme
    theme: Theme,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Currently hovered (row, column), if any
    #[serde(skip)]
    hovered: Option<(usize, usize)>,
}

impl Default for HourlyHeatmap {
    fn default() -> Self {
        Self {
            options: HeatmapOptions::default(),
            data: PanelData::new(),
            theme: Theme::default(),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            hovered: None,
        }
    }
}

impl HourlyHeatmap {
    /// Create a new panel with default options and no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel options.
    #[must_use]
    pub fn options(mut self, options: HeatmapOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the data for the next render.
    #[must_use]
    pub fn data(mut self, data: PanelData) -> Self {
        self.data = data;
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the panel options.
    #[must_use]
    pub const fn get_options(&self) -> &HeatmapOptions {
        &self.options
    }

    /// Get the currently hovered (row, column), if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<(usize, usize)> {
        self.hovered
    }

    /// Compute the cell descriptors for the current data and options.
    ///
    /// Validates the data shape, runs one max pass over the value column,
    /// then maps each row onto the grid. Rows whose day or hour is not a
    /// member of the axis enumerations are dropped rather than placed
    /// off-grid.
    pub fn cells(&self) -> Result<Vec<HeatmapCell>, DataError> {
        let source = validate(&self.data)?;
        let scale = IntensityScale::from_values(source.value, self.options.exponent);

        let mut cells = Vec::with_capacity(source.row_count());
        for i in 0..source.row_count() {
            let (day, hour, value) = (source.day[i], source.hour[i], source.value[i]);
            let (Some(row), Some(column)) = (
                axis_index(day, &DAY_VALUES),
                axis_index(hour, &HOUR_VALUES),
            ) else {
                continue;
            };
            cells.push(HeatmapCell {
                row,
                column,
                day,
                hour,
                value,
                opacity: scale.opacity(value),
            });
        }
        Ok(cells)
    }

    /// The area holding data cells: bounds minus the label column and row.
    fn plot_area(&self) -> Rect {
        Rect::new(
            self.bounds.x + DAY_LABEL_WIDTH,
            self.bounds.y,
            (self.bounds.width - DAY_LABEL_WIDTH).max(0.0),
            (self.bounds.height - HOUR_LABEL_HEIGHT).max(0.0),
        )
    }

    /// Pixel rect for a grid cell.
    fn cell_rect(&self, row: usize, column: usize) -> Rect {
        let plot = self.plot_area();
        let cell_width = plot.width / HOUR_VALUES.len() as f32;
        let cell_height = plot.height / DAY_VALUES.len() as f32;
        Rect::new(
            plot.x + column as f32 * cell_width,
            plot.y + row as f32 * cell_height,
            cell_width,
            cell_height,
        )
    }

    /// Map a pointer position to a (row, column), if inside the plot area.
    fn hit_test(&self, position: Point) -> Option<(usize, usize)> {
        let plot = self.plot_area();
        if plot.width <= 0.0 || plot.height <= 0.0 || !plot.contains_point(&position) {
            return None;
        }
        let cell_width = plot.width / HOUR_VALUES.len() as f32;
        let cell_height = plot.height / DAY_VALUES.len() as f32;
        let column = (((position.x - plot.x) / cell_width) as usize).min(HOUR_VALUES.len() - 1);
        let row = (((position.y - plot.y) / cell_height) as usize).min(DAY_VALUES.len() - 1);
        Some((row, column))
    }

    /// The tooltip payload for the hovered cell, if a data cell is hovered.
    #[must_use]
    pub fn hovered_tooltip(&self) -> Option<CellTooltip> {
        let (row, column) = self.hovered?;
        let cells = self.cells().ok()?;
        let cell = cells
            .iter()
            .find(|c| c.row == row && c.column == column)?;
        Some(CellTooltip::new(
            cell.day,
            cell.hour as u32,
            self.options.label.clone(),
            cell.value,
        ))
    }

    /// Paint the empty-state message for malformed input.
    fn paint_empty_state(&self, canvas: &mut dyn Canvas, error: &DataError) {
        let style = TextStyle {
            size: 14.0,
            color: self.theme.colors.text_muted,
            ..TextStyle::default()
        };
        let message = error.to_string();
        // Rough horizontal centering from character count.
        let center = self.bounds.center();
        let x = center.x - message.len() as f32 * style.size * 0.3;
        canvas.draw_text(&message, Point::new(x.max(self.bounds.x), center.y), &style);
    }

    fn paint_axis_labels(&self, canvas: &mut dyn Canvas) {
        let plot = self.plot_area();
        let cell_width = plot.width / HOUR_VALUES.len() as f32;
        let cell_height = plot.height / DAY_VALUES.len() as f32;
        let style = TextStyle {
            size: 12.0,
            color: self.theme.colors.text_muted,
            ..TextStyle::default()
        };

        // Day labels, vertically centered on their row.
        for (i, label) in DAY_LABELS.iter().enumerate() {
            let y = plot.y + (i as f32 + 0.5) * cell_height + style.size / 2.0;
            canvas.draw_text(label, Point::new(self.bounds.x, y), &style);
        }

        // Hour labels, thinned by the stride policy for the full width.
        let stride = hour_label_stride(self.bounds.width);
        for i in 0..HOUR_VALUES.len() {
            if !is_hour_labeled(i, stride) {
                continue;
            }
            let x = plot.x + (i as f32 + 0.5) * cell_width;
            let y = plot.y + plot.height + style.size + 4.0;
            canvas.draw_text(&hour_label(i as u32), Point::new(x, y), &style);
        }
    }

    fn paint_cells(&self, canvas: &mut dyn Canvas, cells: &[HeatmapCell]) {
        let color = self.theme.visualization.color_by_name(&self.options.color);
        for cell in cells {
            let rect = self.cell_rect(cell.row, cell.column).inset(0.5);
            canvas.fill_rect(rect, color.with_alpha(cell.opacity as f32));
        }
    }

    fn paint_hover(&self, canvas: &mut dyn Canvas, cells: &[HeatmapCell]) {
        let Some((row, column)) = self.hovered else {
            return;
        };
        let Some(cell) = cells.iter().find(|c| c.row == row && c.column == column) else {
            return;
        };
        let rect = self.cell_rect(row, column);
        canvas.stroke_rect(rect, self.theme.colors.text, 1.0);

        let tooltip = CellTooltip::new(
            cell.day,
            cell.hour as u32,
            self.options.label.clone(),
            cell.value,
        );
        TooltipBox::new().paint(canvas, &tooltip, rect, self.bounds, &self.theme);
    }
}

impl Widget for HourlyHeatmap {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        // The panel fills whatever area the host allocates.
        constraints.biggest()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        match self.cells() {
            Err(error) => self.paint_empty_state(canvas, &error),
            Ok(cells) => {
                self.paint_axis_labels(canvas);
                self.paint_cells(canvas, &cells);
                self.paint_hover(canvas, &cells);
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseMove { position } => {
                let hit = self.hit_test(*position);
                if hit != self.hovered {
                    self.hovered = hit;
                    if let Some((row, column)) = hit {
                        return Some(Box::new(CellHovered { row, column }));
                    }
                }
                None
            }
            Event::MouseLeave => {
                self.hovered = None;
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hourgrid_core::{Field, Frame, MouseButton, RecordingCanvas};

    fn full_week_data() -> PanelData {
        let mut day = Vec::with_capacity(168);
        let mut hour = Vec::with_capacity(168);
        let mut value = Vec::with_capacity(168);
        for d in 0..7 {
            for h in 0..24 {
                day.push(f64::from(d));
                hour.push(f64::from(h));
                value.push(f64::from(d * 24 + h));
            }
        }
        PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", day))
                .field(Field::number("hour", hour))
                .field(Field::number("value", value)),
        )
    }

    fn laid_out(data: PanelData, width: f32, height: f32) -> HourlyHeatmap {
        let mut panel = HourlyHeatmap::new().data(data);
        panel.layout(Rect::new(0.0, 0.0, width, height));
        panel
    }

    #[test]
    fn test_cells_count_matches_rows() {
        let panel = HourlyHeatmap::new().data(full_week_data());
        let cells = panel.cells().expect("valid data");
        assert_eq!(cells.len(), 168);
    }

    #[test]
    fn test_cells_drop_out_of_range_rows() {
        let data = PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", vec![0.0, 7.0, 1.0]))
                .field(Field::number("hour", vec![0.0, 0.0, 24.0]))
                .field(Field::number("value", vec![1.0, 2.0, 3.0])),
        );
        let panel = HourlyHeatmap::new().data(data);
        let cells = panel.cells().expect("valid shape");
        // Only the first row has both axes in range.
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].row, 0);
        assert_eq!(cells[0].column, 0);
    }

    #[test]
    fn test_cells_grid_slots_offset_past_label_tracks() {
        let data = PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", vec![2.0]))
                .field(Field::number("hour", vec![5.0]))
                .field(Field::number("value", vec![1.0])),
        );
        let panel = HourlyHeatmap::new().data(data);
        let cells = panel.cells().expect("valid data");
        assert_eq!(cells[0].grid_row(), 4);
        assert_eq!(cells[0].grid_column(), 7);
    }

    #[test]
    fn test_cells_normalize_against_column_max() {
        let data = PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", vec![0.0, 0.0]))
                .field(Field::number("hour", vec![0.0, 1.0]))
                .field(Field::number("value", vec![5.0, 10.0])),
        );
        let panel = HourlyHeatmap::new().data(data);
        let cells = panel.cells().expect("valid data");
        assert_eq!(cells[0].opacity, 0.5);
        assert_eq!(cells[1].opacity, 1.0);
    }

    #[test]
    fn test_cells_all_zero_fully_transparent() {
        let data = PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", vec![0.0, 1.0]))
                .field(Field::number("hour", vec![0.0, 1.0]))
                .field(Field::number("value", vec![0.0, 0.0])),
        );
        let panel = HourlyHeatmap::new().data(data);
        for cell in panel.cells().expect("valid data") {
            assert_eq!(cell.opacity, 0.0);
        }
    }

    #[test]
    fn test_cells_idempotent() {
        let panel = HourlyHeatmap::new().data(full_week_data());
        let first = panel.cells().expect("valid data");
        let second = panel.cells().expect("valid data");
        assert_eq!(first, second);
    }

    #[test]
    fn test_paint_idempotent() {
        let panel = laid_out(full_week_data(), 800.0, 400.0);
        let mut first = RecordingCanvas::new();
        let mut second = RecordingCanvas::new();
        panel.paint(&mut first);
        panel.paint(&mut second);
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_paint_one_filled_rect_per_row() {
        let panel = laid_out(full_week_data(), 800.0, 400.0);
        let mut canvas = RecordingCanvas::new();
        panel.paint(&mut canvas);
        assert_eq!(canvas.filled_rect_count(), 168);
    }

    #[test]
    fn test_paint_empty_state_on_no_data() {
        let panel = laid_out(PanelData::new(), 800.0, 400.0);
        let mut canvas = RecordingCanvas::new();
        panel.paint(&mut canvas);
        assert_eq!(canvas.filled_rect_count(), 0);
        assert_eq!(canvas.text_runs(), vec!["No data"]);
    }

    #[test]
    fn test_paint_empty_state_on_missing_field() {
        let data = PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", vec![0.0]))
                .field(Field::number("hour", vec![0.0])),
        );
        let panel = laid_out(data, 800.0, 400.0);
        let mut canvas = RecordingCanvas::new();
        panel.paint(&mut canvas);
        assert_eq!(canvas.text_runs(), vec!["Field 'value' not found"]);
    }

    #[test]
    fn test_paint_day_labels_present() {
        let panel = laid_out(full_week_data(), 800.0, 400.0);
        let mut canvas = RecordingCanvas::new();
        panel.paint(&mut canvas);
        let texts = canvas.text_runs();
        for label in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
            assert!(texts.contains(&label), "missing day label {label}");
        }
    }

    #[test]
    fn test_paint_hour_label_decimation() {
        let count_hour_labels = |width: f32| {
            let panel = laid_out(full_week_data(), width, 400.0);
            let mut canvas = RecordingCanvas::new();
            panel.paint(&mut canvas);
            canvas
                .text_runs()
                .iter()
                .filter(|t| t.ends_with("am") || t.ends_with("pm"))
                .count()
        };
        assert_eq!(count_hour_labels(781.0), 24);
        assert_eq!(count_hour_labels(780.0), 12);
        assert_eq!(count_hour_labels(480.0), 8);
    }

    #[test]
    fn test_hover_emits_message_and_tooltip() {
        let mut panel = laid_out(full_week_data(), 832.0, 375.0);
        // Plot area starts at x=32; cells are 800/24 wide, 350/7 tall.
        let message = panel.event(&Event::MouseMove {
            position: Point::new(33.0, 1.0),
        });
        let hovered = message.expect("hover message");
        let hovered = hovered
            .downcast_ref::<CellHovered>()
            .expect("CellHovered message");
        assert_eq!((hovered.row, hovered.column), (0, 0));

        let tooltip = panel.hovered_tooltip().expect("tooltip for data cell");
        assert_eq!(tooltip.heading, "Mon, 12am - 1am");
    }

    #[test]
    fn test_hover_no_message_when_unchanged() {
        let mut panel = laid_out(full_week_data(), 832.0, 375.0);
        let position = Point::new(40.0, 10.0);
        assert!(panel.event(&Event::MouseMove { position }).is_some());
        assert!(panel.event(&Event::MouseMove { position }).is_none());
    }

    #[test]
    fn test_mouse_leave_clears_hover() {
        let mut panel = laid_out(full_week_data(), 832.0, 375.0);
        panel.event(&Event::MouseMove {
            position: Point::new(40.0, 10.0),
        });
        assert!(panel.hovered().is_some());
        panel.event(&Event::MouseLeave);
        assert!(panel.hovered().is_none());
        assert!(panel.hovered_tooltip().is_none());
    }

    #[test]
    fn test_hover_outside_plot_is_none() {
        let mut panel = laid_out(full_week_data(), 832.0, 375.0);
        // Inside the day-label column, left of the plot area.
        panel.event(&Event::MouseMove {
            position: Point::new(10.0, 10.0),
        });
        assert!(panel.hovered().is_none());
    }

    #[test]
    fn test_hover_empty_cell_has_no_tooltip() {
        let data = PanelData::new().frame(
            Frame::new()
                .field(Field::number("day", vec![0.0]))
                .field(Field::number("hour", vec![0.0]))
                .field(Field::number("value", vec![1.0])),
        );
        let mut panel = laid_out(data, 832.0, 375.0);
        // Hover the far corner; only (0, 0) holds data.
        panel.event(&Event::MouseMove {
            position: Point::new(830.0, 340.0),
        });
        assert!(panel.hovered().is_some());
        assert!(panel.hovered_tooltip().is_none());
    }

    #[test]
    fn test_event_ignores_clicks() {
        let mut panel = laid_out(full_week_data(), 832.0, 375.0);
        let message = panel.event(&Event::MouseDown {
            position: Point::new(40.0, 10.0),
            button: MouseButton::Left,
        });
        assert!(message.is_none());
    }

    #[test]
    fn test_measure_fills_constraints() {
        let panel = HourlyHeatmap::new();
        let size = panel.measure(Constraints::new(0.0, 800.0, 0.0, 600.0));
        assert_eq!(size, Size::new(800.0, 600.0));
    }

    #[test]
    fn test_widget_metadata() {
        let panel = HourlyHeatmap::new()
            .accessible_name("Weekly activity")
            .test_id("hourly-heatmap");
        assert_eq!(Widget::accessible_name(&panel), Some("Weekly activity"));
        assert_eq!(Widget::test_id(&panel), Some("hourly-heatmap"));
        assert_eq!(panel.accessible_role(), AccessibleRole::Image);
        assert!(panel.is_interactive());
        assert!(panel.children().is_empty());
    }

    #[test]
    fn test_layout_stores_bounds() {
        let mut panel = HourlyHeatmap::new();
        let bounds = Rect::new(10.0, 20.0, 500.0, 300.0);
        let result = panel.layout(bounds);
        assert_eq!(result.size, Size::new(500.0, 300.0));
        assert_eq!(Widget::bounds(&panel), bounds);
    }
}
