//! Hourly heatmap panel.
//!
//! A 7×24 grid of cells (one per day-of-week and hour-of-day) whose opacity
//! encodes a normalized measurement. Data arrives as one frame with numeric
//! `day`, `hour` and `value` columns; malformed input renders as an
//! empty-state message rather than a crash.
//!
//! # Example
//!
//! ```
//! use hourgrid_core::{Field, Frame, PanelData, RecordingCanvas, Rect, Widget};
//! use hourgrid_panel::{HeatmapOptions, HourlyHeatmap};
//!
//! let data = PanelData::new().frame(
//!     Frame::new()
//!         .field(Field::number("day", vec![0.0, 1.0]))
//!         .field(Field::number("hour", vec![9.0, 17.0]))
//!         .field(Field::number("value", vec![3.0, 12.0])),
//! );
//!
//! let mut panel = HourlyHeatmap::new()
//!     .options(HeatmapOptions::new().label("Logins"))
//!     .data(data);
//! panel.layout(Rect::new(0.0, 0.0, 800.0, 400.0));
//!
//! let mut canvas = RecordingCanvas::new();
//! panel.paint(&mut canvas);
//! assert_eq!(canvas.filled_rect_count(), 2);
//! ```

pub mod axis;
pub mod labels;
pub mod options;
pub mod panel;
pub mod scale;
pub mod tooltip;
pub mod validate;

pub use axis::{axis_index, day_label, hour_label, hour_range_label, DAY_LABELS, DAY_VALUES, HOUR_VALUES};
pub use labels::{hour_label_stride, is_hour_labeled};
pub use options::{option_defs, HeatmapOptions, OptionControl, OptionDef, EXPONENT_MAX, EXPONENT_MIN};
pub use panel::{CellHovered, HeatmapCell, HourlyHeatmap, DAY_LABEL_WIDTH, HOUR_LABEL_HEIGHT};
pub use scale::IntensityScale;
pub use tooltip::{CellTooltip, TooltipBox};
pub use validate::{validate, DataError, HeatmapSource};
