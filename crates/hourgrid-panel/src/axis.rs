//! Axis enumerations and label formatting for the hourly heatmap grid.
//!
//! The grid axes are fixed: 7 days (0 = Monday) down the side, 24 hours
//! across the bottom. Incoming rows carry the day/hour as plain numbers and
//! are mapped onto the grid by exact equality against these enumerations.

/// Valid day values, in grid row order (0 = Monday).
pub const DAY_VALUES: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// Valid hour values, in grid column order.
pub const HOUR_VALUES: [f64; 24] = [
    0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
    17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0,
];

/// Display labels for the day axis, indexed by day value.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Find the grid position of a value within an axis enumeration.
///
/// Linear search for the first exact numeric match. Returns `None` when the
/// value is not a member of the axis; callers drop such rows rather than
/// placing a cell off-grid.
#[must_use]
pub fn axis_index(value: f64, axis: &[f64]) -> Option<usize> {
    axis.iter().position(|&v| v == value)
}

/// Get the display label for a day value.
///
/// Only exact integral values in 0..=6 have labels; anything else passes
/// through unlabeled.
#[must_use]
pub fn day_label(day: f64) -> Option<&'static str> {
    axis_index(day, &DAY_VALUES).map(|i| DAY_LABELS[i])
}

/// Format an hour on a 12-hour clock: `12am, 1am, ..., 12pm, ..., 11pm`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour < 12 { "am" } else { "pm" };
    format!("{twelve}{suffix}")
}

/// Format the hour range covered by a cell, e.g. `"1am - 2am"`.
///
/// The end of the last hour wraps: 23 formats as `"11pm - 12am"`.
#[must_use]
pub fn hour_range_label(hour: u32) -> String {
    format!("{} - {}", hour_label(hour), hour_label((hour + 1) % 24))
}
