//! Hour-label decimation policy.
//!
//! At narrow widths 24 hour labels overlap, so the panel thins them out
//! with a fixed stride chosen from three breakpoints.

/// Choose the label stride for a rendered pixel width.
///
/// Strictly greater-than comparisons: a width of exactly 780 uses stride 2,
/// exactly 480 uses stride 3.
#[must_use]
pub fn hour_label_stride(width: f32) -> usize {
    if width > 780.0 {
        1
    } else if width > 480.0 {
        2
    } else {
        3
    }
}

/// Whether the hour label at `index` (0..23) is shown for a given stride.
#[must_use]
pub const fn is_hour_labeled(index: usize, stride: usize) -> bool {
    index % stride == 0
}
