//! Input validation for the heatmap data shape.
//!
//! Validation runs before any indexing or normalization. Each failure mode
//! is a distinct [`DataError`] variant so a host can render an appropriate
//! empty-state message.

use hourgrid_core::PanelData;

/// A malformed-input condition. Non-fatal: the panel renders the error's
/// `Display` text as an empty state and recovers on the next render once
/// the input is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No frames were supplied at all
    NoSeries,
    /// More than one frame was supplied; the heatmap takes exactly one
    MultipleSeries {
        /// Number of frames supplied
        count: usize,
    },
    /// A required numeric column is absent (or present but non-numeric)
    FieldNotFound {
        /// The missing column name
        name: &'static str,
    },
    /// The day/hour/value columns are not all the same length
    LengthMismatch,
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSeries => write!(f, "No data"),
            Self::MultipleSeries { count } => {
                write!(f, "Only one series allowed, got {count}")
            }
            Self::FieldNotFound { name } => write!(f, "Field '{name}' not found"),
            Self::LengthMismatch => write!(f, "Fields 'day', 'hour' and 'value' differ in length"),
        }
    }
}

impl std::error::Error for DataError {}

/// Borrowed views of the three validated columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapSource<'a> {
    /// Day values (expected 0..=6)
    pub day: &'a [f64],
    /// Hour values (expected 0..=23)
    pub hour: &'a [f64],
    /// Raw measurements
    pub value: &'a [f64],
}

impl HeatmapSource<'_> {
    /// Number of observations.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.value.len()
    }
}

/// Validate the supplied data against the heatmap's expected shape.
///
/// Succeeds only for exactly one frame containing numeric `hour`, `day`
/// and `value` columns of equal length. Checks run in a fixed order so the
/// reported error is deterministic when several things are wrong at once.
pub fn validate(data: &PanelData) -> Result<HeatmapSource<'_>, DataError> {
    let frame = match data.frames() {
        [] => return Err(DataError::NoSeries),
        [frame] => frame,
        frames => {
            return Err(DataError::MultipleSeries {
                count: frames.len(),
            })
        }
    };

    let hour = frame
        .number_field("hour")
        .ok_or(DataError::FieldNotFound { name: "hour" })?;
    let day = frame
        .number_field("day")
        .ok_or(DataError::FieldNotFound { name: "day" })?;
    let value = frame
        .number_field("value")
        .ok_or(DataError::FieldNotFound { name: "value" })?;

    if day.len() != value.len() || hour.len() != value.len() {
        return Err(DataError::LengthMismatch);
    }

    Ok(HeatmapSource { day, hour, value })
}
