//! Column-oriented data frames supplied by the host data pipeline.
//!
//! A [`Frame`] is a set of named, typed columns ([`Field`]s). Panels receive
//! a [`PanelData`] holding zero or more frames and are expected to validate
//! the shape themselves before rendering.

use serde::{Deserialize, Serialize};

/// The declared type of a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Numeric values
    Number,
    /// Text values
    Text,
}

/// The values stored in a field, matching its [`FieldType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValues {
    /// Numeric column
    Number(Vec<f64>),
    /// Text column
    Text(Vec<String>),
}

/// A named, typed column of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    values: FieldValues,
}

impl Field {
    /// Create a numeric field.
    #[must_use]
    pub fn number(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Number(values.into()),
        }
    }

    /// Create a text field.
    #[must_use]
    pub fn text(name: impl Into<String>, values: impl Into<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Text(values.into()),
        }
    }

    /// Get the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the field type.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self.values {
            FieldValues::Number(_) => FieldType::Number,
            FieldValues::Text(_) => FieldType::Text,
        }
    }

    /// Get the number of values in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.values {
            FieldValues::Number(v) => v.len(),
            FieldValues::Text(v) => v.len(),
        }
    }

    /// Check if the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the numeric values, if this is a numeric field.
    #[must_use]
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match &self.values {
            FieldValues::Number(v) => Some(v),
            FieldValues::Text(_) => None,
        }
    }
}

/// A column-oriented table of named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    name: Option<String>,
    fields: Vec<Field>,
}

impl Frame {
    /// Create a new empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Get the frame name.
    #[must_use]
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get all fields.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find the first field with the given name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find the first numeric field with the given name.
    ///
    /// A field whose name matches but whose type is not numeric does not
    /// count; this mirrors the host contract of "named AND numeric".
    #[must_use]
    pub fn number_field(&self, name: &str) -> Option<&[f64]> {
        self.fields
            .iter()
            .find(|f| f.name == name && f.field_type() == FieldType::Number)
            .and_then(Field::as_numbers)
    }
}

/// The set of frames handed to a panel for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelData {
    frames: Vec<Frame>,
}

impl PanelData {
    /// Create an empty data set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame.
    #[must_use]
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Get all frames.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get the number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_number() {
        let f = Field::number("value", vec![1.0, 2.0, 3.0]);
        assert_eq!(f.name(), "value");
        assert_eq!(f.field_type(), FieldType::Number);
        assert_eq!(f.len(), 3);
        assert_eq!(f.as_numbers(), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_field_text() {
        let f = Field::text("labels", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(f.field_type(), FieldType::Text);
        assert_eq!(f.len(), 2);
        assert!(f.as_numbers().is_none());
    }

    #[test]
    fn test_field_is_empty() {
        assert!(Field::number("value", Vec::new()).is_empty());
        assert!(!Field::number("value", vec![0.0]).is_empty());
    }

    #[test]
    fn test_frame_field_by_name() {
        let frame = Frame::new()
            .field(Field::number("hour", vec![0.0]))
            .field(Field::number("value", vec![1.0]));
        assert!(frame.field_by_name("hour").is_some());
        assert!(frame.field_by_name("day").is_none());
    }

    #[test]
    fn test_frame_number_field_requires_numeric_type() {
        let frame = Frame::new().field(Field::text("hour", vec!["1".to_string()]));
        assert!(frame.field_by_name("hour").is_some());
        assert!(frame.number_field("hour").is_none());
    }

    #[test]
    fn test_frame_number_field_first_match() {
        let frame = Frame::new()
            .field(Field::number("value", vec![1.0]))
            .field(Field::number("value", vec![2.0]));
        assert_eq!(frame.number_field("value"), Some(&[1.0][..]));
    }

    #[test]
    fn test_frame_name() {
        let frame = Frame::new().name("series-a");
        assert_eq!(frame.get_name(), Some("series-a"));
    }

    #[test]
    fn test_panel_data_frames() {
        let data = PanelData::new().frame(Frame::new()).frame(Frame::new());
        assert_eq!(data.frame_count(), 2);
        assert_eq!(data.frames().len(), 2);
    }

    #[test]
    fn test_panel_data_empty() {
        assert_eq!(PanelData::new().frame_count(), 0);
    }

    #[test]
    fn test_frame_serialization() {
        let frame = Frame::new()
            .name("observations")
            .field(Field::number("day", vec![0.0, 1.0]));
        let json = serde_json::to_string(&frame).expect("serialize");
        let restored: Frame = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(frame, restored);
    }
}
