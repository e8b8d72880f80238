//! Source records as seen by the translation.
//!
//! The shapefile reader lives outside this crate; it only has to expose a
//! field lookup by name and a value accessor by position.

use geo_types::Geometry;
use std::collections::HashMap;
use std::fmt;

/// Attribute value of a source field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    String(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(val) => write!(f, "{val}"),
            FieldValue::Real(val) => write!(f, "{val}"),
            FieldValue::String(val) => f.write_str(val),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// Read access to one feature of the source layer.
pub trait SourceRecord {
    /// Position of `name` in the record's field schema.
    fn field_index(&self, name: &str) -> Option<usize>;

    fn field(&self, index: usize) -> Option<&FieldValue>;
}

/// An owned feature: ordered fields plus an optional geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeFeature {
    names: Vec<String>,
    values: Vec<FieldValue>,
    pub geometry: Option<Geometry<f64>>,
}

impl ShapeFeature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(geometry: Geometry<f64>) -> Self {
        Self {
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    /// Append a field, or replace the value if the name already exists.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.field_index(name) {
            Some(index) => self.values[index] = value,
            None => {
                self.names.push(name.to_string());
                self.values.push(value);
            }
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.field_index(name).and_then(|index| self.values.get(index))
    }

    /// Every field rendered as a string, the shape the tag mapper consumes.
    pub fn attributes(&self) -> HashMap<String, String> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }
}

impl SourceRecord for ShapeFeature {
    fn field_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    fn field(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn set_field_replaces_existing_value() {
        let mut feature = ShapeFeature::new().with_field("RABA_ID", 1100);
        feature.set_field("RABA_ID", 1300);

        assert_eq!(feature.field_names().count(), 1);
        assert_eq!(feature.value("RABA_ID"), Some(&FieldValue::Integer(1300)));
    }

    #[test]
    fn field_index_follows_insertion_order() {
        let feature = ShapeFeature::new()
            .with_field("RABA_PID", 42)
            .with_field("RABA_ID", 1100)
            .with_field("VIR", "DOF");

        assert_eq!(feature.field_index("RABA_PID"), Some(0));
        assert_eq!(feature.field_index("VIR"), Some(2));
        assert_eq!(feature.field_index("AREA"), None);
        assert_eq!(feature.field(1), Some(&FieldValue::Integer(1100)));
        assert_eq!(feature.field(3), None);
    }

    #[test]
    fn attributes_render_values_as_strings() {
        let feature = ShapeFeature::with_geometry(Geometry::Point(Point::new(14.5, 46.0)))
            .with_field("RABA_ID", 1100)
            .with_field("AREA", 1523.5)
            .with_field("D_OD", "2014-03-01");

        let attrs = feature.attributes();
        assert_eq!(attrs["RABA_ID"], "1100");
        assert_eq!(attrs["AREA"], "1523.5");
        assert_eq!(attrs["D_OD"], "2014-03-01");
        assert!(feature.geometry.is_some());
    }
}
