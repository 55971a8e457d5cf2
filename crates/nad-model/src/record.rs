use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::ids::RecordId;
use crate::value::FieldValue;

static NULL: FieldValue = FieldValue::Null;

/// One row of the working dataset.
///
/// Fields are addressed by name. Absent fields read as [`FieldValue::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: RecordId,
    pub geometry: Option<Point>,
    fields: BTreeMap<String, FieldValue>,
}

impl AddressRecord {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            geometry: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_geometry(mut self, point: Point) -> Self {
        self.geometry = Some(point);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Whether the field is part of this record's schema (it may still be null).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Non-blank trimmed text of a field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).as_trimmed()
    }

    /// Write a field, returning true when the stored value changed.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        let value = value.into();
        match self.fields.get_mut(name) {
            Some(current) if *current == value => false,
            Some(current) => {
                *current = value;
                true
            }
            None => {
                self.fields.insert(name.to_string(), value);
                true
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
