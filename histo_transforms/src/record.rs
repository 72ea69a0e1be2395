// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records: the rows of chart data.

extern crate alloc;

use alloc::string::String;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// An insertion-ordered map keyed by field or series name.
///
/// Iteration order is the order in which keys were first inserted (or appear in a JSON object),
/// which is what positional defaults such as palette colors are derived from.
pub type FieldMap<V> = IndexMap<String, V, DefaultHashBuilder>;

/// A single row of chart data: field name to numeric value.
///
/// Missing fields are simply absent. Non-finite values can be stored but read back as absent,
/// so downstream layouts never see `NaN`s. JSON `null` values are dropped on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: FieldMap<f64>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets `field` to `value`, keeping the field's original position if it already existed.
    pub fn insert(&mut self, field: impl Into<String>, value: f64) {
        self.fields.insert(field.into(), value);
    }

    /// Returns the value of `field` if present and finite.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied().filter(|v| v.is_finite())
    }

    /// Returns `true` if `field` holds a finite value.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over `(field, value)` pairs in insertion order, including non-finite values.
    pub fn fields(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = FieldMap::<Option<f64>>::deserialize(deserializer)?;
        Ok(raw.into_iter().filter_map(|(k, v)| Some((k, v?))).collect())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn non_finite_values_read_as_absent() {
        let r = Record::new().with("ord", 1.0).with("val", f64::NAN);
        assert_eq!(r.get("ord"), Some(1.0));
        assert_eq!(r.get("val"), None);
        assert!(!r.contains("val"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn json_objects_keep_field_order() {
        let r: Record = serde_json::from_str(r#"{"val2": 8, "ord": 2, "val": 15}"#).unwrap();
        let names: Vec<&str> = r.fields().map(|(k, _)| k).collect();
        assert_eq!(names, ["val2", "ord", "val"]);
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"val2":8.0,"ord":2.0,"val":15.0}"#
        );
    }

    #[test]
    fn json_nulls_are_absent() {
        let r: Record = serde_json::from_str(r#"{"ord": 2, "val": null, "val2": 8}"#).unwrap();
        assert_eq!(r.get("val"), None);
        assert!(!r.contains("val"));
        assert_eq!(r.len(), 2);
        assert_eq!(r, Record::new().with("ord", 2.0).with("val2", 8.0));
    }

    #[test]
    fn equality_ignores_field_order() {
        let a: Record = [("ord", 5.0), ("val", 5.0)].into_iter().collect();
        let b = Record::new().with("val", 5.0).with("ord", 5.0);
        assert_eq!(a, b);
    }
}
