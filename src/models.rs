//! Data models for extracted records.
//!
//! The central type is [`Record`]: one structured extraction result from a
//! detail page. Every source declares a fixed field schema (see the
//! [`crate::sources`] module table) and a Record always carries the complete
//! schema — a field whose selectors matched nothing holds an empty string,
//! never a missing key.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One structured extraction result from a detail page.
///
/// Fields are an ordered list of `(name, value)` pairs so that the JSON
/// output keeps the order the source schema declares. Field names are the
/// static schema names; values default to `""` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field. Schema order is insertion order.
    pub fn insert(&mut self, name: &'static str, value: String) {
        self.fields.push((name, value));
    }

    /// Look up a field value by name.
    ///
    /// Returns `""` for a name outside the record's schema, mirroring the
    /// empty-string convention for missing values.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// The field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(n, _)| *n)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // serde_json maps don't preserve insertion order by default, so
        // serialize the pairs ourselves.
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
