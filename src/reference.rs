use std::collections::BTreeMap;

use serde::Deserialize;

use crate::interpreter::value::core::Value;

#[derive(Debug, Deserialize)]
struct RawTable {
    elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    name:   String,
    symbol: String,
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

/// A single chemical element, resolvable by symbol or name.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    /// The element symbol, matched exactly.
    pub symbol: String,
    /// The element name, matched case-insensitively.
    pub name:   String,
    /// The element's properties as a record value.
    pub record: Value,
}

/// A read-only table of chemical elements loaded from JSON.
///
/// Each element becomes a record value whose fields are the scalar properties
/// of the JSON object (numbers, strings, booleans, and arrays of those).
/// Nested objects and nulls are dropped.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    /// Parses a reference table from periodic table JSON.
    ///
    /// The source must be an object with an `elements` array where every
    /// element carries at least a `name` and a `symbol`.
    ///
    /// # Parameters
    /// - `source`: The JSON document to parse.
    ///
    /// # Returns
    /// - `Ok(ReferenceTable)`: The parsed table.
    /// - `Err(serde_json::Error)`: If the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let table: RawTable = serde_json::from_str(source)?;
        let entries = table.elements
                           .into_iter()
                           .map(|element| {
                               let record = build_record(&element);
                               ReferenceEntry { symbol: element.symbol,
                                                name: element.name,
                                                record }
                           })
                           .collect();

        Ok(Self { entries })
    }

    /// Loads the element data bundled with the crate.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(include_str!("../data/elements.json"))
    }

    /// Looks up an element by symbol (exact) or by name (case-insensitive)
    /// and returns its record.
    ///
    /// # Example
    /// ```
    /// use unical::reference::ReferenceTable;
    ///
    /// let table = ReferenceTable::bundled().unwrap();
    ///
    /// assert!(table.find("H").is_some());
    /// assert!(table.find("hydrogen").is_some());
    /// assert!(table.find("unobtainium").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == name)
            .or_else(|| self.entries.iter().find(|entry| entry.name.eq_ignore_ascii_case(name)))
            .map(|entry| &entry.record)
    }
}

fn build_record(element: &RawElement) -> Value {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), Value::String(element.name.clone()));
    fields.insert("symbol".to_string(), Value::String(element.symbol.clone()));

    for (key, json) in &element.fields {
        if let Some(value) = json_to_value(json) {
            fields.insert(key.clone(), value);
        }
    }

    Value::from(fields)
}

fn json_to_value(json: &serde_json::Value) -> Option<Value> {
    match json {
        serde_json::Value::Bool(flag) => Some(Value::Integer(i64::from(*flag))),

        serde_json::Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Some(Value::Integer(integer))
            } else {
                number.as_f64().map(Value::Float)
            }
        },

        serde_json::Value::String(text) => Some(Value::String(text.clone())),

        serde_json::Value::Array(items) => {
            Some(Value::from(items.iter().filter_map(json_to_value).collect::<Vec<_>>()))
        },

        serde_json::Value::Null | serde_json::Value::Object(_) => None,
    }
}
