/*
[INPUT]:  Endpoint arguments (strings, integers, decimals, nested order lists)
[OUTPUT]: Key-sorted parameter mapping and flattened wire pairs
[POS]:    HTTP layer - request parameter model shared by signer and dispatcher
[UPDATE]: When adding new value shapes or changing the bracket convention
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Integer(u64),
    /// Sent as repeated `key[]` entries, in order
    List(Vec<ParamValue>),
    /// Sent as `key[field]` entries, fields in the order given.
    ///
    /// Inside a list, the first field must be one every element carries so
    /// the server starts a new element on it.
    Map(Vec<(String, ParamValue)>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(u64::from(value))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<Params> for ParamValue {
    fn from(value: Params) -> Self {
        ParamValue::Map(value.entries.into_iter().collect())
    }
}

impl<V: Into<ParamValue>> From<Vec<V>> for ParamValue {
    fn from(values: Vec<V>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Request parameter mapping with unique keys, iterated in ascending key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing and returning any previous value for `key`
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert only when `value` is `Some`
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into `(key, value)` pairs as they go on the wire.
    ///
    /// Top-level keys come out ascending. Lists keep their element order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            flatten(key, value, &mut pairs);
        }
        pairs
    }
}

fn flatten(key: &str, value: &ParamValue, out: &mut Vec<(String, String)>) {
    match value {
        ParamValue::Text(text) => out.push((key.to_string(), text.clone())),
        ParamValue::Integer(number) => out.push((key.to_string(), number.to_string())),
        ParamValue::List(items) => {
            let item_key = format!("{key}[]");
            for item in items {
                flatten(&item_key, item, out);
            }
        }
        ParamValue::Map(fields) => {
            for (field, field_value) in fields {
                flatten(&format!("{key}[{field}]"), field_value, out);
            }
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
