use std::collections::HashMap;

use serde::Serialize;

/// A single front matter value. Dates keep their literal text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum MetaValue {
    Text(String),
    Bool(bool),
    Date(String),
    List(Vec<String>),
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata(HashMap<String, MetaValue>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Text or date value of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            MetaValue::Text(s) | MetaValue::Date(s) => Some(s),
            _ => None,
        }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            MetaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            MetaValue::List(items) => Some(items),
            _ => None,
        }
    }
}
