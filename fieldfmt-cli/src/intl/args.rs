//! Named arguments passed to message templates

use std::collections::BTreeMap;

use crate::format::FieldValue;

/// Named values substituted into a message template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageArgs {
    values: BTreeMap<String, FieldValue>,
}

impl MessageArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }
}
