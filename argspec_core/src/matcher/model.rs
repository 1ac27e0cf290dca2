use std::collections::BTreeMap;

use crate::api::Value;

/// A raw token paired with its index in the input token list.
pub(crate) type OffsetValue = (usize, String);

/// The name -> values mapping produced by a scan.
///
/// Binding is append-only: a name bound more than once keeps every value, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Bindings {
    values: BTreeMap<String, Vec<Value>>,
}

impl Bindings {
    pub(crate) fn bind(&mut self, name: &str, values: Vec<Value>) {
        self.values
            .entry(name.to_string())
            .or_default()
            .extend(values);
    }

    pub(crate) fn extend(&mut self, other: Bindings) {
        for (name, values) in other.values {
            self.bind(&name, values);
        }
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&[Value]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Iterate in name order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Value>)> {
        self.values.iter()
    }
}

/// The result of the option scan: what the options consumed, and the tokens left for the arguments.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Scan {
    pub bindings: Bindings,
    pub remaining: Vec<OffsetValue>,
}
