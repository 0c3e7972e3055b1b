//! Parameter binding during lookup.

use std::collections::HashMap;

/// Receives parameters extracted by a successful match.
///
/// Called once per parameter, in declaration order. Wildcards are bound
/// under the empty name.
pub trait ParamSink {
    fn set_param(&mut self, name: &str, value: &str);
}

impl ParamSink for HashMap<String, String> {
    fn set_param(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl ParamSink for Vec<(String, String)> {
    fn set_param(&mut self, name: &str, value: &str) {
        self.push((name.to_string(), value.to_string()));
    }
}

/// Sink that drops every parameter, for callers that only need the handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl ParamSink for Discard {
    fn set_param(&mut self, _name: &str, _value: &str) {}
}

/// Ordered parameter list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ParamSink for Params {
    fn set_param(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }
}
