use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::prefix::StylePrefix;
use crate::variables::Value;

pub const BACKGROUND: &str = "background";
pub const PADDING: &str = "padding";
pub const XSIZE: &str = "xsize";
pub const YSIZE: &str = "ysize";
pub const LAYOUT: &str = "layout";
pub const FONT: &str = "font";
pub const SIZE: &str = "size";
pub const XALIGN: &str = "xalign";
pub const TEXT_ALIGN: &str = "text_align";
pub const COLOR: &str = "color";

/// Resolved style properties in insertion order.
///
/// Properties without a source value are simply missing; hosts apply their
/// own defaults for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBundle {
    entries: Vec<(String, Value)>,
}

impl PropertyBundle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub(crate) fn insert_opt(&mut self, name: impl Into<String>, value: Option<Value>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State-prefixed variants of `property`, e.g. every `*_color` entry.
    pub fn state_values<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = (StylePrefix, &'a Value)> + 'a {
        self.iter().filter_map(move |(key, value)| {
            let (state, rest) = StylePrefix::split(key);
            (rest == property).then_some((state, value))
        })
    }
}

impl Serialize for PropertyBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
