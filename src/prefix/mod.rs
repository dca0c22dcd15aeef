//! Style-prefix search: the ordered naming variants tried for a kind.

mod state;

pub use state::StylePrefix;

use crate::kind::Kind;

/// Ordered, duplicate-free naming prefixes, most specific first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrefixList(Vec<String>);

impl PrefixList {
    /// Appends `prefix` unless it is already present.
    fn push(&mut self, prefix: &str) {
        if !self.0.iter().any(|p| p == prefix) {
            self.0.push(prefix.to_owned());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the prefix list for `kind`.
///
/// The kind comes first, then each truncation made by stripping the last
/// `_segment` or `.segment`, and finally `fallback_kind`. The empty prefix is
/// never produced here; the asset search appends it on its own.
pub fn style_prefixes(kind: &Kind, fallback_kind: &str) -> PrefixList {
    let mut prefixes = PrefixList::default();
    let mut current = kind.as_str();

    while !current.is_empty() {
        prefixes.push(current);
        current = match current.rfind(['_', '.']) {
            Some(split) => &current[..split],
            None => "",
        };
    }

    if !fallback_kind.is_empty() {
        prefixes.push(fallback_kind);
    }

    tracing::trace!(%kind, prefixes = ?prefixes.as_slice(), "computed style prefixes");
    prefixes
}
