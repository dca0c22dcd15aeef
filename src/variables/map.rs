use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;

use super::{StoreError, StoreResult, Value, VariableStore};

/// In-memory variable namespace, loadable from a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct VariableMap {
    vars: HashMap<String, Value>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> StoreResult<Self> {
        let serialized = fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json(&serialized)?;
        tracing::debug!(?path, count = map.len(), "loaded skin variables");
        Ok(map)
    }

    pub fn from_json(serialized: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(serialized)?)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl VariableStore for VariableMap {
    fn get(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    fn exists(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Process-wide mutable namespace.
///
/// Every lookup takes its own read lock, so one resolution may observe
/// writes that land between its probes.
#[derive(Debug, Clone, Default)]
pub struct SharedVariables {
    inner: Arc<RwLock<VariableMap>>,
}

impl SharedVariables {
    pub fn new(map: VariableMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(name, value)
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }
}

impl VariableStore for SharedVariables {
    fn get(&self, name: &str) -> Option<Value> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
    }

    fn exists(&self, name: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .exists(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::Borders;
    use std::path::PathBuf;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("skin-defaults-vars-{pid}-{nanos}"));
        path
    }

    #[test]
    fn falsy_assignments_still_exist() {
        let map: VariableMap = [
            ("button_tile", Value::Bool(false)),
            ("button_text_size", 0.0.into()),
            ("button_width", Value::None),
        ]
        .into_iter()
        .collect();

        assert!(map.exists("button_tile"));
        assert!(map.exists("button_width"));
        assert!(map.exists("button_text_size"));
        assert!(!map.exists("button_text_font"));
        assert_eq!(map.get("button_tile"), Some(Value::Bool(false)));
    }

    #[test]
    fn null_assignment_exists_without_rejecting_the_namespace() {
        let map = VariableMap::from_json(r#"{"button_width": null, "button_height": 64}"#)
            .expect("null values should parse");

        assert!(map.exists("button_width"));
        assert_eq!(map.get("button_width"), Some(Value::None));
        assert_eq!(map.get("button_height"), Some(Value::Number(64.0)));
    }

    #[test]
    fn load_reads_flat_json_object() {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        let path = root.join("vars.json");
        fs::write(
            &path,
            r#"{"button_borders": {"left": 6, "top": 6, "right": 6, "bottom": 6},
                "button_text_xalign": 0.5}"#,
        )
        .unwrap();

        let map = VariableMap::load(&path).expect("variables should load");
        let _ = fs::remove_dir_all(&root);

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("button_borders"),
            Some(Value::Borders(Borders::new(6.0, 6.0, 6.0, 6.0)))
        );
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let path = fixture_root().join("missing.json");
        let err = VariableMap::load(&path).expect_err("missing file should fail");
        assert!(matches!(err, StoreError::ReadFile { path: p, .. } if p == path));
    }

    #[test]
    fn from_json_rejects_non_object_documents() {
        let err = VariableMap::from_json("[1, 2]").expect_err("array should not parse");
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn shared_variables_observe_writes_through_clones() {
        let shared = SharedVariables::default();
        let reader = shared.clone();
        assert!(!reader.exists("button_width"));

        shared.set("button_width", 120.0);
        assert_eq!(reader.get("button_width"), Some(Value::Number(120.0)));

        shared.remove("button_width");
        assert!(!reader.exists("button_width"));
    }
}
