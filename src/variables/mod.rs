//! The skin variable namespace the resolvers probe.
//!
//! The namespace is owned by the host; resolvers only see it through the
//! read-only [`VariableStore`] trait.

mod map;
mod value;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use map::{SharedVariables, VariableMap};
pub use value::{Borders, Color, Frame, Padding, ParseColorError, Value};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read variables: {path}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse variables")]
    Parse(#[from] serde_json::Error),
}

/// Read access to a variable namespace.
///
/// Existence is distinct from truthiness: a variable assigned `0`, `false`
/// or `""` still exists.
pub trait VariableStore {
    fn get(&self, name: &str) -> Option<Value>;

    fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<S: VariableStore + ?Sized> VariableStore for &S {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }
}
