//! Background asset lookup over the prefix search.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::config::ResolverConfig;
use crate::prefix::{PrefixList, StylePrefix};

/// Existence checks against the host's asset tree.
///
/// Paths are POSIX-style and relative to an implicit asset base directory.
pub trait AssetFs {
    fn exists(&self, path: &str) -> bool;
}

impl<A: AssetFs + ?Sized> AssetFs for &A {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }
}

/// Assets on disk under a base directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetFs for DirAssets {
    fn exists(&self, path: &str) -> bool {
        let relative = Path::new(path);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return false;
        }
        self.root.join(relative).is_file()
    }
}

/// A fixed set of asset paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    paths: HashSet<String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }
}

impl AssetFs for MemoryAssets {
    fn exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryAssets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Finds the first existing background image for a prefix list.
#[derive(Debug)]
pub struct AssetPathResolver<'a, A: ?Sized> {
    fs: &'a A,
    dir: &'a str,
    suffix: &'a str,
}

impl<'a, A: AssetFs + ?Sized> AssetPathResolver<'a, A> {
    pub fn new(fs: &'a A, config: &'a ResolverConfig) -> Self {
        Self {
            fs,
            dir: &config.asset_dir,
            suffix: &config.background_suffix,
        }
    }

    /// `<dir><prefix>_<suffix>` for each prefix, then `<dir><suffix>`.
    pub fn candidates(&self, prefixes: &PrefixList) -> Vec<String> {
        self.state_candidates(prefixes, StylePrefix::Base)
    }

    /// Candidates for one interaction state, e.g.
    /// `gui/button/choice_hover_background.png`.
    pub fn state_candidates(&self, prefixes: &PrefixList, state: StylePrefix) -> Vec<String> {
        let state = state.as_str();
        prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| format!("{}{prefix}_{state}{}", self.dir, self.suffix))
            .chain(std::iter::once(format!("{}{state}{}", self.dir, self.suffix)))
            .collect()
    }

    pub fn background(&self, prefixes: &PrefixList) -> Option<String> {
        self.first_existing(self.candidates(prefixes))
    }

    pub fn state_background(&self, prefixes: &PrefixList, state: StylePrefix) -> Option<String> {
        self.first_existing(self.state_candidates(prefixes, state))
    }

    fn first_existing(&self, candidates: Vec<String>) -> Option<String> {
        let found = candidates.into_iter().find(|path| {
            let hit = self.fs.exists(path);
            tracing::trace!(path = %path, hit, "probe background asset");
            hit
        });
        if found.is_none() {
            tracing::debug!("no background asset found");
        }
        found
    }
}
