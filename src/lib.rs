pub mod assets;
pub mod bundle;
pub mod config;
pub mod error;
pub mod kind;
pub mod logging;
pub mod prefix;
pub mod resolve;
pub mod variables;

use std::path::Path;

pub use assets::{AssetFs, DirAssets, MemoryAssets};
pub use bundle::PropertyBundle;
pub use config::ResolverConfig;
pub use error::{SkinError, SkinResult};
pub use resolve::{ResolveError, StyleResolver};
pub use variables::{SharedVariables, Value, VariableMap, VariableStore};

/// Visual and text bundles for one kind.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct KindReport {
    pub kind: String,
    pub visual: PropertyBundle,
    pub text: PropertyBundle,
}

/// Entrypoint used by the CLI: loads `variables` from JSON and resolves each
/// kind against the assets under `asset_root`.
pub fn run(variables: &Path, asset_root: &Path, kinds: &[String]) -> SkinResult<Vec<KindReport>> {
    logging::init();
    let store = VariableMap::load(variables)?;
    let assets = DirAssets::new(asset_root);
    let resolver = StyleResolver::with_config(&store, &assets, config::load_resolver_config());
    tracing::info!(count = kinds.len(), root = ?asset_root, "resolving kinds");

    kinds
        .iter()
        .map(|kind| -> SkinResult<KindReport> {
            Ok(KindReport {
                kind: kind.clone(),
                visual: resolver.visual_properties(kind)?,
                text: resolver.text_properties(kind)?,
            })
        })
        .collect()
}
