use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::kind::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "skin-defaults";
const APP_CONFIG_FILE: &str = "config.json";

pub const DEFAULT_ASSET_DIR: &str = "gui/button/";
pub const DEFAULT_BACKGROUND_SUFFIX: &str = "background.png";
pub const DEFAULT_FALLBACK_KIND: &str = "button";

/// Naming constants used by the prefix and asset searches, from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub asset_dir: String,
    pub background_suffix: String,
    pub fallback_kind: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            asset_dir: DEFAULT_ASSET_DIR.to_owned(),
            background_suffix: DEFAULT_BACKGROUND_SUFFIX.to_owned(),
            fallback_kind: DEFAULT_FALLBACK_KIND.to_owned(),
        }
    }
}

impl ResolverConfig {
    /// Repairs values the searches cannot use: `asset_dir` gains a trailing
    /// `/`, and a `fallback_kind` that is not a valid kind becomes `button`.
    pub fn normalized(mut self) -> Self {
        if !self.asset_dir.is_empty() && !self.asset_dir.ends_with('/') {
            self.asset_dir.push('/');
        }
        if let Err(reason) = Kind::parse(&self.fallback_kind) {
            tracing::warn!(
                fallback_kind = %self.fallback_kind,
                %reason,
                "invalid fallback_kind; using {DEFAULT_FALLBACK_KIND}"
            );
            self.fallback_kind = DEFAULT_FALLBACK_KIND.to_owned();
        }
        self
    }
}

pub(crate) fn load_resolver_config() -> ResolverConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_resolver_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_resolver_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ResolverConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return ResolverConfig::default(),
    };
    if !path.exists() {
        return ResolverConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str::<ResolverConfig>(&contents)
            .map(ResolverConfig::normalized)
            .unwrap_or_else(|err| {
                tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
                ResolverConfig::default()
            }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            ResolverConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
