//! Board configuration loaded with Figment.
//!
//! Sources, later overriding earlier:
//! 1. Default values
//! 2. An optional TOML, YAML or JSON file
//! 3. Environment variables prefixed `KANBAN_BOARD_` (e.g. `KANBAN_BOARD_HISTORY_LIMIT=50`)

use crate::column::DEFAULT_COLUMN_TITLE;
use crate::error::Result;
use crate::persistence::DEFAULT_STORAGE_KEY;
use crate::storage::FileStore;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "KANBAN_BOARD_";

/// Settings for a board session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key the board snapshot is stored under
    pub storage_key: String,
    /// Directory for file-backed snapshots
    pub storage_dir: Option<PathBuf>,
    /// Title given to newly added columns
    pub new_column_title: String,
    /// Maximum number of snapshots kept for undo; unlimited when unset
    pub history_limit: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            new_column_title: DEFAULT_COLUMN_TITLE.to_string(),
            history_limit: None,
        }
    }
}

impl BoardConfig {
    /// Load from defaults and environment variables
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment(None))
    }

    /// Load from defaults, the given file, then environment variables.
    ///
    /// The file format is chosen by extension (`.toml`, `.yaml`/`.yml`, `.json`).
    /// A missing file contributes nothing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::extract(Self::figment(Some(path.as_ref())))
    }

    /// The file store for `storage_dir`, if one is configured
    pub fn file_store(&self) -> Option<FileStore> {
        self.storage_dir.as_ref().map(FileStore::new)
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(BoardConfig::default()));

        if let Some(path) = path {
            debug!(path = %path.display(), "loading board config file");
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: BoardConfig = figment.extract()?;
        debug!(
            storage_key = %config.storage_key,
            history_limit = ?config.history_limit,
            "loaded board config"
        );
        Ok(config)
    }
}
