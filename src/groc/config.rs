use crate::error::{GrocError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_LIST_FILE: &str = "grocery-list.txt";
pub const CONFIG_DIR_ENV: &str = "GROC_CONFIG_DIR";
pub const LIST_FILE_ENV: &str = "GROC_FILE";

/// Configuration for groc, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GrocConfig {
    /// Where the list lives when neither `--file` nor `GROC_FILE` is given.
    #[serde(default)]
    pub list_file: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for GrocConfig {
    fn default() -> Self {
        Self {
            list_file: None,
            color: default_color(),
        }
    }
}

impl GrocConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GrocError::Io)?;
        let config: GrocConfig =
            serde_json::from_str(&content).map_err(GrocError::Serialization)?;
        Ok(config)
    }
}

/// `GROC_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir(env_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = env_override {
        return Ok(dir);
    }
    ProjectDirs::from("com", "groc", "groc")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GrocError::Config("Could not determine config dir".to_string()))
}

/// Pick the list file: flag, then environment, then config, then
/// `grocery-list.txt` in `cwd`. Relative paths are taken from `cwd`.
pub fn resolve_list_file(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &GrocConfig,
    cwd: &Path,
) -> PathBuf {
    let chosen = flag
        .or(env)
        .or_else(|| config.list_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIST_FILE));
    cwd.join(chosen)
}
