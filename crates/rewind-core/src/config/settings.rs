use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::{SortKey, SortOrder, SortSpec};

/// Scores shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// osu! installation folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osu_path: Option<PathBuf>,
    pub page_size: usize,
    pub default_sort: SortKey,
    pub default_order: SortOrder,
    /// Overrides the per-user cache location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            osu_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::default(),
            default_order: SortOrder::default(),
            cache_file: None,
        }
    }
}

impl Config {
    /// Load a config file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        if config.page_size == 0 {
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.default_sort, self.default_order)
    }
}
