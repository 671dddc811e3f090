use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::ScoreStore;
use crate::error::Result;
use crate::score::ScoreRecord;

/// Score list cached as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonScoreCache {
    path: PathBuf,
}

impl JsonScoreCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreCache {
    fn load(&self) -> Result<Option<Vec<ScoreRecord>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No score cache at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let scores: Vec<ScoreRecord> = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} scores from {}",
            scores.len(),
            self.path.display()
        );
        Ok(Some(scores))
    }

    fn save(&mut self, scores: &[ScoreRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(scores)?;
        fs::write(&self.path, json)?;
        info!("Cached {} scores to {}", scores.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed score cache {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
