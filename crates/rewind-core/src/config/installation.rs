use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Score database file names; the casing differs between client versions.
pub const SCORE_DB_NAMES: [&str; 2] = ["scores.db", "Scores.db"];
pub const BEATMAP_DB_NAME: &str = "osu!.db";
/// Replay storage, relative to the installation root.
pub const REPLAY_DIR: [&str; 2] = ["Data", "r"];
pub const EXPORT_DIR_NAME: &str = "Replays";

/// A validated osu! installation folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    root: PathBuf,
}

impl Installation {
    /// Validate `root` as an osu! folder.
    ///
    /// The folder must contain the score database, the beatmap database and
    /// the replay directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::InvalidInstallation(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        if !SCORE_DB_NAMES.iter().any(|name| root.join(name).is_file()) {
            return Err(Error::InvalidInstallation(format!(
                "no scores.db in {}",
                root.display()
            )));
        }

        if !root.join(BEATMAP_DB_NAME).is_file() {
            return Err(Error::InvalidInstallation(format!(
                "no {} in {}",
                BEATMAP_DB_NAME,
                root.display()
            )));
        }

        let installation = Self {
            root: root.to_path_buf(),
        };
        if !installation.replay_dir().is_dir() {
            return Err(Error::InvalidInstallation(format!(
                "no replay directory in {}",
                root.display()
            )));
        }

        debug!("Opened osu! installation at {}", root.display());
        Ok(installation)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn replay_dir(&self) -> PathBuf {
        REPLAY_DIR.iter().fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Where exported replays are written.
    pub fn export_dir(&self) -> PathBuf {
        self.root.join(EXPORT_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_installation(score_db: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(score_db), b"").unwrap();
        fs::write(dir.path().join(BEATMAP_DB_NAME), b"").unwrap();
        fs::create_dir_all(dir.path().join("Data").join("r")).unwrap();
        dir
    }

    #[test]
    fn test_open_valid() {
        let dir = fake_installation("scores.db");
        let installation = Installation::open(dir.path()).unwrap();
        assert_eq!(installation.root(), dir.path());
        assert_eq!(installation.replay_dir(), dir.path().join("Data").join("r"));
        assert_eq!(installation.export_dir(), dir.path().join("Replays"));
    }

    #[test]
    fn test_open_capitalised_score_db() {
        let dir = fake_installation("Scores.db");
        assert!(Installation::open(dir.path()).is_ok());
    }

    #[test]
    fn test_open_missing_replay_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scores.db"), b"").unwrap();
        fs::write(dir.path().join(BEATMAP_DB_NAME), b"").unwrap();

        let err = Installation::open(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidInstallation(_)));
    }

    #[test]
    fn test_open_missing_databases() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Data").join("r")).unwrap();
        assert!(Installation::open(dir.path()).is_err());

        fs::write(dir.path().join("scores.db"), b"").unwrap();
        assert!(Installation::open(dir.path()).is_err());
    }

    #[test]
    fn test_open_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"").unwrap();
        assert!(Installation::open(&file).is_err());
    }
}
