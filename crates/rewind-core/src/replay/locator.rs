use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::header::ReplayHeader;
use crate::error::{Error, Result};

/// File extension of replay files, including the dot.
pub const REPLAY_EXTENSION: &str = ".osr";

/// Finds the replay file of a specific play inside a replay directory.
///
/// Replay files are named after the beatmap hash only, so one beatmap can have
/// many candidates; the matching file is identified by the replay hash stored
/// in its header.
#[derive(Debug, Clone)]
pub struct ReplayLocator {
    replay_dir: PathBuf,
}

impl ReplayLocator {
    pub fn new<P: AsRef<Path>>(replay_dir: P) -> Self {
        Self {
            replay_dir: replay_dir.as_ref().to_path_buf(),
        }
    }

    pub fn replay_dir(&self) -> &Path {
        &self.replay_dir
    }

    /// List replay files whose name starts with `beatmap_hash`, in directory order.
    pub fn candidates(&self, beatmap_hash: &str) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&self.replay_dir).map_err(|e| Error::storage(&self.replay_dir, e))?;

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::storage(&self.replay_dir, e))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !is_candidate_name(name, beatmap_hash) {
                continue;
            }
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            candidates.push(entry.path());
        }

        debug!(
            "Found {} replay candidates for beatmap {}",
            candidates.len(),
            beatmap_hash
        );
        Ok(candidates)
    }

    /// Locate the replay file whose header carries `replay_hash`.
    ///
    /// Undecodable candidates are skipped. When several candidates match, the
    /// first in directory order wins.
    ///
    /// # Errors
    ///
    /// `ReplayNotFound` when no candidate matches, `ReplayStorage` when the
    /// directory or a candidate cannot be read.
    pub fn locate(&self, beatmap_hash: &str, replay_hash: &str) -> Result<PathBuf> {
        let candidates = self.candidates(beatmap_hash)?;

        match find_matching(candidates, replay_hash)? {
            Some(path) => {
                info!("Located replay {} at {}", replay_hash, path.display());
                Ok(path)
            }
            None => Err(Error::ReplayNotFound {
                beatmap_hash: beatmap_hash.to_string(),
                replay_hash: replay_hash.to_string(),
            }),
        }
    }

    /// Locate a replay and copy it to `destination`.
    pub fn export<P: AsRef<Path>>(
        &self,
        beatmap_hash: &str,
        replay_hash: &str,
        destination: P,
    ) -> Result<PathBuf> {
        let source = self.locate(beatmap_hash, replay_hash)?;
        let destination = destination.as_ref();

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;
        }
        fs::copy(&source, destination).map_err(|e| Error::storage(destination, e))?;

        info!("Exported replay to {}", destination.display());
        Ok(destination.to_path_buf())
    }
}

/// Whether a directory entry name is a replay candidate for `beatmap_hash`.
pub fn is_candidate_name(name: &str, beatmap_hash: &str) -> bool {
    name.starts_with(beatmap_hash) && name.ends_with(REPLAY_EXTENSION)
}

/// Return the first candidate whose decoded replay hash equals `replay_hash`.
///
/// Read failures are fatal; decode failures only skip the candidate.
pub fn find_matching<I>(candidates: I, replay_hash: &str) -> Result<Option<PathBuf>>
where
    I: IntoIterator<Item = PathBuf>,
{
    for path in candidates {
        let bytes = fs::read(&path).map_err(|e| Error::storage(&path, e))?;

        match ReplayHeader::parse(&bytes) {
            Ok(header) if header.matches(replay_hash) => return Ok(Some(path)),
            Ok(_) => {}
            Err(e) if e.is_decode_error() => {
                warn!("Skipping unreadable replay {}: {}", path.display(), e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_candidate_name() {
        assert!(is_candidate_name("abc-132918.osr", "abc"));
        assert!(is_candidate_name("abc.osr", "abc"));
        assert!(!is_candidate_name("abc-132918.osz", "abc"));
        assert!(!is_candidate_name("xabc-132918.osr", "abc"));
        assert!(!is_candidate_name("abc.osr.bak", "abc"));
    }

    #[test]
    fn test_locate_missing_directory_is_storage_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let locator = ReplayLocator::new(dir.path().join("missing"));

        let err = locator.locate("abc", "def").unwrap_err();
        assert!(matches!(err, Error::ReplayStorage { .. }));
    }

    #[test]
    fn test_find_matching_empty_candidates() {
        assert!(find_matching(Vec::new(), "def").unwrap().is_none());
    }

    fn write_replay(path: &Path, replay_hash: &str) {
        let header = ReplayHeader {
            beatmap_hash: Some("abc".to_string()),
            player_name: Some("cookiezi".to_string()),
            replay_hash: Some(replay_hash.to_string()),
            ..Default::default()
        };
        fs::write(path, header.to_bytes()).unwrap();
    }

    #[test]
    fn test_find_matching_first_duplicate_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        let a = dir.path().join("abc-1.osr");
        let b = dir.path().join("abc-2.osr");
        write_replay(&a, "def");
        write_replay(&b, "def");

        let found = find_matching(vec![b.clone(), a.clone()], "def").unwrap();
        assert_eq!(found, Some(b.clone()));

        let found = find_matching(vec![a.clone(), b], "def").unwrap();
        assert_eq!(found, Some(a));
    }

    #[test]
    fn test_find_matching_unreadable_candidate_is_storage_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let matching = dir.path().join("abc-1.osr");
        write_replay(&matching, "def");
        // A directory cannot be read as a file
        let unreadable = dir.path().join("abc-0.osr");
        fs::create_dir(&unreadable).unwrap();

        let err = find_matching(vec![unreadable.clone(), matching], "def").unwrap_err();
        match err {
            Error::ReplayStorage { path, .. } => assert_eq!(path, unreadable),
            other => panic!("Expected ReplayStorage, got {other:?}"),
        }
    }

    #[test]
    fn test_find_matching_skips_undecodable_candidate() {
        let dir = tempfile::TempDir::new().unwrap();
        let corrupt = dir.path().join("abc-0.osr");
        fs::write(&corrupt, [0u8, 1, 2]).unwrap();
        let matching = dir.path().join("abc-1.osr");
        write_replay(&matching, "def");

        let found = find_matching(vec![corrupt, matching.clone()], "def").unwrap();
        assert_eq!(found, Some(matching));
    }
}
