//! Integration tests for locating replay files on disk.

use std::fs;
use std::path::Path;

use rewind_core::{Error, ReplayHeader, ReplayLocator};
use tempfile::TempDir;

const BEATMAP: &str = "d41d8cd98f00b204e9800998ecf8427e";

fn write_replay(dir: &Path, file_name: &str, replay_hash: &str) {
    let header = ReplayHeader {
        mode: 0,
        game_version: 20240131,
        beatmap_hash: Some(BEATMAP.to_string()),
        player_name: Some("cookiezi".to_string()),
        replay_hash: Some(replay_hash.to_string()),
        end_offset: 0,
    };
    let mut bytes = header.to_bytes();
    // Trailing replay body is never decoded
    bytes.extend_from_slice(&[0xAB; 64]);
    fs::write(dir.join(file_name), bytes).unwrap();
}

fn replay_dir(count: usize, target: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..count {
        let hash = if i == target {
            "target".to_string()
        } else {
            format!("other-{i}")
        };
        write_replay(dir.path(), &format!("{BEATMAP}-{i}.osr"), &hash);
    }
    dir
}

mod locate {
    use super::*;

    #[test]
    fn test_finds_single_match_wherever_it_is() {
        for target in 0..5 {
            let dir = replay_dir(5, target);
            let locator = ReplayLocator::new(dir.path());

            let path = locator.locate(BEATMAP, "target").unwrap();
            assert_eq!(
                path.file_name().unwrap().to_str().unwrap(),
                format!("{BEATMAP}-{target}.osr")
            );
        }
    }

    #[test]
    fn test_not_found() {
        let dir = replay_dir(3, usize::MAX);
        let locator = ReplayLocator::new(dir.path());

        let err = locator.locate(BEATMAP, "target").unwrap_err();
        assert!(matches!(err, Error::ReplayNotFound { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let err = ReplayLocator::new(dir.path())
            .locate(BEATMAP, "target")
            .unwrap_err();
        assert!(matches!(err, Error::ReplayNotFound { .. }));
    }

    #[test]
    fn test_ignores_other_beatmaps_and_extensions() {
        let dir = TempDir::new().unwrap();
        write_replay(dir.path(), "ffffffffffffffffffffffffffffffff-1.osr", "target");
        write_replay(dir.path(), &format!("{BEATMAP}-1.osr.bak"), "target");

        let locator = ReplayLocator::new(dir.path());
        assert!(locator.candidates(BEATMAP).unwrap().is_empty());
        assert!(locator.locate(BEATMAP, "target").is_err());
    }

    #[test]
    fn test_skips_corrupt_candidates() {
        let dir = replay_dir(2, 1);
        fs::write(dir.path().join(format!("{BEATMAP}-bad.osr")), [0u8, 1, 2]).unwrap();
        fs::write(
            dir.path().join(format!("{BEATMAP}-badtag.osr")),
            [0u8, 0, 0, 0, 0, 0x42],
        )
        .unwrap();

        let locator = ReplayLocator::new(dir.path());
        assert_eq!(locator.candidates(BEATMAP).unwrap().len(), 4);
        let path = locator.locate(BEATMAP, "target").unwrap();
        assert!(path.ends_with(format!("{BEATMAP}-1.osr")));
    }

    #[test]
    fn test_missing_directory_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let locator = ReplayLocator::new(dir.path().join("missing"));

        let err = locator.locate(BEATMAP, "target").unwrap_err();
        assert!(matches!(err, Error::ReplayStorage { .. }));
    }
}

mod export {
    use super::*;

    #[test]
    fn test_export_copies_replay() {
        let dir = replay_dir(3, 2);
        let out = TempDir::new().unwrap();
        let destination = out.path().join("Replays").join("cookiezi - test.osr");

        let locator = ReplayLocator::new(dir.path());
        let written = locator.export(BEATMAP, "target", &destination).unwrap();

        assert_eq!(written, destination);
        let original = fs::read(dir.path().join(format!("{BEATMAP}-2.osr"))).unwrap();
        assert_eq!(fs::read(&destination).unwrap(), original);
    }

    #[test]
    fn test_export_not_found_writes_nothing() {
        let dir = replay_dir(1, usize::MAX);
        let out = TempDir::new().unwrap();
        let destination = out.path().join("out.osr");

        assert!(
            ReplayLocator::new(dir.path())
                .export(BEATMAP, "target", &destination)
                .is_err()
        );
        assert!(!destination.exists());
    }
}
