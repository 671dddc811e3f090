use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Buffer truncated at offset {offset} (length {len})")]
    TruncatedBuffer { offset: usize, len: usize },

    #[error("Invalid string indicator {indicator:#04x} at offset {offset}")]
    InvalidStringIndicator { indicator: u8, offset: usize },

    #[error("Replay not found for beatmap {beatmap_hash} (replay {replay_hash})")]
    ReplayNotFound {
        beatmap_hash: String,
        replay_hash: String,
    },

    #[error("Cannot access replay storage at {}: {source}", path.display())]
    ReplayStorage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid osu! installation: {0}")]
    InvalidInstallation(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Performance calculation failed: {0}")]
    Performance(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReplayStorage {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while decoding replay bytes.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::TruncatedBuffer { .. } | Error::InvalidStringIndicator { .. }
        )
    }
}
