use serde::Serialize;

use super::codec::{ByteBuffer, encode_tagged_string};
use crate::error::Result;

/// Size of the fixed preamble: mode byte + 4-byte game version.
pub const PREAMBLE_LEN: usize = 5;

/// The leading string fields of a replay file.
///
/// Only what is needed to identify a replay is decoded; the remainder of the
/// file (judgements, life bar, frames) is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayHeader {
    pub mode: u8,
    pub game_version: i32,
    /// Beatmap hash echoed by the replay
    pub beatmap_hash: Option<String>,
    pub player_name: Option<String>,
    pub replay_hash: Option<String>,
    /// Offset just past the replay hash field
    pub end_offset: usize,
}

impl ReplayHeader {
    /// Decode the header from the start of a replay file.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut buf = ByteBuffer::new(bytes);

        let mode = buf.read_u8()?;
        let game_version = buf.read_i32()?;
        let beatmap_hash = buf.read_tagged_string()?;
        let player_name = buf.read_tagged_string()?;
        let replay_hash = buf.read_tagged_string()?;

        Ok(Self {
            mode,
            game_version,
            beatmap_hash,
            player_name,
            replay_hash,
            end_offset: buf.position(),
        })
    }

    /// Whether the decoded replay hash equals `replay_hash` exactly.
    pub fn matches(&self, replay_hash: &str) -> bool {
        self.replay_hash.as_deref() == Some(replay_hash)
    }

    /// Encode the header fields back into bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PREAMBLE_LEN + 96);
        out.push(self.mode);
        out.extend_from_slice(&self.game_version.to_le_bytes());
        encode_tagged_string(self.beatmap_hash.as_deref(), &mut out);
        encode_tagged_string(self.player_name.as_deref(), &mut out);
        encode_tagged_string(self.replay_hash.as_deref(), &mut out);
        out
    }
}
