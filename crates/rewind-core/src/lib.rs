//! Core library of rewind, an osu! replay finder and score browser.
//!
//! - `replay` - replay header decoding and locating a play's replay file
//! - `query` - search language, player filter and sort engine
//! - `session` - paginated browsing state over a score list
//! - `loader` / `performance` - building score records from external databases
//! - `storage` - score list persistence
//! - `config` - settings and installation discovery

pub mod config;
pub mod error;
pub mod loader;
pub mod performance;
pub mod query;
pub mod replay;
pub mod score;
pub mod session;
pub mod storage;

pub use config::{Config, Installation};
pub use error::{Error, Result};
pub use loader::{RawScore, ScoreLoader, ScoreSource};
pub use performance::{PerformanceAttributes, PerformanceModel};
pub use query::{
    PlayerFilter, Query, SortKey, SortOrder, SortSpec, filter_scores, list_players, sort_scores,
};
pub use replay::{ReplayHeader, ReplayLocator, replay_file_name};
pub use score::{BeatmapMetadata, HitStatistics, Mods, ScoreRecord};
pub use session::ScoreSession;
pub use storage::{JsonScoreCache, MemoryScoreStore, ScoreStore};
