//! Score list persistence.
//!
//! The `ScoreStore` trait abstracts where the computed score list lives so that
//! expensive performance calculations only run on a refresh:
//! - `JsonScoreCache` - a JSON file on disk
//! - `MemoryScoreStore` - an in-memory store for tests and one-shot runs

mod cache;
mod memory;

pub use cache::*;
pub use memory::*;

use crate::error::Result;
use crate::score::ScoreRecord;

/// Persistence port for the computed score list.
pub trait ScoreStore {
    /// Load the stored list; `None` when nothing was stored yet.
    fn load(&self) -> Result<Option<Vec<ScoreRecord>>>;

    /// Replace the stored list.
    fn save(&mut self, scores: &[ScoreRecord]) -> Result<()>;

    /// Remove the stored list. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<()>;
}
