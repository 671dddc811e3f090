use super::ScoreStore;
use crate::error::Result;
use crate::score::ScoreRecord;

/// Keeps the score list in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: Option<Vec<ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: Vec<ScoreRecord>) -> Self {
        Self {
            scores: Some(scores),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Option<Vec<ScoreRecord>>> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &[ScoreRecord]) -> Result<()> {
        self.scores = Some(scores.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.scores = None;
        Ok(())
    }
}
