//! Resource pack - the document supplying questions and level labels
//!
//! Mirrors the string-array resources of the hosting app: one flat array
//! feeding the question bank in strides of six, and one array of exactly
//! three tier labels for the level dialog. The core never interprets the
//! strings beyond that layout, so packs localize freely.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::QuestionBank;
use crate::error::{QuizError, QuizResult};
use crate::types::TIER_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePack {
    /// Flat question entries, six per question.
    pub questions: Vec<String>,
    /// Tier labels in dialog order.
    pub levels: Vec<String>,
}

impl ResourcePack {
    /// Parse a pack from its JSON document.
    pub fn from_json(json: &str) -> QuizResult<Self> {
        let pack: ResourcePack = serde_json::from_str(json)?;
        pack.validate()?;
        Ok(pack)
    }

    /// Read and parse a pack from disk.
    pub fn from_path(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        info!(path = %path.display(), "resource pack read");
        Self::from_json(&raw)
    }

    /// Build the question bank from the flat entries.
    pub fn load_bank(&self) -> QuizResult<QuestionBank> {
        QuestionBank::load(&self.questions)
    }

    /// The three tier labels as a fixed array.
    pub fn level_labels(&self) -> QuizResult<[String; TIER_COUNT]> {
        self.levels
            .clone()
            .try_into()
            .map_err(|labels: Vec<String>| QuizError::MissingLevelLabels {
                found: labels.len(),
            })
    }

    fn validate(&self) -> QuizResult<()> {
        if self.levels.len() != TIER_COUNT {
            return Err(QuizError::MissingLevelLabels {
                found: self.levels.len(),
            });
        }
        Ok(())
    }
}
