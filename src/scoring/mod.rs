//! Completeness Scoring
//!
//! The score is a pure function of finding counts and a few bonus
//! conditions on the document. It does not depend on finding order.
//!
//! # Scoring Formula
//!
//! ```text
//! score = 100
//!       - issue_penalty      × issues        (default 5)
//!       - suggestion_penalty × suggestions   (default 1)
//!       + description_bonus  if info.description is longer than 50 chars (default 5)
//!       + tags_bonus         if tags is non-empty                        (default 3)
//!       + external_docs_bonus if externalDocs is present                 (default 2)
//!
//! score = clamp(score, 0, 100)
//! ```
//!
//! # Example
//!
//! A document with 1 issue, 4 suggestions, a long description and tags:
//!
//! 100 - 5 - 4 + 5 + 3 = 99

use crate::config::ScoringConfig;
use crate::document::Document;
use serde::{Deserialize, Serialize};
use tracing::debug;

const BASE_SCORE: i64 = 100;

/// A bonus condition that was met
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub name: String,
    pub points: i64,
}

/// Complete score breakdown for `--explain-score`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i64,
    pub issue_count: usize,
    pub issue_penalty: i64,
    pub suggestion_count: usize,
    pub suggestion_penalty: i64,
    pub bonuses: Vec<Bonus>,
    /// Score before clamping
    pub raw_score: i64,
    /// Final score in 0..=100
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn bonus_total(&self) -> i64 {
        self.bonuses.iter().map(|b| b.points).sum()
    }
}

/// Computes the completeness score
pub struct Scorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Calculate the score with breakdown
    pub fn calculate(
        &self,
        doc: &Document,
        issue_count: usize,
        suggestion_count: usize,
    ) -> ScoreBreakdown {
        let issue_penalty = self.config.issue_penalty.saturating_mul(count(issue_count));
        let suggestion_penalty = self
            .config
            .suggestion_penalty
            .saturating_mul(count(suggestion_count));
        let bonuses = self.bonuses(doc);
        let bonus_total: i64 = bonuses.iter().map(|b| b.points).sum();

        let raw_score = BASE_SCORE
            .saturating_sub(issue_penalty)
            .saturating_sub(suggestion_penalty)
            .saturating_add(bonus_total);
        let score = raw_score.clamp(0, 100) as u8;

        debug!(
            "Score: {} - {} (issues) - {} (suggestions) + {} (bonuses) = {} → {}",
            BASE_SCORE, issue_penalty, suggestion_penalty, bonus_total, raw_score, score
        );

        ScoreBreakdown {
            base: BASE_SCORE,
            issue_count,
            issue_penalty,
            suggestion_count,
            suggestion_penalty,
            bonuses,
            raw_score,
            score,
        }
    }

    fn bonuses(&self, doc: &Document) -> Vec<Bonus> {
        let mut bonuses = Vec::new();
        let min_len = self.config.description_bonus_min_length;
        if doc.description().is_some_and(|d| d.chars().count() > min_len) {
            bonuses.push(Bonus {
                name: format!("description longer than {min_len} characters"),
                points: self.config.description_bonus,
            });
        }
        if doc.has_tags() {
            bonuses.push(Bonus {
                name: "tags defined".to_string(),
                points: self.config.tags_bonus,
            });
        }
        if doc.external_docs.is_some() {
            bonuses.push(Bonus {
                name: "external documentation linked".to_string(),
                points: self.config.external_docs_bonus,
            });
        }
        bonuses
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
