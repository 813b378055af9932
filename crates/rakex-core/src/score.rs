//! Word and phrase scoring.

use std::collections::{HashMap, HashSet};

use crate::{Candidate, ScoredKeyword, WordStats};

/// RAKE word scores, `degree / frequency`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScores {
    /// Score keyed by word.
    scores: HashMap<String, f64>,
}

impl WordScores {
    /// Scores every word in the statistics.
    pub fn from_stats(stats: &WordStats) -> Self {
        let scores = stats
            .iter()
            .map(|(word, stat)| (word.to_string(), stat.degree as f64 / stat.frequency as f64))
            .collect();
        Self { scores }
    }

    /// Returns the score of a word.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if no words are scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Scores each distinct phrase as the sum of its word scores.
///
/// Phrases shorter than `min_token_len` characters are skipped. The result holds one entry per
/// phrase, in the order phrases were first seen.
///
/// # Panics
///
/// Panics if a candidate word has no score, i.e. `scores` was not built from `candidates`.
pub fn score_candidates(
    candidates: &[Candidate],
    scores: &WordScores,
    min_token_len: usize,
) -> Vec<ScoredKeyword> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut scored = Vec::new();

    for candidate in candidates {
        if candidate.phrase.chars().count() < min_token_len
            || !seen.insert(candidate.phrase.as_str())
        {
            continue;
        }

        let score = candidate
            .words
            .iter()
            .map(|word| {
                scores
                    .get(word)
                    .expect("candidate words are aggregated before scoring")
            })
            .sum();
        scored.push(ScoredKeyword::new(candidate.phrase.clone(), score));
    }
    scored
}
