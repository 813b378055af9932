//! Ordering scored phrases for display.
//!
//! Ranking sorts phrases by score, highest first, and optionally keeps only the top third,
//! which is how batch output decides what counts as a keyword.

use std::{cmp::Ordering, fmt};

use serde::Serialize;

/// A candidate phrase with its RAKE score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredKeyword {
    /// The phrase, trimmed and lowercased.
    pub phrase: String,
    /// Sum of the word scores of the phrase.
    pub score: f64,
}

impl ScoredKeyword {
    /// Creates a scored keyword.
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

impl fmt::Display for ScoredKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.phrase, self.score)
    }
}

/// How many ranked phrases to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncation {
    /// Keep every phrase.
    #[default]
    All,
    /// Keep the first `floor(len / 3)` phrases.
    TopThird,
}

/// Sorts keywords by score descending and applies the truncation.
///
/// The sort is stable, so phrases with equal scores keep the order they were first seen in.
pub fn rank_keywords(
    mut keywords: Vec<ScoredKeyword>,
    truncation: Truncation,
) -> Vec<ScoredKeyword> {
    keywords.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    if truncation == Truncation::TopThird {
        keywords.truncate(keywords.len() / 3);
    }
    keywords
}

#[cfg(test)]
mod test {
    use super::*;

    fn keywords(scores: &[(&str, f64)]) -> Vec<ScoredKeyword> {
        scores
            .iter()
            .map(|(p, s)| ScoredKeyword::new(*p, *s))
            .collect()
    }

    fn phrases(ranked: &[ScoredKeyword]) -> Vec<&str> {
        ranked.iter().map(|k| k.phrase.as_str()).collect()
    }

    #[test]
    fn ranks_descending_with_stable_ties() {
        let ranked = rank_keywords(
            keywords(&[
                ("compatibility", 1.0),
                ("systems", 1.0),
                ("linear constraints", 4.0),
            ]),
            Truncation::All,
        );
        assert_eq!(
            phrases(&ranked),
            ["linear constraints", "compatibility", "systems"]
        );
    }

    #[test]
    fn top_third_floors() {
        let input = keywords(&[
            ("a", 1.0),
            ("b", 5.0),
            ("c", 3.0),
            ("d", 2.0),
            ("e", 4.0),
            ("f", 0.5),
            ("g", 0.1),
        ]);
        let ranked = rank_keywords(input, Truncation::TopThird);
        assert_eq!(phrases(&ranked), ["b", "e"]);
    }

    #[test]
    fn top_third_of_fewer_than_three_is_empty() {
        let ranked = rank_keywords(keywords(&[("a", 1.0), ("b", 2.0)]), Truncation::TopThird);
        assert!(ranked.is_empty());
        assert!(rank_keywords(Vec::new(), Truncation::All).is_empty());
    }

    #[test]
    fn truncation_bounds_hold() {
        for len in 0..12 {
            let input: Vec<ScoredKeyword> = (0..len)
                .map(|i| ScoredKeyword::new(format!("p{i}"), f64::from(i % 4)))
                .collect();

            let all = rank_keywords(input.clone(), Truncation::All);
            let third = rank_keywords(input, Truncation::TopThird);

            assert_eq!(all.len(), len as usize);
            assert!(third.len() <= len as usize / 3);
            for ranked in [&all, &third] {
                assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }

    #[test]
    fn display_matches_repl_format() {
        assert_eq!(
            ScoredKeyword::new("linear constraints", 4.0).to_string(),
            "linear constraints : 4"
        );
    }
}
