//! Word frequency and degree statistics over candidate phrases.

use std::collections::HashMap;

/// How a word's length is compared with the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Keep words with at least `min_word_len` characters.
    AtLeast,
    /// Keep words with more than `min_word_len` characters.
    Longer,
}

/// Splits candidate phrases into scoring words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    /// Length threshold in characters.
    pub min_word_len: usize,
    /// Comparison applied against `min_word_len`.
    pub length_rule: LengthRule,
    /// Drop tokens that are a single digit or a lone `.`.
    pub skip_numeric: bool,
}

impl Tokenizer {
    /// Tokenizer for linguistic mode.
    pub fn linguistic(min_word_len: usize) -> Self {
        Self {
            min_word_len,
            length_rule: LengthRule::AtLeast,
            skip_numeric: false,
        }
    }

    /// Tokenizer for punctuation mode.
    pub fn simple(min_word_len: usize) -> Self {
        Self {
            min_word_len,
            length_rule: LengthRule::Longer,
            skip_numeric: true,
        }
    }

    /// Splits a phrase on whitespace and drops words that fail the filters.
    pub fn tokenize(&self, phrase: &str) -> Vec<String> {
        phrase
            .split_whitespace()
            .filter(|word| self.keeps(word))
            .map(str::to_string)
            .collect()
    }

    /// Checks a single word against the length and numeric filters.
    fn keeps(&self, word: &str) -> bool {
        let len = word.chars().count();
        let long_enough = match self.length_rule {
            LengthRule::AtLeast => len >= self.min_word_len,
            LengthRule::Longer => len > self.min_word_len,
        };
        long_enough && !(self.skip_numeric && is_single_numeric(word))
    }
}

/// True for a token made of exactly one ASCII digit or `.`.
fn is_single_numeric(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_digit() || c == '.'
    )
}

/// A candidate phrase and the words it scores with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Trimmed, lowercased phrase.
    pub phrase: String,
    /// Words kept by the tokenizer, in order.
    pub words: Vec<String>,
}

impl Candidate {
    /// Tokenizes a phrase.
    pub fn new(phrase: String, tokenizer: &Tokenizer) -> Self {
        let words = tokenizer.tokenize(&phrase);
        Self { phrase, words }
    }
}

/// Frequency and degree of one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStat {
    /// Number of occurrences across all candidates.
    pub frequency: usize,
    /// Co-occurrence degree, including the word's own frequency.
    pub degree: usize,
}

/// Per-word statistics for one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    /// Statistics keyed by word.
    words: HashMap<String, WordStat>,
}

impl WordStats {
    /// Aggregates frequency and degree over every word occurrence.
    ///
    /// A word in an `n`-word candidate gains `n - 1` degree per occurrence; once all
    /// candidates are counted, each word's frequency is added to its degree.
    pub fn aggregate(candidates: &[Candidate]) -> Self {
        let mut words: HashMap<String, WordStat> = HashMap::new();
        for candidate in candidates {
            let co_occurring = candidate.words.len().saturating_sub(1);
            for word in &candidate.words {
                let stat = words.entry(word.clone()).or_default();
                stat.frequency += 1;
                stat.degree += co_occurring;
            }
        }
        for stat in words.values_mut() {
            stat.degree += stat.frequency;
        }
        Self { words }
    }

    /// Returns the statistics for a word.
    pub fn get(&self, word: &str) -> Option<WordStat> {
        self.words.get(word).copied()
    }

    /// Iterates over all words and their statistics.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WordStat)> {
        self.words.iter().map(|(w, s)| (w.as_str(), *s))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words were counted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
