//! Cutting text into candidate phrases.
//!
//! A [`Segmenter`] turns text into sentences; the compiled stopword pattern then cuts each
//! sentence into phrase fragments. Two strategies are provided: punctuation-based sentence
//! splitting and sentences rebuilt from a [`LanguageEngine`]'s tagged morphemes.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::{CompiledStopwords, LanguageEngine};

/// Characters that end a sentence in punctuation mode.
static SENTENCE_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?,;:\t\-"()'\u{2019}\u{2013}]"#).expect("sentence delimiter regex is valid")
});

/// Splits sentences into candidate phrases at every stopword or stop-tag match.
///
/// Fragments are trimmed and lowercased and empty fragments are dropped. Order follows the
/// sentences, then the position within each sentence.
pub fn split_candidates<S: AsRef<str>>(
    sentences: &[S],
    boundaries: &CompiledStopwords,
) -> Vec<String> {
    sentences
        .iter()
        .flat_map(|sentence| boundaries.split(sentence.as_ref()))
        .map(|fragment| fragment.trim().to_lowercase())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// A strategy for cutting text into sentences.
pub trait Segmenter: Send + Sync {
    /// Splits text into sentences ready for boundary matching.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Splits text into candidate phrases.
    fn segment(&self, text: &str, boundaries: &CompiledStopwords) -> Vec<String> {
        let sentences = self.sentences(text);
        let candidates = split_candidates(&sentences, boundaries);
        debug!(
            sentences = sentences.len(),
            candidates = candidates.len(),
            "segmented text"
        );
        candidates
    }
}

/// Splits sentences on punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl Segmenter for PunctuationSegmenter {
    fn sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_DELIMITERS
            .split(text)
            .map(str::to_string)
            .collect()
    }
}

/// Builds sentences from an engine's tagged morphemes.
///
/// A morpheme whose tag is a stop tag is replaced by the tag itself, and a run of such
/// morphemes collapses into one placeholder, so the stopword pattern cuts the phrase there.
#[derive(Debug)]
pub struct LinguisticSegmenter<E> {
    /// Sentence splitter and tagger.
    engine: E,
    /// Tags that end a phrase.
    stoptags: BTreeSet<String>,
}

impl<E: LanguageEngine> LinguisticSegmenter<E> {
    /// Creates a segmenter over `engine`.
    pub fn new(engine: E, stoptags: BTreeSet<String>) -> Self {
        Self { engine, stoptags }
    }

    /// Rebuilds one sentence, substituting stop-tagged morphemes.
    fn prepare(&self, sentence: &str) -> String {
        let mut tokens: Vec<&str> = Vec::new();
        let mut after_stoptag = false;
        let morphemes = self.engine.tag_morphemes(sentence);
        for morpheme in &morphemes {
            if self.stoptags.contains(&morpheme.tag) {
                if !after_stoptag {
                    tokens.push(&morpheme.tag);
                }
                after_stoptag = true;
            } else {
                tokens.push(&morpheme.surface);
                after_stoptag = false;
            }
        }
        tokens.join(" ")
    }
}

impl<E: LanguageEngine> Segmenter for LinguisticSegmenter<E> {
    fn sentences(&self, text: &str) -> Vec<String> {
        self.engine
            .segment_sentences(text)
            .iter()
            .filter(|sentence| !sentence.trim().is_empty())
            .map(|sentence| {
                let prepared = self.prepare(sentence);
                debug!(sentence = %prepared, "prepared sentence");
                prepared
            })
            .collect()
    }
}
