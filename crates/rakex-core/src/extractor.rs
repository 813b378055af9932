//! The RAKE pipeline.
//!
//! [`RakeExtractor`] ties a segmentation strategy to the shared scoring path: candidates are
//! tokenized once, word statistics are aggregated per call, and phrases are scored from the
//! resulting word scores. All per-call state is local, so one extractor can serve concurrent
//! callers while stopwords are reloaded underneath it.

use rakex_config::{ExtractMode, ExtractSettings};
use tracing::debug;

use crate::{
    Candidate, Error, LanguageEngine, LinguisticSegmenter, PunctuationSegmenter, ScoredKeyword,
    Segmenter, StopwordSource, StopwordStore, Tokenizer, Truncation, WordScores, WordStats,
    rank_keywords, score_candidates,
};

/// Extracts and scores keyword phrases.
pub struct RakeExtractor {
    /// Source of the phrase-boundary pattern.
    stopwords: StopwordStore,
    /// Sentence strategy.
    segmenter: Box<dyn Segmenter>,
    /// Splits candidates into scoring words.
    tokenizer: Tokenizer,
    /// Phrases with fewer characters are not scored.
    min_token_len: usize,
}

impl RakeExtractor {
    /// Creates an extractor from its parts.
    pub fn new(
        stopwords: StopwordStore,
        segmenter: Box<dyn Segmenter>,
        tokenizer: Tokenizer,
        min_token_len: usize,
    ) -> Self {
        Self {
            stopwords,
            segmenter,
            tokenizer,
            min_token_len,
        }
    }

    /// Punctuation-split sentences, stopword-split phrases.
    pub fn simple(stopwords: StopwordStore, min_word_len: usize, min_token_len: usize) -> Self {
        Self::new(
            stopwords,
            Box::new(PunctuationSegmenter),
            Tokenizer::simple(min_word_len),
            min_token_len,
        )
    }

    /// Sentences and tags from `engine`; the store's stop tags break phrases too.
    pub fn linguistic<E: LanguageEngine + 'static>(
        stopwords: StopwordStore,
        engine: E,
        min_word_len: usize,
        min_token_len: usize,
    ) -> Self {
        let segmenter = LinguisticSegmenter::new(engine, stopwords.stoptags().clone());
        Self::new(
            stopwords,
            Box::new(segmenter),
            Tokenizer::linguistic(min_word_len),
            min_token_len,
        )
    }

    /// Builds an extractor from configuration.
    ///
    /// Stopwords come from the configured file, or the built-in English list when none is
    /// set. Stop tags apply only in linguistic mode, and `engine` is unused in simple mode.
    pub fn from_settings<E: LanguageEngine + 'static>(
        settings: &ExtractSettings,
        engine: E,
    ) -> Result<Self, Error> {
        let source = settings
            .stopwords
            .clone()
            .map_or(StopwordSource::English, StopwordSource::File);

        match settings.mode {
            ExtractMode::Simple => {
                let store = StopwordStore::open(source, Vec::<String>::new())?;
                Ok(Self::simple(
                    store,
                    settings.min_word_len,
                    settings.min_token_len,
                ))
            }
            ExtractMode::Linguistic => {
                let store = StopwordStore::open(source, settings.stoptags.iter().cloned())?;
                Ok(Self::linguistic(
                    store,
                    engine,
                    settings.min_word_len,
                    settings.min_token_len,
                ))
            }
        }
    }

    /// Scores every distinct candidate phrase in `text`, in first-seen order.
    ///
    /// One stopword snapshot is used for the whole call, so a concurrent reload never mixes
    /// two patterns within a result.
    pub fn extract(&self, text: &str) -> Vec<ScoredKeyword> {
        let boundaries = self.stopwords.current();
        let candidates: Vec<Candidate> = self
            .segmenter
            .segment(text, &boundaries)
            .into_iter()
            .map(|phrase| Candidate::new(phrase, &self.tokenizer))
            .collect();

        let stats = WordStats::aggregate(&candidates);
        let scores = WordScores::from_stats(&stats);
        let scored = score_candidates(&candidates, &scores, self.min_token_len);
        debug!(
            candidates = candidates.len(),
            words = stats.len(),
            phrases = scored.len(),
            "extracted keywords"
        );
        scored
    }

    /// Extracts and ranks keywords.
    pub fn extract_ranked(&self, text: &str, truncation: Truncation) -> Vec<ScoredKeyword> {
        rank_keywords(self.extract(text), truncation)
    }

    /// Reloads stopwords from their source, keeping the old pattern on failure.
    pub fn reload_stopwords(&self) -> Result<usize, Error> {
        self.stopwords.reload()
    }

    /// Returns the stopword store.
    pub fn stopwords(&self) -> &StopwordStore {
        &self.stopwords
    }
}
