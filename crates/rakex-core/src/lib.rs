//! Keyword extraction with RAKE (Rapid Automatic Keyword Extraction).
//!
//! Text is cut into candidate phrases wherever a stopword (or, for tagged text, a stop tag)
//! appears. Each word is scored by `degree / frequency`, where degree counts the words it
//! co-occurs with inside candidates, and each phrase scores the sum of its words.
//!
//! ## Pipeline
//!
//! 1. **Segmentation**: a [`Segmenter`] splits text into sentences, either on punctuation
//!    ([`PunctuationSegmenter`]) or from a [`LanguageEngine`] ([`LinguisticSegmenter`])
//! 2. **Boundaries**: the [`CompiledStopwords`] pattern splits sentences into phrases
//! 3. **Statistics**: [`WordStats`] aggregates frequency and degree per word
//! 4. **Scoring**: [`WordScores`] and [`score_candidates`]
//! 5. **Ranking**: [`rank_keywords`] sorts and optionally keeps the top third
//!
//! [`RakeExtractor`] runs the whole pipeline and owns the reloadable [`StopwordStore`].

#![warn(missing_docs)]

mod engine;
mod error;
mod extractor;
mod rank;
mod score;
mod segment;
mod stats;
mod stopwords;

pub use engine::{LanguageEngine, Morpheme, TaggedTextEngine};
pub use error::Error;
pub use extractor::RakeExtractor;
pub use rank::{ScoredKeyword, Truncation, rank_keywords};
pub use score::{WordScores, score_candidates};
pub use segment::{LinguisticSegmenter, PunctuationSegmenter, Segmenter, split_candidates};
pub use stats::{Candidate, LengthRule, Tokenizer, WordStat, WordStats};
pub use stopwords::{CompiledStopwords, StopwordSet, StopwordSource, StopwordStore};
