//! Boundary to an external sentence segmenter and morphological tagger.
//!
//! Linguistic extraction needs sentences and part-of-speech tagged morphemes. The engine is
//! passed in explicitly so callers can plug in a real analyser or a test double.

/// One morpheme and its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form as it appears in the text.
    pub surface: String,
    /// Part-of-speech tag; empty when the analyser gave none.
    pub tag: String,
}

impl Morpheme {
    /// Creates a morpheme.
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }
}

/// Sentence segmentation and morpheme tagging.
pub trait LanguageEngine: Send + Sync {
    /// Splits text into sentences.
    fn segment_sentences(&self, text: &str) -> Vec<String>;

    /// Tags every morpheme of a sentence, in order.
    fn tag_morphemes(&self, sentence: &str) -> Vec<Morpheme>;
}

/// Reads text already analysed into `surface/TAG` tokens.
///
/// Each non-blank line is a sentence. Tokens are separated by whitespace and the tag follows
/// the last separator in the token, so surfaces may themselves contain the separator.
#[derive(Debug, Clone, Copy)]
pub struct TaggedTextEngine {
    /// Character between surface and tag.
    separator: char,
}

impl TaggedTextEngine {
    /// Separator used when none is given.
    pub const DEFAULT_SEPARATOR: char = '/';

    /// Creates an engine with a custom separator.
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}

impl Default for TaggedTextEngine {
    fn default() -> Self {
        Self::with_separator(Self::DEFAULT_SEPARATOR)
    }
}

impl LanguageEngine for TaggedTextEngine {
    fn segment_sentences(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn tag_morphemes(&self, sentence: &str) -> Vec<Morpheme> {
        sentence
            .split_whitespace()
            .map(|token| match token.rsplit_once(self.separator) {
                Some((surface, tag)) if !surface.is_empty() => Morpheme::new(surface, tag),
                _ => Morpheme::new(token, ""),
            })
            .collect()
    }
}
