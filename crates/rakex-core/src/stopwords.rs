//! Stopword loading and boundary pattern compilation.
//!
//! Stopwords (and, in linguistic mode, stop tags) mark where candidate phrases end.
//! They are compiled into a single case-insensitive pattern of word-boundary-anchored
//! alternatives. The compiled value is immutable; [`StopwordStore`] swaps in a freshly
//! compiled value on reload so an extraction in flight keeps the snapshot it started with.

use std::{
    collections::BTreeSet,
    fmt, fs,
    path::PathBuf,
    sync::{Arc, PoisonError, RwLock},
};

use regex::{Regex, RegexBuilder};
use stop_words::LANGUAGE;
use tracing::{info, warn};

use crate::Error;

/// Upper bound for the compiled pattern; large stopword lists need more than the default.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// An ordered list of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    /// Stopwords in file order; never empty strings.
    words: Vec<String>,
}

impl StopwordSet {
    /// Parses a stopword file body, one entry per line.
    ///
    /// Empty lines and lines starting with `#` are skipped. Entries are trimmed and
    /// lowercased.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(
            contents
                .lines()
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Builds a set from individual words, trimming and lowercasing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The English list from the `stop-words` crate (Stopwords ISO).
    pub fn english() -> Self {
        Self::from_words(stop_words::get(LANGUAGE::English))
    }

    /// Returns the stopwords in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are listed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where a [`StopwordStore`] loads its stopwords from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    /// A stopword file, re-read on every reload.
    File(PathBuf),
    /// The built-in English list.
    English,
    /// A fixed list supplied by the caller.
    Inline(Vec<String>),
}

impl StopwordSource {
    /// Loads the stopword set.
    ///
    /// Returns an error if a stopword file is missing or unreadable.
    pub fn load(&self) -> Result<StopwordSet, Error> {
        match self {
            Self::File(path) => {
                let contents = fs::read_to_string(path).map_err(|source| Error::ReadStopwords {
                    path: path.clone(),
                    source,
                })?;
                Ok(StopwordSet::parse(&contents))
            }
            Self::English => Ok(StopwordSet::english()),
            Self::Inline(words) => Ok(StopwordSet::from_words(words)),
        }
    }
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::English => write!(f, "built-in English list"),
            Self::Inline(words) => write!(f, "inline list ({} words)", words.len()),
        }
    }
}

/// The compiled phrase-boundary pattern.
#[derive(Debug, Clone)]
pub struct CompiledStopwords {
    /// Alternation of `\b<word>\b` entries; `None` when there is nothing to match.
    pattern: Option<Regex>,
    /// Number of stopwords compiled in.
    stopword_count: usize,
    /// Number of stop tags compiled in.
    stoptag_count: usize,
}

impl CompiledStopwords {
    /// Compiles stopwords followed by stop tags into one case-insensitive pattern.
    ///
    /// Every entry is escaped and anchored on word boundaries. An empty stopword list is
    /// logged as a warning; with no stop tags either, the pattern matches nothing and each
    /// sentence becomes a single candidate.
    pub fn compile(stopwords: &StopwordSet, stoptags: &BTreeSet<String>) -> Result<Self, Error> {
        if stopwords.is_empty() {
            warn!("no stopwords loaded, phrases will only break at sentence boundaries");
        }

        let alternatives: Vec<String> = stopwords
            .words()
            .iter()
            .chain(stoptags)
            .map(|entry| format!(r"\b{}\b", regex::escape(entry)))
            .collect();

        let pattern = if alternatives.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&alternatives.join("|"))
                    .case_insensitive(true)
                    .size_limit(PATTERN_SIZE_LIMIT)
                    .build()?,
            )
        };

        Ok(Self {
            pattern,
            stopword_count: stopwords.len(),
            stoptag_count: stoptags.len(),
        })
    }

    /// Splits a sentence at every boundary match, returning the raw fragments in order.
    pub fn split<'t>(&self, sentence: &'t str) -> Vec<&'t str> {
        match &self.pattern {
            Some(pattern) => pattern.split(sentence).collect(),
            None => vec![sentence],
        }
    }

    /// Returns true if the text contains a stopword or stop tag.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }

    /// Number of stopwords in the pattern.
    pub fn stopword_count(&self) -> usize {
        self.stopword_count
    }

    /// Number of stop tags in the pattern.
    pub fn stoptag_count(&self) -> usize {
        self.stoptag_count
    }
}

/// Holds the current compiled pattern and replaces it wholesale on reload.
#[derive(Debug)]
pub struct StopwordStore {
    /// Where stopwords are (re)loaded from.
    source: StopwordSource,
    /// Stop tags compiled alongside the stopwords; fixed for the store's lifetime.
    stoptags: BTreeSet<String>,
    /// Current immutable pattern.
    current: RwLock<Arc<CompiledStopwords>>,
}

impl StopwordStore {
    /// Loads and compiles stopwords from `source`.
    ///
    /// Fails if the source cannot be read; the caller decides whether that is fatal.
    pub fn open<I, S>(source: StopwordSource, stoptags: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stoptags: BTreeSet<String> = stoptags.into_iter().map(Into::into).collect();
        let compiled = load_compiled(&source, &stoptags)?;
        Ok(Self {
            source,
            stoptags,
            current: RwLock::new(Arc::new(compiled)),
        })
    }

    /// Returns the current pattern. Hold on to it for the whole extraction.
    pub fn current(&self) -> Arc<CompiledStopwords> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Re-reads the source and swaps in the new pattern.
    ///
    /// On failure the previous pattern stays in effect. Returns the number of stopwords
    /// now loaded.
    pub fn reload(&self) -> Result<usize, Error> {
        info!(source = %self.source, "reloading stopwords");
        let compiled = load_compiled(&self.source, &self.stoptags)?;
        let count = compiled.stopword_count();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(compiled);
        info!(count, "stopwords reloaded");
        Ok(count)
    }

    /// Returns the stopword source.
    pub fn source(&self) -> &StopwordSource {
        &self.source
    }

    /// Returns the stop tags.
    pub fn stoptags(&self) -> &BTreeSet<String> {
        &self.stoptags
    }
}

/// Loads the stopword set from `source` and compiles it with the stop tags.
fn load_compiled(
    source: &StopwordSource,
    stoptags: &BTreeSet<String>,
) -> Result<CompiledStopwords, Error> {
    info!(source = %source, "loading stopwords");
    let stopwords = source.load()?;
    let compiled = CompiledStopwords::compile(&stopwords, stoptags)?;
    info!(
        stopwords = compiled.stopword_count(),
        stoptags = compiled.stoptag_count(),
        "stopword pattern compiled"
    );
    Ok(compiled)
}
