//! rakex: rapid automatic keyword extraction
//!
//! rakex pulls key phrases out of free text with RAKE. Text is cut into candidate phrases at
//! stopwords (and, for part-of-speech tagged input, at stop tags), words are scored by how
//! many other words they co-occur with, and phrases are ranked by the sum of their word
//! scores.
//!
//! The binary extracts from arguments, files or stdin, processes whole directories of
//! documents in batch, and runs an interactive session that can reload its stopword list
//! without restarting.

#![warn(missing_docs)]

pub mod cli;
