//! Hashtag - dictionary matching and capitalized segmentations
//!
//! This crate ties the Aho-Corasick engine and the hashtag segmenter
//! together behind one API: load dictionaries, build the automaton once,
//! then turn inputs into ranked hashtag candidates.
//!
//! # Quick start
//!
//! ```rust
//! use hashtag::{complete, TrieBuilder};
//!
//! let mut builder = TrieBuilder::new();
//! builder.add_strings(["this", "is", "a", "test"]);
//! let trie = builder.build();
//!
//! let response = complete(&trie, "thisisatest", 5, false);
//! assert_eq!(response.hashtags[0].text, "ThisIsATest");
//! assert_eq!(response.hashtags[0].words, 4);
//! ```
//!
//! The automaton is immutable after `build()` and can serve any number of
//! concurrent callers; each [`complete`] call owns its per-input state.

#![warn(missing_docs)]

mod complete;
mod error;
mod loader;

pub use complete::{complete, complete_batch, CompleteRequest, CompleteResponse, MatchEntry};
pub use error::{HashtagError, Result};
pub use loader::{load_hex_patterns, load_strings, trie_from_files};

pub use hashtag_ac::{validation, Match, Trie, TrieBuilder};
pub use hashtag_suggest::{HashTag, StringMatches};
