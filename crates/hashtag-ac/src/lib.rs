//! Aho-Corasick automaton for multi-pattern byte matching
//!
//! This crate builds a failure-function automaton from a dictionary of byte
//! patterns and scans inputs in a single linear pass, reporting every
//! occurrence of every pattern (overlaps included).
//!
//! # Design
//!
//! Construction uses an arena trie: nodes live in a `Vec` and all links
//! (parent edges, failure links, dictionary-suffix links) are `u32` indices
//! into it, never references. Index 0 is a sentinel meaning "no link / no
//! transition" and index 1 is the root, so a zero in the flat tables is
//! unambiguous and the scan loop needs no option type.
//!
//! `TrieBuilder::build` consumes the builder and emits an immutable [`Trie`]
//! holding four parallel tables (failure links, dictionary-suffix links,
//! pattern lengths, and a dense 256-way transition row per state). The trie
//! is read-only and can be shared across threads without coordination.
//!
//! # Example
//!
//! ```rust
//! use hashtag_ac::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.add_strings(["he", "she", "his", "hers"]);
//! let trie = builder.build();
//!
//! let matches = trie.match_str("ushers");
//! let words: Vec<&str> = matches
//!     .iter()
//!     .map(|m| std::str::from_utf8(m.bytes()).unwrap())
//!     .collect();
//! assert_eq!(words, ["she", "he", "hers"]);
//! ```

#![warn(missing_docs)]

mod builder;
mod trie;

pub mod validation;

pub use builder::TrieBuilder;
pub use trie::{Match, Trie};
