//! The `/complete` contract.
//!
//! Wire shapes and the synchronous operation behind the completion
//! endpoint. The types serialize to the exact JSON the service exposes, so
//! any transport (HTTP handler, CLI, test harness) can mount them as-is.

use std::time::Instant;

use hashtag_ac::Trie;
use hashtag_suggest::{HashTag, StringMatches};
use serde::{Deserialize, Serialize};

/// Body of a batched completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRequest {
    /// Strings to segment.
    pub inputs: Vec<String>,
    /// Maximum number of hashtag candidates per input.
    #[serde(default = "default_count")]
    pub count: usize,
    /// When set, responses include the raw dictionary matches.
    #[serde(default)]
    pub debug: bool,
}

fn default_count() -> usize {
    5
}

/// One dictionary match as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    /// Zero-based byte offset of the match.
    pub pos: u64,
    /// The matched dictionary word.
    pub word: String,
}

/// Completion result for a single input.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteResponse {
    /// The input string, echoed back.
    pub input: String,
    /// The requested candidate limit.
    pub count: usize,
    /// Hashtag candidates, best (fewest words) first, truncated to `count`.
    pub hashtags: Vec<HashTag>,
    /// Raw matches; present only when the request asked for debug output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchEntry>>,
    /// Time spent scanning the input, in nanoseconds.
    pub match_duration_ns: u64,
    /// Time spent enumerating and ranking coverings, in nanoseconds.
    pub suggest_duration_ns: u64,
}

/// Run the matcher and segmenter over `input`, keeping at most `count`
/// hashtag candidates.
pub fn complete(trie: &Trie, input: &str, count: usize, debug: bool) -> CompleteResponse {
    let start = Instant::now();
    let matches = trie.match_str(input);
    let match_duration_ns = start.elapsed().as_nanos() as u64;

    let start = Instant::now();
    let mut hashtags = StringMatches::new(input, &matches).suggest_hashtags();
    let suggest_duration_ns = start.elapsed().as_nanos() as u64;

    hashtags.truncate(count);

    let matches = debug.then(|| {
        matches
            .iter()
            .map(|m| MatchEntry {
                pos: m.pos() as u64,
                word: String::from_utf8_lossy(m.bytes()).into_owned(),
            })
            .collect()
    });

    CompleteResponse {
        input: input.to_string(),
        count,
        hashtags,
        matches,
        match_duration_ns,
        suggest_duration_ns,
    }
}

/// [`complete`] over every input of a batched request.
pub fn complete_batch(trie: &Trie, request: &CompleteRequest) -> Vec<CompleteResponse> {
    request
        .inputs
        .iter()
        .map(|input| complete(trie, input, request.count, request.debug))
        .collect()
}
