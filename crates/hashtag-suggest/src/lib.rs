//! Hashtag segmentation over Aho-Corasick matches
//!
//! Given an input string and the dictionary matches reported for it by
//! [`hashtag_ac::Trie::match_str`], this crate enumerates every way of
//! covering the input by concatenating dictionary words and single-byte
//! skips, and renders each covering as a hashtag candidate with interior
//! word boundaries capitalized ("thisisatest" becomes "ThisIsATest").
//!
//! Coverings are scored by the number of chunks used: a dictionary word is
//! one chunk, and so is every skipped byte, which ranks skip-heavy
//! candidates last. Enumeration is a memoized recursion over byte
//! positions, so a [`StringMatches`] is built per call and consumed by
//! [`StringMatches::suggest_hashtags`].
//!
//! Capitalization is ASCII-only: a chunk-leading byte is uppercased only if
//! it is an ASCII lowercase letter, which is adequate for hashtags and
//! keeps candidates byte-faithful to the input everywhere else.

#![warn(missing_docs)]

use hashtag_ac::Match;
use serde::Serialize;

/// One hashtag candidate: the rendered text and the number of chunks the
/// covering used (lower ranks better).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashTag {
    /// The input with the covering's word boundaries capitalized.
    #[serde(rename = "string")]
    pub text: String,
    /// Chunks in the covering: one per word, one per skipped byte.
    pub words: usize,
}

/// A covering of some suffix of the input, kept as raw bytes until the
/// final rendering so arbitrary match boundaries never split UTF-8 chars.
#[derive(Clone)]
struct Candidate {
    bytes: Vec<u8>,
    words: usize,
}

/// Per-input segmentation state: matches indexed by start position plus the
/// memoization tables of the covering recursion.
///
/// Single-use by design: [`suggest_hashtags`](Self::suggest_hashtags) takes
/// `self` by value.
pub struct StringMatches<'a> {
    input: &'a [u8],
    /// Match lengths per start position, longest first.
    by_pos: Vec<Vec<usize>>,
    done: Vec<bool>,
    cache: Vec<Vec<Candidate>>,
}

impl<'a> StringMatches<'a> {
    /// Index `matches` by start position for `input`.
    ///
    /// The matches must have been produced for this exact input; positions
    /// index into it directly.
    pub fn new(input: &'a str, matches: &[Match<'_>]) -> Self {
        let bytes = input.as_bytes();
        let len = bytes.len();

        let mut by_pos: Vec<Vec<usize>> = vec![Vec::new(); len];
        for m in matches {
            by_pos[m.pos()].push(m.bytes().len());
        }
        // Longest word first: the most salient covering is enumerated
        // first and wins ties in the final ordering.
        for lengths in &mut by_pos {
            lengths.sort_unstable_by(|a, b| b.cmp(a));
        }

        let mut done = vec![false; len + 1];
        let mut cache: Vec<Vec<Candidate>> = vec![Vec::new(); len + 1];
        cache[len].push(Candidate {
            bytes: Vec::new(),
            words: 0,
        });
        done[len] = true;

        Self {
            input: bytes,
            by_pos,
            done,
            cache,
        }
    }

    /// Matches starting at `pos`, longest first, as slices of the input.
    pub fn matches_at(&self, pos: usize) -> impl Iterator<Item = &[u8]> + '_ {
        self.by_pos
            .get(pos)
            .into_iter()
            .flatten()
            .map(move |&len| &self.input[pos..pos + len])
    }

    /// All coverings of the input, sorted by ascending chunk count.
    ///
    /// Never fails: an input with no matches at all is covered entirely by
    /// single-byte skips, and the empty input yields one empty candidate
    /// with zero chunks.
    pub fn suggest_hashtags(mut self) -> Vec<HashTag> {
        self.compute(0);

        let mut candidates = std::mem::take(&mut self.cache[0]);
        candidates.sort_by_key(|c| c.words);

        // A covering that opens with a dictionary word gets a leading
        // capital, unless that word already spans the whole input.
        let opens_with_word = self
            .by_pos
            .first()
            .is_some_and(|lengths| !lengths.is_empty());

        candidates
            .into_iter()
            .map(|mut c| {
                if opens_with_word && c.words > 1 {
                    if let Some(b) = c.bytes.first_mut() {
                        b.make_ascii_uppercase();
                    }
                }
                HashTag {
                    text: String::from_utf8_lossy(&c.bytes).into_owned(),
                    words: c.words,
                }
            })
            .collect()
    }

    /// Realize the coverings of the suffix starting at `pos` into the
    /// cache. Recursion is on strictly larger positions, so it terminates
    /// at the seeded entry for the input length.
    fn compute(&mut self, pos: usize) {
        if self.done[pos] {
            return;
        }

        let mut out = Vec::new();
        if self.by_pos[pos].is_empty() {
            // No word starts here: the byte becomes a chunk of its own.
            // The extra chunk downweights the covering, and an unknown
            // byte does not capitalize what follows it.
            self.compute(pos + 1);
            for tail in &self.cache[pos + 1] {
                out.push(Candidate {
                    bytes: join(&self.input[pos..pos + 1], &tail.bytes, false),
                    words: tail.words + 1,
                });
            }
        } else {
            let lengths = self.by_pos[pos].clone();
            for len in lengths {
                let next = pos + len;
                self.compute(next);
                for tail in &self.cache[next] {
                    out.push(Candidate {
                        bytes: join(&self.input[pos..next], &tail.bytes, true),
                        words: tail.words + 1,
                    });
                }
            }
        }

        self.cache[pos] = out;
        self.done[pos] = true;
    }
}

/// Concatenate a chunk with the covering of the remaining suffix,
/// uppercasing the first tail byte when the chunk is a dictionary word.
/// Uppercasing only touches ASCII lowercase bytes.
fn join(chunk: &[u8], tail: &[u8], capitalize_tail: bool) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(chunk.len() + tail.len());
    bytes.extend_from_slice(chunk);
    bytes.extend_from_slice(tail);
    if capitalize_tail {
        if let Some(b) = bytes.get_mut(chunk.len()) {
            b.make_ascii_uppercase();
        }
    }
    bytes
}
