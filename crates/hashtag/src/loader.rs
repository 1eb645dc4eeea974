//! Dictionary file loading.
//!
//! Dictionaries are plain text, one pattern per line. Surrounding
//! whitespace is trimmed and blank lines are skipped. The hex variant
//! decodes each line to raw bytes and fails the whole load on the first
//! malformed line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashtag_ac::{Trie, TrieBuilder};

use crate::error::{HashtagError, Result};

/// Load string patterns from `path` into `builder`, one per line.
///
/// Returns the number of patterns added.
pub fn load_strings(builder: &mut TrieBuilder, path: impl AsRef<Path>) -> Result<usize> {
    let reader = BufReader::new(File::open(path.as_ref())?);

    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        let pattern = line.trim();
        if !pattern.is_empty() {
            builder.add_string(pattern);
            added += 1;
        }
    }

    Ok(added)
}

/// Load byte patterns from `path` into `builder`, one hex-encoded pattern
/// per line.
///
/// Returns the number of patterns added. A line that is not valid hex is a
/// fatal [`HashtagError::MalformedPattern`].
pub fn load_hex_patterns(builder: &mut TrieBuilder, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut added = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let pattern = decode_hex(text).map_err(|reason| HashtagError::MalformedPattern {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        })?;
        builder.add_pattern(&pattern);
        added += 1;
    }

    Ok(added)
}

/// Build an automaton from one or more string dictionaries.
pub fn trie_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Trie> {
    let mut builder = TrieBuilder::new();
    for path in paths {
        load_strings(&mut builder, path)?;
    }
    Ok(builder.build())
}

fn decode_hex(text: &str) -> std::result::Result<Vec<u8>, String> {
    if text.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", text.len()));
    }

    let mut bytes = Vec::with_capacity(text.len() / 2);
    for i in (0..text.len()).step_by(2) {
        let pair = text
            .get(i..i + 2)
            .ok_or_else(|| "hex digits are not ASCII".to_string())?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| format!("invalid hex digits {:?}", pair))?;
        bytes.push(byte);
    }
    Ok(bytes)
}
