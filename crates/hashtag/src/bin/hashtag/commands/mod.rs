pub mod repl;
pub mod suggest;

use std::path::PathBuf;

use anyhow::{Context, Result};
use hashtag::{load_strings, Trie, TrieBuilder};

/// Build the automaton from the dictionary files, reporting progress on
/// stderr.
pub fn build_trie(dicts: &[PathBuf]) -> Result<Trie> {
    let mut builder = TrieBuilder::new();
    let mut total = 0usize;

    for path in dicts {
        let added = load_strings(&mut builder, path)
            .with_context(|| format!("failed to load dictionary {}", path.display()))?;
        eprintln!("[INFO] loaded {} patterns from {}", added, path.display());
        total += added;
    }

    let trie = builder.build();
    eprintln!(
        "[INFO] built automaton: {} patterns, {} states, ~{}",
        total,
        trie.state_count(),
        format_bytes(trie.heap_bytes())
    );

    Ok(trie)
}

/// Human-readable size of the automaton tables.
pub fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= GB {
        format!("{:.2} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else {
        format!("{:.2} KB", bytes / KB)
    }
}
