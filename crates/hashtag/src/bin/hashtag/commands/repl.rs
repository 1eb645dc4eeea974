use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use hashtag::StringMatches;

use super::build_trie;

pub fn run(dicts: &[PathBuf], count: usize) -> Result<()> {
    let trie = build_trie(dicts)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let start = Instant::now();
        let matches = trie.match_str(input);
        println!(
            "matching took {} ns for {} matches",
            start.elapsed().as_nanos(),
            matches.len()
        );
        for m in &matches {
            println!(" pos: {} - {}", m.pos(), String::from_utf8_lossy(m.bytes()));
        }

        let start = Instant::now();
        let hashtags = StringMatches::new(input, &matches).suggest_hashtags();
        println!(
            "suggesting took {} ns for {} hashtags",
            start.elapsed().as_nanos(),
            hashtags.len()
        );
        for hashtag in hashtags.iter().take(count) {
            println!("{} - {}", hashtag.words, hashtag.text);
        }
    }

    Ok(())
}
