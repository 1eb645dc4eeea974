use std::path::PathBuf;

use anyhow::Result;

use super::build_trie;

pub fn run(
    dicts: &[PathBuf],
    count: usize,
    debug: bool,
    json: bool,
    inputs: &[String],
) -> Result<()> {
    let trie = build_trie(dicts)?;

    let responses: Vec<_> = inputs
        .iter()
        .map(|input| hashtag::complete(&trie, input, count, debug))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
        return Ok(());
    }

    for response in &responses {
        println!("{}", response.input);
        if let Some(matches) = &response.matches {
            for entry in matches {
                println!("  match: pos {} - {}", entry.pos, entry.word);
            }
        }
        for hashtag in &response.hashtags {
            println!("  {} - {}", hashtag.words, hashtag.text);
        }
    }

    Ok(())
}
