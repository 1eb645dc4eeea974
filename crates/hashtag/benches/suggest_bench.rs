use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use hashtag::{StringMatches, TrieBuilder};

/// Deterministic pronounceable words, unique per index.
fn generate_words(count: usize) -> Vec<String> {
    let syllables = [
        "ba", "be", "bi", "bo", "bu", "da", "de", "di", "do", "du", "ka", "ke", "ki", "ko", "ku",
        "la", "le", "li", "lo", "lu", "ma", "me", "mi", "mo", "mu", "na", "ne", "ni", "no", "nu",
        "ra", "re", "ri", "ro", "ru", "sa", "se", "si", "so", "su", "ta", "te", "ti", "to", "tu",
    ];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let a = syllables[i % syllables.len()];
        let b = syllables[(i / syllables.len()) % syllables.len()];
        let c = syllables[(i / (syllables.len() * syllables.len())) % syllables.len()];
        words.push(format!("{a}{b}{c}"));
    }
    words
}

/// Concatenate dictionary words (no separators, like a hashtag) until the
/// text reaches `size` bytes.
fn generate_text(words: &[String], size: usize) -> String {
    let mut text = String::with_capacity(size + 8);
    let mut i = 0;
    while text.len() < size {
        text.push_str(&words[i % words.len()]);
        i += 1;
    }
    text
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &count in &[1_000usize, 10_000] {
        let words = generate_words(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter(|| {
                let mut builder = TrieBuilder::new();
                builder.add_strings(words);
                black_box(builder.build())
            })
        });
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let words = generate_words(5_000);
    let mut builder = TrieBuilder::new();
    builder.add_strings(&words);
    let trie = builder.build();

    let mut group = c.benchmark_group("match");
    for &size in &[1usize << 10, 1 << 16] {
        let text = generate_text(&words, size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(trie.match_str(text)))
        });
    }
    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let mut builder = TrieBuilder::new();
    builder.add_strings(["this", "is", "a", "test", "his", "at", "ate", "i", "sat"]);
    let trie = builder.build();

    let mut group = c.benchmark_group("suggest");
    for input in ["thisisatest", "thisisatestthisisatest"] {
        group.bench_function(BenchmarkId::from_parameter(input.len()), |b| {
            b.iter(|| {
                let matches = trie.match_str(input);
                black_box(StringMatches::new(input, &matches).suggest_hashtags())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_match, bench_suggest);
criterion_main!(benches);
