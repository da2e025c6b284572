//! Word Pipeline Benchmarking Tool
//!
//! Measures each stage of the word pipeline on a real typing-test export,
//! so regressions show up as throughput numbers rather than hunches.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: lower-casing and punctuation blanking of the text column
//! 2. **Explode**: splitting normalized text into (sample, token) rows
//! 3. **Aggregate**: grouping token rows into per-word means
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/word_bench /path/to/type_racer.csv
//!
//! # Different text column
//! ./target/release/word_bench /path/to/races.csv Quote
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Explode ===
//! --------------------------------
//! Mode        : Explode
//! Elapsed     : 0.012 s
//! Throughput  : 0.412 GiB/s
//! Tokens      : 1_204_332
//! Tokens/sec  : 100_361_000
//! --------------------------------
//! ```
//!
//! Run with `--release`; debug builds are an order of magnitude slower.

use std::env;
use std::time::{Duration, Instant};

use typestat_core::analyzer::{TextNormalizer, Tokenizer};
use typestat_core::dataset::{Column, Dataset};
use typestat_core::words::{aggregate, explode, TokenTable};
use typestat_core::AnalysisError;
use typestat_types::{DEFAULT_MIN_OCCURRENCES, DEFAULT_TEXT_COLUMN};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), AnalysisError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: word_bench <path> [text column]");
        std::process::exit(1);
    }

    let path = &args[1];
    let text_column = args.get(2).map_or(DEFAULT_TEXT_COLUMN, String::as_str);

    println!("Loading file...");
    let raw = Dataset::from_path(path)?;
    let column = raw.require(text_column)?;
    let text_bytes: usize = column.non_null().map(|(_, t)| t.len()).sum();

    println!("Samples:   {}", fmt_count(raw.len() as u64));
    println!("Text size: {}\n", fmt_bytes(text_bytes as u64));

    bench_normalize(column, text_bytes);

    let mut normalized = raw.clone();
    normalized.normalize_column(text_column, &TextNormalizer::new())?;
    let column = normalized.require(text_column)?;

    bench_explode(column, text_bytes);
    bench_aggregate(&normalized, text_column, text_bytes)?;

    Ok(())
}

fn bench_normalize(column: &Column, text_bytes: usize) {
    let normalizer = TextNormalizer::new();
    let mut out = String::new();

    println!("=== Normalize ===");

    let mut run = || {
        for (_, text) in column.non_null() {
            normalizer.normalize_into(text, &mut out);
            std::hint::black_box(&out);
        }
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);

    print_perf("Normalize", text_bytes, elapsed, 0);
}

fn bench_explode(column: &Column, text_bytes: usize) {
    println!("=== Explode ===");

    warmup(|| {
        std::hint::black_box(explode(column, Tokenizer::WORDS).len());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = explode(column, Tokenizer::WORDS).len() as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Explode", text_bytes, elapsed, tokens);
}

fn bench_aggregate(
    dataset: &Dataset,
    text_column: &str,
    text_bytes: usize,
) -> Result<(), AnalysisError> {
    let tokens = TokenTable::join(dataset, text_column, Tokenizer::WORDS)?;

    println!("=== Aggregate ===");

    warmup(|| {
        std::hint::black_box(aggregate(&tokens, text_column, DEFAULT_MIN_OCCURRENCES).len());
    });

    let mut words = 0usize;
    let elapsed = measure(|| {
        words = aggregate(&tokens, text_column, DEFAULT_MIN_OCCURRENCES).len();
        std::hint::black_box(words);
    });

    print_perf("Aggregate", text_bytes, elapsed, tokens.len() as u64);
    println!("Words kept  : {}\n", fmt_count(words as u64));
    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
