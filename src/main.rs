//! `VerseSift` - filter a poetry corpus and print a stanzified found poem.
//!
//! Usage:
//!   `cargo run -- <corpus.json-stream.gz> [lines] [start] [modulo]`
//!
//! Streams the corpus, takes the first `lines` accepted lines (default 20),
//! and prints them arranged into stanzas.

// Command-line entry point - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::env;
use std::path::Path;
use std::process::exit;

use versesift::corpus::{open_corpus, LineStream, StreamOptions};
use versesift::error::Result;
use versesift::stanza::stanzify;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <corpus.json-stream.gz> [lines] [start] [modulo]", args[0]);
        exit(1);
    }

    let path = Path::new(&args[1]);
    let wanted: usize = args
        .get(2)
        .map_or(20, |s| s.parse().expect("lines must be a number"));
    let start_index: usize = args
        .get(3)
        .map_or(0, |s| s.parse().expect("start must be a number"));
    let modulo: usize = args
        .get(4)
        .map_or(1, |s| s.parse().expect("modulo must be a number"));

    let source = open_corpus(path).unwrap_or_else(|e| {
        eprintln!("{e}");
        exit(1);
    });

    // Plug a real content filter in here; the stream treats it as opaque.
    let options = StreamOptions { start_index, count: None, modulo };
    let stream = LineStream::new(source, |_: &str| false, options);

    let lines: Vec<String> = stream
        .take(wanted)
        .map(|record| record.map(|r| r.text))
        .collect::<Result<_>>()
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            exit(1);
        });

    let poem = stanzify(lines, &mut rand::thread_rng()).unwrap_or_else(|e| {
        eprintln!("{e}");
        exit(1);
    });

    for line in &poem {
        println!("{line}");
    }
}
