//! Streaming filter pipeline over raw corpus lines.

use std::collections::HashSet;
use std::io;

use crate::corpus::LineRecord;
use crate::error::{Error, Result};
use crate::text;

/// Windowing and sampling controls for a [`LineStream`].
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions {
    /// First raw corpus index to consider.
    pub start_index: usize,
    /// When set, stop after considering index `start_index + count`.
    ///
    /// The bound is inclusive, so `count + 1` indices are considered.
    pub count: Option<usize>,
    /// Only consider indices divisible by this value (a cheap sampling
    /// proxy). Values below 1 are treated as 1.
    pub modulo: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self { start_index: 0, count: None, modulo: 1 }
    }
}

/// A filtered, deduplicated stream of corpus records.
///
/// Wraps any iterator of raw JSON lines and yields the records that survive
/// the rejection rules: the blacklist predicate, title-likeness, bracket
/// characters, a leading digit, fewer than three tokens, and lines whose
/// lowercased token sequence was already seen during this stream. Rejections
/// are silent; only io and decode failures surface as errors, and either one
/// ends the stream.
///
/// The dedup set belongs to one stream instance and is dropped with it.
pub struct LineStream<I, F> {
    source: I,
    blacklist: F,
    options: StreamOptions,
    index: usize,
    seen: HashSet<Vec<String>>,
    done: bool,
}

impl<I, F> LineStream<I, F>
where
    I: Iterator<Item = io::Result<String>>,
    F: Fn(&str) -> bool,
{
    /// Create a stream over `source`, rejecting lines the `blacklist`
    /// predicate flags.
    pub fn new(source: I, blacklist: F, options: StreamOptions) -> Self {
        let options = StreamOptions { modulo: options.modulo.max(1), ..options };
        Self {
            source,
            blacklist,
            options,
            index: 0,
            seen: HashSet::new(),
            done: false,
        }
    }

    /// Number of distinct lines accepted so far.
    pub fn accepted(&self) -> usize {
        self.seen.len()
    }
}

impl<I, F> Iterator for LineStream<I, F>
where
    I: Iterator<Item = io::Result<String>>,
    F: Fn(&str) -> bool,
{
    type Item = Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let raw = match self.source.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(Error::from(e)));
                }
                None => {
                    self.done = true;
                    tracing::debug!(
                        "Corpus exhausted after {} raw lines, {} accepted",
                        self.index,
                        self.seen.len()
                    );
                    return None;
                }
            };
            let index = self.index;
            self.index += 1;

            if index < self.options.start_index {
                continue;
            }
            if let Some(count) = self.options.count {
                // Inclusive bound: count + 1 indices are considered.
                if index > self.options.start_index + count {
                    self.done = true;
                    return None;
                }
            }
            if index % self.options.modulo != 0 {
                continue;
            }

            let record: LineRecord = match serde_json::from_str(&raw) {
                Ok(record) => record,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::decode(index, e)));
                }
            };

            // Disqualifying characteristics: flagged content, looks like a
            // title, has brackets, starts with a digit.
            if (self.blacklist)(&record.text) {
                continue;
            }
            if text::looks_like_title(&record.text) {
                continue;
            }
            if record.text.contains(['[', ']']) {
                continue;
            }
            if record.text.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }

            let fingerprint: Vec<String> = text::tokenize(&record.text)
                .into_iter()
                .map(str::to_lowercase)
                .collect();

            // No short lines, as they're not very interesting.
            if fingerprint.len() <= 2 {
                continue;
            }
            // Skip if we've already seen something like this.
            if !self.seen.insert(fingerprint) {
                continue;
            }

            return Some(Ok(record));
        }
    }
}
