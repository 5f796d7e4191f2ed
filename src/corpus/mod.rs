//! Gutenberg Poetry corpus access.
//!
//! The corpus is a gzip-compressed JSON-lines file where each record carries
//! the Project Gutenberg id of its source text and one line of poetry.
//! [`open_corpus`] yields the raw lines lazily; [`LineStream`] turns them
//! into a filtered, deduplicated record stream.

mod stream;

pub use stream::{LineStream, StreamOptions};

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single corpus line with its source provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Project Gutenberg id of the text the line came from.
    #[serde(rename = "gutenberg_id")]
    pub id: u64,
    /// The line of poetry itself.
    #[serde(rename = "line")]
    pub text: String,
}

/// Open a gzip-compressed JSON-lines corpus for streaming.
///
/// Decompression is lazy; the file handle is released when the returned
/// iterator is dropped, whether the stream was exhausted or abandoned early.
pub fn open_corpus(path: impl AsRef<Path>) -> Result<impl Iterator<Item = io::Result<String>>> {
    let path = path.as_ref();
    let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    tracing::info!("Opened corpus {}", path.display());
    Ok(BufReader::new(GzDecoder::new(file)).lines())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn record_decodes_corpus_wire_format() {
        let record: LineRecord =
            serde_json::from_str(r#"{"gutenberg_id": 617, "line": "By the alders in the Summer,"}"#)
                .unwrap();
        assert_eq!(record.id, 617);
        assert_eq!(record.text, "By the alders in the Summer,");
    }

    #[test]
    fn open_corpus_missing_file_is_io_error() {
        let err = match open_corpus("/nonexistent/versesift-test.json-stream.gz") {
            Ok(_) => panic!("expected an error for a missing corpus"),
            Err(e) => e,
        };
        match err {
            Error::Io { path: Some(p), .. } => {
                assert!(p.to_string_lossy().contains("versesift-test"));
            }
            other => panic!("expected Io error with path, got {other:?}"),
        }
    }
}
