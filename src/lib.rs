//! `VerseSift` - streaming filter and stanza arranger for the Gutenberg
//! Poetry corpus.
//!
//! The crate streams a gzip-compressed JSON-lines corpus of poetry lines,
//! rejecting titles, stage directions, and near-duplicates, and arranges a
//! chosen sequence of lines into stanzas for display. Line selection itself
//! (which lines make a poem) is left to the caller.

pub mod corpus;
pub mod error;
pub mod stanza;
pub mod text;
