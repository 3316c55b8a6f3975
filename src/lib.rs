//! Relex: rule-based relation and span extraction from dependency parses
//!
//! Takes dependency-parsed sentences (CoNLL-U or built in memory) and
//! extracts relation triples plus nominal, modifier, and date spans using
//! a declarative rule catalog compiled at startup.

pub mod annotations; // Per-run side-table: verb types, dates, rewrites
pub mod catalog; // The standard rule catalog
pub mod conllu; // CoNLL-U file parsing
pub mod corpus; // Sentence iteration over files and globs
pub mod extractor; // End-to-end pipeline
pub mod index; // Inverted indices for candidate lookup
pub mod matcher; // Tree pattern matching
pub mod parse; // Pattern DSL parser
pub mod pattern; // Compiled predicates, tree patterns, templates
pub mod rewrite; // Quantifier and relative pronoun resolution
pub mod sentence; // Validated dependency trees
pub mod sequence; // Linear template matching
pub mod spans; // Span extraction and overlap resolution
pub mod triples; // Triple building, suppression, and resolution

// Re-exports for convenience
pub use annotations::{Annotations, VerbType};
pub use catalog::Catalog;
pub use conllu::{ParseError, Reader};
pub use corpus::Corpus;
pub use extractor::{Extraction, Extractor, ExtractorConfig};
pub use parse::PatternError;
pub use sentence::{Sentence, SentenceError, Token, TokenId};
pub use spans::Span;
pub use triples::Triple;
