//! Field-weighted full-text search with link-analysis re-ranking.
//!
//! This crate indexes documentation corpora in memory and answers ranked
//! queries that combine a Dirichlet+ smoothed language-model score,
//! per-field weights, synonym expansion, optional phrase filtering, and
//! optional HITS re-ranking over the hyperlink graph of matched documents.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌─────────────┐
//! │ analyzer.rs│──▶│  index.rs  │──▶│  search.rs  │
//! │ (tokenize, │   │ (postings, │   │  (driver)   │
//! │  stemming) │   │  fields)   │   │             │
//! └────────────┘   └────────────┘   └─────────────┘
//!        │           │        │          │     │
//!        ▼           ▼        ▼          ▼     ▼
//!   ┌─────────┐ ┌────────┐ ┌────────┐ ┌───────┐ ┌─────────┐
//!   │ trie.rs │ │graph.rs│ │correla-│ │scoring│ │ hits.rs │
//!   │ (prefix │ │ (links)│ │ te.rs  │ │  .rs  │ │ (re-    │
//!   │  match) │ │        │ │        │ │       │ │  rank)  │
//!   └─────────┘ └────────┘ └────────┘ └───────┘ └─────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use neomys::{Document, Index};
//!
//! let mut index = Index::with_default_fields();
//! index.add(
//!     "manual",
//!     &Document {
//!         title: Some("mongodb atlas".to_string()),
//!         text: Some("cloud database".to_string()),
//!         ..Document::default()
//!     },
//! );
//!
//! let results = index.search_text("mongodb", false).unwrap();
//! assert_eq!(results[0].doc_id, 0);
//! ```
//!
//! # Execution model
//!
//! Single writer, single reader, never interleaved. Ingest and query are
//! synchronous and the index owns all postings; to refresh a corpus, build a
//! fresh index and swap it wholesale.

// Module declarations
mod analyzer;
pub mod contracts;
mod correlate;
mod graph;
mod hits;
mod index;
mod query;
mod scoring;
mod search;
pub mod testing;
mod trie;
mod types;

// Re-exports for public API
pub use analyzer::{is_stop_word, normalize, stem, tokenize};
pub use correlate::{CorrelationStore, PREFIX_CLOSENESS};
pub use graph::{normalize_url, LinkGraph, Neighbors};
pub use hits::{EPSILON, MAX_ITERATIONS};
pub use index::{Index, TermEntry, WordSink};
pub use query::{Query, MAX_QUERY_TERMS};
pub use scoring::{
    dirichlet_plus, sample_std_dev, DEFAULT_TERM_WEIGHT, DELTA, MANDATORY_TERM_BOOST,
    MAX_MATCHES, MIN_FIELD_TOKENS, MU,
};
pub use trie::Trie;
pub use types::{Document, Match, SearchError, DEFAULT_FIELDS};
