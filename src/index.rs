// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index: fields, postings, and the ingest path.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DENSE_IDS**: Document ids are assigned 0, 1, 2, … with no gaps.
//! 2. **POSTINGS_CONSISTENT**: Every token in a document entry's frequency
//!    map has a [`TermEntry`] whose doc list contains the document and whose
//!    position list for it is non-empty.
//! 3. **FREQUENCY_BOUND**: Summed per-document frequencies of a term within
//!    a field never exceed that field's cumulative token count.
//! 4. **REGISTRATION_UNIT**: A term registers one unit per (property, field)
//!    per document first occurrence; repeats in the same (doc, field) do not
//!    increment it.
//!
//! `contracts::check_index_well_formed` walks these in debug and test builds.
//!
//! # Concurrency
//!
//! Single writer, single reader, never interleaved. The lazily cached field
//! length-weights and the link-graph neighbor cache use single-threaded
//! interior mutability, so the index is deliberately not `Sync`; the
//! documented sync pattern is to build a fresh index and swap it wholesale.

use crate::analyzer;
use crate::correlate::{CorrelationStore, PREFIX_CLOSENESS};
use crate::graph::LinkGraph;
use crate::trie::Trie;
use crate::types::Document;
use std::cell::OnceCell;
use std::collections::HashMap;

/// Observer for tokens the index sees for the first time in a
/// (document, field), used by external spelling-dictionary builders.
/// One-way: implementations must not call back into the index.
pub trait WordSink {
    fn observe(&mut self, word: &str);
}

impl<F: FnMut(&str)> WordSink for F {
    fn observe(&mut self, word: &str) {
        self(word)
    }
}

/// One text channel with a static weight.
#[derive(Debug)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) weight: f64,
    pub(crate) documents: HashMap<usize, DocumentEntry>,
    /// Cumulative non-stop tokens ever absorbed by this field.
    pub(crate) total_tokens_seen: u64,
    length_weight: OnceCell<f64>,
}

impl Field {
    fn new(name: &str, weight: f64) -> Self {
        Field {
            name: name.to_string(),
            weight,
            documents: HashMap::new(),
            total_tokens_seen: 0,
            length_weight: OnceCell::new(),
        }
    }

    /// Documents with an entry here, divided by their summed distinct-token
    /// counts. Computed on first use after each mutation.
    pub(crate) fn length_weight(&self) -> f64 {
        *self.length_weight.get_or_init(|| {
            let distinct_tokens: usize = self
                .documents
                .values()
                .map(|entry| entry.term_frequencies.len())
                .sum();
            if distinct_tokens == 0 {
                0.0
            } else {
                self.documents.len() as f64 / distinct_tokens as f64
            }
        })
    }
}

/// Per-(document, field) record: owning property, post-stop-word token
/// count, and token frequencies.
#[derive(Debug)]
pub(crate) struct DocumentEntry {
    pub(crate) property: String,
    pub(crate) len: usize,
    pub(crate) term_frequencies: HashMap<String, u32>,
}

/// Postings for one index term.
#[derive(Debug, Default)]
pub struct TermEntry {
    /// Document ids containing the term. Append-only; a document repeats
    /// once per field it carries the term in.
    docs: Vec<usize>,
    /// Global token positions of the term, per document.
    positions: HashMap<usize, Vec<u32>>,
    /// Distinct (doc, field) registrations keyed property → field. This is
    /// the numerator of the term-in-language probability.
    times_appeared: HashMap<String, HashMap<String, u32>>,
}

impl TermEntry {
    /// Document ids containing this term, with per-field repeats.
    pub fn docs(&self) -> &[usize] {
        &self.docs
    }

    /// Ascending global positions of this term within a document.
    pub fn positions(&self, doc_id: usize) -> Option<&[u32]> {
        self.positions.get(&doc_id).map(Vec::as_slice)
    }

    /// Registration count for a (property, field) pair.
    pub fn times_appeared(&self, property: &str, field: &str) -> u32 {
        self.times_appeared
            .get(property)
            .and_then(|fields| fields.get(field))
            .copied()
            .unwrap_or(0)
    }

    fn register(&mut self, property: &str, field: &str, doc_id: usize) {
        self.docs.push(doc_id);
        *self
            .times_appeared
            .entry(property.to_string())
            .or_default()
            .entry(field.to_string())
            .or_insert(0) += 1;
    }

    fn push_position(&mut self, doc_id: usize, position: u32) {
        self.positions.entry(doc_id).or_default().push(position);
    }
}

/// The search engine: fields, postings, trie, correlations, and link graph.
///
/// Construct with a field list, feed it documents grouped under property
/// names, then query it through [`Index::search`]. `add` is total: it cannot
/// fail, so the index is never left half-updated.
#[derive(Debug)]
pub struct Index {
    pub(crate) fields: Vec<Field>,
    pub(crate) terms: HashMap<String, TermEntry>,
    pub(crate) trie: Trie,
    pub(crate) correlations: CorrelationStore,
    pub(crate) graph: LinkGraph,
    /// Static ranking multiplier per document, dense by doc id.
    pub(crate) document_weights: Vec<f64>,
    /// Global token position, advanced for every kept token plus once per
    /// field boundary so phrases cannot straddle fields.
    position: u32,
}

impl Index {
    /// Build an empty index over the given `(name, weight)` field list.
    /// Names outside the document's text channels never receive tokens.
    pub fn new(fields: &[(&str, f64)]) -> Self {
        Index {
            fields: fields.iter().map(|(name, weight)| Field::new(name, *weight)).collect(),
            terms: HashMap::new(),
            trie: Trie::new(),
            correlations: CorrelationStore::new(),
            graph: LinkGraph::new(),
            document_weights: Vec::new(),
            position: 0,
        }
    }

    /// Build an index over the canonical field set
    /// `{text:1, headings:5, title:10, tags:10}`.
    pub fn with_default_fields() -> Self {
        Index::new(crate::types::DEFAULT_FIELDS)
    }

    /// Register a synonym implication, see [`CorrelationStore::correlate`].
    pub fn correlate_word(&mut self, word: &str, synonym: &str, closeness: f64) {
        self.correlations.correlate(word, synonym, closeness);
    }

    /// Ingest a document under a property name, returning its assigned id.
    pub fn add(&mut self, property: &str, document: &Document) -> usize {
        self.add_with_sink(property, document, &mut |_: &str| {})
    }

    /// Ingest a document, reporting first-seen tokens to `sink`.
    pub fn add_with_sink(
        &mut self,
        property: &str,
        document: &Document,
        sink: &mut dyn WordSink,
    ) -> usize {
        let doc_id = self.document_weights.len();

        if let (Some(url), Some(links)) = (&document.url, &document.links) {
            self.graph.add_document(doc_id, url, links);
        }

        for field_index in 0..self.fields.len() {
            self.fields[field_index].length_weight.take();

            let Some(raw) = document.field_text(&self.fields[field_index].name) else {
                continue;
            };

            let mut entry = DocumentEntry {
                property: property.to_string(),
                len: 0,
                term_frequencies: HashMap::new(),
            };

            for token in analyzer::tokenize(raw, true) {
                if analyzer::is_stop_word(&token) {
                    continue;
                }

                let stored = match analyzer::split_correlation_prefix(&token) {
                    Some((_, stripped)) => {
                        // Marked tokens index verbatim; the stripped form
                        // becomes their synonym.
                        self.correlations.correlate(stripped, &token, PREFIX_CLOSENESS);
                        token.clone()
                    }
                    None => analyzer::stem(&token),
                };

                self.position += 1;
                entry.len += 1;
                let frequency = entry.term_frequencies.entry(stored.clone()).or_insert(0);
                *frequency += 1;

                let field_name = &self.fields[field_index].name;
                let term = self.terms.entry(stored.clone()).or_default();
                if *frequency == 1 {
                    term.register(property, field_name, doc_id);
                    self.trie.insert(&stored, doc_id);
                    sink.observe(&stored);
                }
                term.push_position(doc_id, self.position);
            }

            // Field boundary: one extra bump so the last token of this field
            // is never adjacent to the first token of the next.
            self.position += 1;

            let field = &mut self.fields[field_index];
            field.total_tokens_seen += entry.len as u64;
            field.documents.insert(doc_id, entry);
        }

        self.document_weights.push(document.weight.unwrap_or(1.0));
        debug_assert_eq!(doc_id + 1, self.document_weights.len());
        doc_id
    }

    /// Number of documents ingested.
    pub fn doc_count(&self) -> usize {
        self.document_weights.len()
    }

    /// Number of distinct index terms.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Exact-term postings lookup. Prefix expansion goes through the trie
    /// inside [`Index::search`]; this is the direct path.
    pub fn term_entry(&self, term: &str) -> Option<&TermEntry> {
        self.terms.get(term)
    }
}
