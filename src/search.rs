// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search driver.
//!
//! One query flows through here as: parse → correlation expansion → trie
//! prefix matching → per-field relevance accumulation → phrase filtering →
//! ranking (relevance order, or HITS when the caller opts in). All work is
//! synchronous; matches are allocated per call and returned to the caller.

use crate::analyzer;
use crate::hits;
use crate::index::Index;
use crate::query::Query;
use crate::scoring::{self, DEFAULT_TERM_WEIGHT, MANDATORY_TERM_BOOST, MAX_MATCHES, MIN_FIELD_TOKENS};
use crate::types::{Match, SearchError};
use std::collections::{HashMap, HashSet};

impl Index {
    /// Parse and run a raw query string.
    pub fn search_text(&self, raw: &str, use_hits: bool) -> Result<Vec<Match>, SearchError> {
        Ok(self.search(&Query::parse(raw)?, use_hits))
    }

    /// Run a parsed query, returning matches in descending score order,
    /// capped at [`MAX_MATCHES`].
    ///
    /// With `use_hits`, the hyperlink neighborhood of the matched documents
    /// is drawn into a base set and authority scores reshape the ranking;
    /// callers should only ask for it when their corpus declared links.
    pub fn search(&self, query: &Query, use_hits: bool) -> Vec<Match> {
        if query.is_empty() {
            return Vec::new();
        }

        let expansion = self.correlations.collect(query.terms());
        let mandatory: HashSet<String> = query
            .terms()
            .iter()
            .filter(|term| query.is_mandatory(term))
            .map(|term| analyzer::stem(&term.to_lowercase()))
            .collect();

        let mut matches = self.collect_candidates(query, &expansion);

        let query_len = query.terms().len() as f64;
        for m in &mut matches {
            m.relevancy_score = self.relevance_for(m, &expansion, &mandatory, query_len);
        }

        if !query.phrases().is_empty() {
            matches.retain(|m| self.phrases_match(query, m.doc_id));
        }

        if use_hits {
            hits::rank_with_hits(&self.graph, matches)
        } else {
            rank_by_relevance(matches)
        }
    }

    /// Prefix-match every expanded term through the trie, folding hits into
    /// one match per accepted document.
    fn collect_candidates(&self, query: &Query, expansion: &HashMap<String, f64>) -> Vec<Match> {
        let mut matches: Vec<Match> = Vec::new();
        let mut slot_by_doc: HashMap<usize, usize> = HashMap::new();

        for term in expansion.keys() {
            for (doc_id, stored_terms) in self.trie.search(term, true) {
                if !query.accepts(doc_id) {
                    continue;
                }
                let slot = *slot_by_doc.entry(doc_id).or_insert_with(|| {
                    matches.push(Match::new(doc_id));
                    matches.len() - 1
                });
                matches[slot].terms.extend(stored_terms);
            }
        }

        matches
    }

    /// Dirichlet+ relevance of one match, accumulated over every matched
    /// term in every field the document has an entry for.
    fn relevance_for(
        &self,
        m: &Match,
        expansion: &HashMap<String, f64>,
        mandatory: &HashSet<String>,
        query_len: f64,
    ) -> f64 {
        let document_weight = self.document_weights[m.doc_id];
        let mut relevancy = 0.0;

        for field in &self.fields {
            let Some(entry) = field.documents.get(&m.doc_id) else {
                continue;
            };
            let doc_len = entry.len as f64;
            let field_tokens = (field.total_tokens_seen as f64).max(MIN_FIELD_TOKENS);

            for term in &m.terms {
                let Some(term_entry) = self.terms.get(term) else {
                    continue;
                };
                let appearances = term_entry.times_appeared(&entry.property, &field.name);
                if appearances == 0 {
                    continue;
                }
                let term_prob = f64::from(appearances) / field_tokens;
                let term_frequency =
                    f64::from(entry.term_frequencies.get(term).copied().unwrap_or(0));

                let mut term_weight =
                    expansion.get(term).copied().unwrap_or(DEFAULT_TERM_WEIGHT);
                if mandatory.contains(term) {
                    term_weight *= MANDATORY_TERM_BOOST;
                }

                relevancy +=
                    scoring::dirichlet_plus(term_weight, term_frequency, term_prob, doc_len, query_len)
                        * field.weight
                        * field.length_weight()
                        * document_weight;
            }
        }

        relevancy
    }

    /// Every phrase must appear with strictly consecutive positions in the
    /// document. Terms with no postings in the document fail the phrase.
    fn phrases_match(&self, query: &Query, doc_id: usize) -> bool {
        query.phrases().iter().all(|phrase| {
            let mut position_lists: Vec<&[u32]> = Vec::with_capacity(phrase.len());
            for term in phrase {
                let key = analyzer::stem(&term.to_lowercase());
                match self.terms.get(&key).and_then(|entry| entry.positions(doc_id)) {
                    Some(positions) if !positions.is_empty() => position_lists.push(positions),
                    _ => return false,
                }
            }
            scoring::has_consecutive_run(&position_lists)
        })
    }
}

/// Relevance-only ranking for queries that skip HITS.
fn rank_by_relevance(mut matches: Vec<Match>) -> Vec<Match> {
    for m in &mut matches {
        m.score = m.relevancy_score;
    }
    matches.sort_by(|a, b| {
        b.relevancy_score
            .partial_cmp(&a.relevancy_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(MAX_MATCHES);
    matches
}
