// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted synonym store and query-term expansion.
//!
//! A correlation is a one-way implication from a token (or token bigram) to
//! another token, with a closeness in (0, 1]. At query time each term is
//! expanded through the store; the expanded weights feed straight into the
//! relevance model as term weights.

use crate::analyzer;
use std::collections::HashMap;

/// Closeness assigned to synonyms derived from correlation markers
/// (`%%word`, `%word`, `$word`) during ingest.
pub const PREFIX_CLOSENESS: f64 = 0.9;

/// Token and token-bigram synonym table.
#[derive(Debug, Default)]
pub struct CorrelationStore {
    correlations: HashMap<String, Vec<(String, f64)>>,
}

impl CorrelationStore {
    pub fn new() -> Self {
        CorrelationStore::default()
    }

    /// Record that `word` implies `synonym` at the given closeness.
    ///
    /// `word` may span several tokens; it is tokenized (markers retained),
    /// stemmed per token, and rejoined with single spaces to form the key.
    /// Entries append on conflict, no deduplication.
    pub fn correlate(&mut self, word: &str, synonym: &str, closeness: f64) {
        let key = analyzer::tokenize(word, true)
            .iter()
            .map(|t| analyzer::stem(t))
            .collect::<Vec<_>>()
            .join(" ");
        if key.is_empty() {
            return;
        }
        let synonym = analyzer::stem(&synonym.to_lowercase());
        self.correlations.entry(key).or_default().push((synonym, closeness));
    }

    /// Expand query terms into a stemmed-term → weight map.
    ///
    /// Seeds every stemmed query term at 1.0, probes single stems and
    /// adjacent-stem bigrams, keeping the maximum weight per synonym, then
    /// makes one more pass over the expanded set so single-token correlations
    /// chain one hop. Bigram hops are not chased recursively.
    pub fn collect(&self, terms: &[String]) -> HashMap<String, f64> {
        let stems: Vec<String> = terms
            .iter()
            .map(|t| analyzer::stem(&t.to_lowercase()))
            .collect();

        let mut weights: HashMap<String, f64> = HashMap::new();
        for stem in &stems {
            weights.insert(stem.clone(), 1.0);
        }

        for i in 0..stems.len() {
            self.fold_into(&stems[i], &mut weights);
            if i + 1 < stems.len() {
                let bigram = format!("{} {}", stems[i], stems[i + 1]);
                self.fold_into(&bigram, &mut weights);
            }
        }

        let expanded: Vec<String> = weights.keys().cloned().collect();
        for term in &expanded {
            self.fold_into(term, &mut weights);
        }

        weights
    }

    fn fold_into(&self, key: &str, weights: &mut HashMap<String, f64>) {
        if let Some(synonyms) = self.correlations.get(key) {
            for (synonym, closeness) in synonyms {
                weights
                    .entry(synonym.clone())
                    .and_modify(|existing| *existing = existing.max(*closeness))
                    .or_insert(*closeness);
            }
        }
    }
}
