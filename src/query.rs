// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: raw strings into terms, phrases, and a document filter.
//!
//! Terms keep their original case here. Mandatory-term membership is decided
//! on the raw spelling (`$lookup`, not `$lookup` stemmed), and lowercasing
//! plus stemming happen later in the search path. Double-quoted runs become
//! phrases whose tokens are also added to the term set.
//!
//! The filter is an opaque predicate supplied by the caller after parsing;
//! the default accepts every document.

use crate::analyzer;
use crate::types::SearchError;
use std::collections::HashSet;
use std::fmt;

/// Upper bound on distinct query terms.
pub const MAX_QUERY_TERMS: usize = 10;

type Filter = Box<dyn Fn(usize) -> bool>;

/// A parsed query: distinct terms in first-seen order, phrase sequences, an
/// optional doc-id filter, and the caller's mandatory-term set.
pub struct Query {
    terms: Vec<String>,
    phrases: Vec<Vec<String>>,
    filter: Option<Filter>,
    mandatory_terms: HashSet<String>,
}

impl Query {
    /// Parse a raw query string.
    ///
    /// Fails with [`SearchError::QueryTooLong`] when the distinct-term count
    /// exceeds [`MAX_QUERY_TERMS`]. An empty string parses to an empty query,
    /// which matches nothing.
    pub fn parse(raw: &str) -> Result<Query, SearchError> {
        let mut terms: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut phrases: Vec<Vec<String>> = Vec::new();

        // Straight double quotes alternate the scanner between loose terms
        // and phrase segments. An unbalanced quote treats the tail as a
        // phrase, which is what a half-typed query usually means.
        for (segment_index, segment) in raw.split('"').enumerate() {
            let tokens = analyzer::tokenize_preserving_case(segment, true);
            if tokens.is_empty() {
                continue;
            }
            let inside_quotes = segment_index % 2 == 1;
            if inside_quotes {
                phrases.push(tokens.clone());
            }
            for token in tokens {
                if seen.insert(token.clone()) {
                    terms.push(token);
                }
            }
        }

        if terms.len() > MAX_QUERY_TERMS {
            return Err(SearchError::QueryTooLong {
                terms: terms.len(),
                limit: MAX_QUERY_TERMS,
            });
        }

        Ok(Query {
            terms,
            phrases,
            filter: None,
            mandatory_terms: HashSet::new(),
        })
    }

    /// Restrict results to documents accepted by `filter`.
    pub fn with_filter(mut self, filter: impl Fn(usize) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Supply the set of operator-like tokens that receive the mandatory-term
    /// boost. Membership is checked against the original query spelling.
    pub fn with_mandatory_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mandatory_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Distinct query terms, original case, in first-seen order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Phrase sequences that must appear contiguously in a matched document.
    pub fn phrases(&self) -> &[Vec<String>] {
        &self.phrases
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn accepts(&self, doc_id: usize) -> bool {
        self.filter.as_ref().map_or(true, |f| f(doc_id))
    }

    pub(crate) fn is_mandatory(&self, term: &str) -> bool {
        self.mandatory_terms.contains(term)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("terms", &self.terms)
            .field("phrases", &self.phrases)
            .field("has_filter", &self.filter.is_some())
            .field("mandatory_terms", &self.mandatory_terms)
            .finish()
    }
}
