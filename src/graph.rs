// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hyperlink graph over indexed documents.
//!
//! Two adjacency tables keyed by normalized URL (forward and derived
//! inverse), plus URL↔doc-id maps for the documents that declared both a URL
//! and a link list. Neighbor resolution translates the URL adjacency into
//! doc-id lists and caches them per document, since they depend only on the
//! static graph.
//!
//! # Invariants
//!
//! - Every outbound URL in the forward table appears in that URL's entry of
//!   the inverse table.
//! - Neighbor lists never contain the document itself, URLs the index has
//!   never resolved, or doc-id 0 (kept for ranking parity with the original
//!   engine; see DESIGN.md).

use std::cell::RefCell;
use std::collections::HashMap;

/// Collapse a trailing `/index.html` into `/` so both spellings of a page
/// land on one graph node.
pub fn normalize_url(url: &str) -> String {
    match url.strip_suffix("/index.html") {
        Some(base) => format!("{base}/"),
        None => url.to_string(),
    }
}

/// Resolved link neighborhood of one document, as doc-ids.
#[derive(Debug, Clone, Default)]
pub struct Neighbors {
    pub incoming: Vec<usize>,
    pub outgoing: Vec<usize>,
}

/// Forward/inverse link adjacency with cached per-document neighbor sets.
#[derive(Debug, Default)]
pub struct LinkGraph {
    outgoing_urls: HashMap<String, Vec<String>>,
    incoming_urls: HashMap<String, Vec<String>>,
    url_to_id: HashMap<String, usize>,
    id_to_url: HashMap<usize, String>,
    neighbor_cache: RefCell<HashMap<usize, Neighbors>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        LinkGraph::default()
    }

    /// Record a document's URL and outbound links. Callers only invoke this
    /// when both were declared.
    pub fn add_document(&mut self, doc_id: usize, url: &str, links: &[String]) {
        let url = normalize_url(url);
        let links: Vec<String> = links.iter().map(|l| normalize_url(l)).collect();

        for link in &links {
            self.incoming_urls.entry(link.clone()).or_default().push(url.clone());
        }
        self.outgoing_urls.insert(url.clone(), links);
        self.url_to_id.insert(url.clone(), doc_id);
        self.id_to_url.insert(doc_id, url);
    }

    /// Doc-id for a (raw) URL, if a linked document declared it.
    pub fn resolve(&self, url: &str) -> Option<usize> {
        self.url_to_id.get(&normalize_url(url)).copied()
    }

    /// Resolved neighbors of a document, computed once and cached for the
    /// lifetime of the index.
    pub fn neighbors_of(&self, doc_id: usize) -> Neighbors {
        if let Some(cached) = self.neighbor_cache.borrow().get(&doc_id) {
            return cached.clone();
        }
        let neighbors = self.compute_neighbors(doc_id);
        self.neighbor_cache
            .borrow_mut()
            .insert(doc_id, neighbors.clone());
        neighbors
    }

    fn compute_neighbors(&self, doc_id: usize) -> Neighbors {
        let Some(url) = self.id_to_url.get(&doc_id) else {
            return Neighbors::default();
        };

        let resolve_all = |urls: Option<&Vec<String>>| -> Vec<usize> {
            urls.into_iter()
                .flatten()
                .filter_map(|u| self.url_to_id.get(u).copied())
                .filter(|&id| id != 0 && id != doc_id)
                .collect()
        };

        Neighbors {
            incoming: resolve_all(self.incoming_urls.get(url)),
            outgoing: resolve_all(self.outgoing_urls.get(url)),
        }
    }

    pub(crate) fn forward_entries(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.outgoing_urls.iter()
    }

    pub(crate) fn inverse_sources(&self, url: &str) -> Option<&Vec<String>> {
        self.incoming_urls.get(url)
    }
}
