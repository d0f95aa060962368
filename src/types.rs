// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine's public surface.
//!
//! These types cross the API boundary: [`Document`] on the way in,
//! [`Match`] on the way out, [`SearchError`] when a query is rejected.
//! Everything else (postings, fields, the link graph) stays internal to the
//! index.
//!
//! # Invariants
//!
//! - **Document ids** are dense and contiguous from 0; they are assigned by
//!   the index at ingest and never reused or removed.
//! - **Match** records never outlive the `search` call that produced them;
//!   neighbor references are arena slot indices, not document ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The canonical field set with its static weights.
///
/// An index may be constructed with any subset; field names outside this set
/// never receive text because [`Document`] has no channel for them.
pub const DEFAULT_FIELDS: &[(&str, f64)] =
    &[("text", 1.0), ("headings", 5.0), ("title", 10.0), ("tags", 10.0)];

/// A document handed to the index for ingestion.
///
/// Every text channel is optional; a missing channel simply contributes
/// nothing to that field. `url` and `links` must both be present for the
/// document to participate in the link graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub headings: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    /// Static ranking multiplier, defaults to 1.0.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Document {
    /// Raw text for a named field, if the document carries it.
    pub fn field_text(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "tags" => self.tags.as_deref(),
            "headings" => self.headings.as_deref(),
            "text" => self.text.as_deref(),
            _ => None,
        }
    }
}

/// A ranked result for one document.
///
/// Built per query and discarded with the result list. `authority_score` and
/// `hub_score` start at 1.0 and only move when HITS re-ranking runs; without
/// it, `score` mirrors `relevancy_score`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(rename = "_id")]
    pub doc_id: usize,
    pub score: f64,
    pub relevancy_score: f64,
    pub authority_score: f64,
    pub hub_score: f64,
    /// Index terms that matched this document, in sorted order.
    pub terms: BTreeSet<String>,
    /// Arena slots of link-graph neighbors pointing at this document.
    #[serde(skip)]
    pub(crate) incoming: Vec<usize>,
    /// Arena slots of link-graph neighbors this document points at.
    #[serde(skip)]
    pub(crate) outgoing: Vec<usize>,
}

impl Match {
    pub(crate) fn new(doc_id: usize) -> Self {
        Match {
            doc_id,
            score: 0.0,
            relevancy_score: 0.0,
            authority_score: 1.0,
            hub_score: 1.0,
            terms: BTreeSet::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
}

/// Errors surfaced to callers. Degenerate numerical cases (zero term
/// probability, NaN authority, empty match sets) are absorbed by the engine
/// and never reach this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The query carried more distinct terms than the engine accepts.
    QueryTooLong { terms: usize, limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::QueryTooLong { terms, limit } => {
                write!(f, "query too long: {terms} distinct terms (limit {limit})")
            }
        }
    }
}

impl std::error::Error for SearchError {}
