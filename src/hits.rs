// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HITS link-analysis re-ranking.
//!
//! The relevance-matched root set is expanded with one-hop link neighbors
//! into a base set, authority and hub scores are power-iterated to a fixed
//! point, and the final score blends relevance with authority. Neighbor
//! relations form a cyclic graph, so matches live in an arena indexed by
//! slot and refer to each other by slot index, never by owning pointers.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! - Iteration stops when both norm deltas drop below `EPSILON`, or after
//!   `MAX_ITERATIONS` rounds; it always terminates.
//! - Placeholder matches (relevance 0) participate in the iteration but are
//!   filtered before ranking, so the returned list only holds real matches.
//! - NaN authorities (an all-zero norm propagates NaN through division) are
//!   replaced by `NAN_AUTHORITY` before ranking.

use crate::graph::LinkGraph;
use crate::scoring::{sample_std_dev, MAX_MATCHES};
use crate::types::Match;
use std::collections::HashMap;

/// Convergence threshold on the change of the authority and hub norms.
pub const EPSILON: f64 = 1e-5;

/// Hard cap on power iterations.
pub const MAX_ITERATIONS: usize = 200;

/// Substitute for authority scores that degenerate to NaN.
const NAN_AUTHORITY: f64 = 1e-10;

/// Blend factor for the authority component of the final score, 1/log₂4.
const AUTHORITY_DAMPING: f64 = 0.5;

/// Matches for one query, indexed by arena slot.
#[derive(Debug, Default)]
pub(crate) struct MatchArena {
    matches: Vec<Match>,
    slot_by_doc: HashMap<usize, usize>,
}

impl MatchArena {
    pub(crate) fn from_roots(roots: Vec<Match>) -> Self {
        let slot_by_doc = roots
            .iter()
            .enumerate()
            .map(|(slot, m)| (m.doc_id, slot))
            .collect();
        MatchArena { matches: roots, slot_by_doc }
    }

    fn slot_for(&mut self, doc_id: usize) -> usize {
        if let Some(&slot) = self.slot_by_doc.get(&doc_id) {
            return slot;
        }
        let slot = self.matches.len();
        self.matches.push(Match::new(doc_id));
        self.slot_by_doc.insert(doc_id, slot);
        slot
    }

    /// Attach one-hop link neighbors to every root match, creating
    /// zero-relevance placeholders for documents outside the root set.
    fn expand_base_set(&mut self, graph: &LinkGraph) {
        let root_count = self.matches.len();
        for slot in 0..root_count {
            let neighbors = graph.neighbors_of(self.matches[slot].doc_id);
            let incoming: Vec<usize> =
                neighbors.incoming.iter().map(|&id| self.slot_for(id)).collect();
            let outgoing: Vec<usize> =
                neighbors.outgoing.iter().map(|&id| self.slot_for(id)).collect();
            self.matches[slot].incoming = incoming;
            self.matches[slot].outgoing = outgoing;
        }
    }

    /// Power-iterate authority and hub scores with L2 normalization until
    /// both norms settle.
    fn iterate(&mut self) {
        let count = self.matches.len();
        let mut last_authority_norm = 0.0_f64;
        let mut last_hub_norm = 0.0_f64;

        for _ in 0..MAX_ITERATIONS {
            let authorities: Vec<f64> = (0..count)
                .map(|slot| {
                    self.matches[slot]
                        .incoming
                        .iter()
                        .map(|&neighbor| self.matches[neighbor].hub_score)
                        .sum()
                })
                .collect();
            let authority_norm = l2_norm(&authorities);
            for (m, authority) in self.matches.iter_mut().zip(&authorities) {
                m.authority_score = authority / authority_norm;
            }

            let hubs: Vec<f64> = (0..count)
                .map(|slot| {
                    self.matches[slot]
                        .outgoing
                        .iter()
                        .map(|&neighbor| self.matches[neighbor].authority_score)
                        .sum()
                })
                .collect();
            let hub_norm = l2_norm(&hubs);
            for (m, hub) in self.matches.iter_mut().zip(&hubs) {
                m.hub_score = hub / hub_norm;
            }

            if (authority_norm - last_authority_norm).abs() < EPSILON
                && (hub_norm - last_hub_norm).abs() < EPSILON
            {
                break;
            }
            last_authority_norm = authority_norm;
            last_hub_norm = hub_norm;
        }
    }

    fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Re-rank root matches by combined relevance and link authority.
pub(crate) fn rank_with_hits(graph: &LinkGraph, roots: Vec<Match>) -> Vec<Match> {
    if roots.is_empty() {
        return roots;
    }

    let mut arena = MatchArena::from_roots(roots);
    arena.expand_base_set(graph);
    arena.iterate();

    let mut matches = arena.into_matches();
    matches.retain(|m| m.relevancy_score > 0.0);
    for m in &mut matches {
        if m.authority_score.is_nan() {
            m.authority_score = NAN_AUTHORITY;
        }
    }
    if matches.is_empty() {
        return matches;
    }

    let relevancies: Vec<f64> = matches.iter().map(|m| m.relevancy_score).collect();
    let threshold = sample_std_dev(&relevancies);

    let mut max_relevancy = 0.0_f64;
    let mut max_authority = 0.0_f64;
    for m in matches.iter().filter(|m| m.relevancy_score >= threshold) {
        max_relevancy = max_relevancy.max(m.relevancy_score);
        max_authority = max_authority.max(m.authority_score);
    }

    for m in &mut matches {
        m.score = (m.relevancy_score / max_relevancy + 1.0).log2()
            + (m.authority_score / max_authority + 1.0).log2() * AUTHORITY_DAMPING;
        if m.relevancy_score < 2.5 * threshold {
            m.score -= threshold / m.relevancy_score;
        }
    }

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(MAX_MATCHES);
    matches
}
