// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring: Dirichlet+ smoothed language-model weights.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## SCORING_ARITHMETIC
//! The per-field term score is
//!
//! ```text
//! termWeight × [ log2(1 + tf/(μ·p)) + log2(1 + δ/(μ·p)) + qlen·log2(μ/(docLen+μ)) ]
//! ```
//!
//! multiplied by field weight, field length-weight, and document weight.
//! Result ordering across corpora depends on this exact arithmetic; do not
//! refactor terms together or reorder the logs.
//!
//! ## CONSTANTS (DO NOT CHANGE)
//! - μ (`MU`) = 2000: Dirichlet smoothing mass
//! - δ (`DELTA`) = 0.05: lower bound guaranteeing rare terms a non-zero
//!   baseline (the "+" in Dirichlet+)
//! - `MIN_FIELD_TOKENS` = 500: floor on the per-field token total so tiny
//!   corpora don't inflate term probabilities
//! - `DEFAULT_TERM_WEIGHT` = 0.1: weight for matched terms absent from the
//!   expansion map (prefix extensions of a query term)
//! - `MANDATORY_TERM_BOOST` = 1.5: multiplier for caller-designated operator
//!   terms
//!
//! A term probability of exactly zero contributes nothing; the zero never
//! reaches a divisor.

/// Dirichlet smoothing mass.
pub const MU: f64 = 2000.0;

/// Additive lower bound for rare terms.
pub const DELTA: f64 = 0.05;

/// Floor on a field's total token count when estimating term probability.
pub const MIN_FIELD_TOKENS: f64 = 500.0;

/// Term weight for matched terms outside the expansion map.
pub const DEFAULT_TERM_WEIGHT: f64 = 0.1;

/// Multiplier for mandatory (operator-like) terms.
pub const MANDATORY_TERM_BOOST: f64 = 1.5;

/// Hard cap on the returned result list.
pub const MAX_MATCHES: usize = 150;

/// Per-field contribution of one term to one document's relevance.
///
/// `term_prob` must be positive; callers skip the zero case entirely. The
/// document-length term is applied once per (term, field) contribution, with
/// `query_len` counting the original query terms before expansion.
pub fn dirichlet_plus(
    term_weight: f64,
    term_frequency: f64,
    term_prob: f64,
    doc_len: f64,
    query_len: f64,
) -> f64 {
    term_weight
        * ((1.0 + term_frequency / (MU * term_prob)).log2()
            + (1.0 + DELTA / (MU * term_prob)).log2()
            + query_len * (MU / (doc_len + MU)).log2())
}

/// Sample standard deviation (n−1 divisor).
///
/// Fewer than two values is degenerate; the engine treats that as 0.0 so a
/// singleton result set passes every relevancy threshold unpenalized.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Does a choice of one position per list exist such that positions are
/// strictly increasing by exactly one?
///
/// Lists must be ascending, which postings are by construction. This is the
/// phrase predicate: list `i` holds the in-document positions of phrase
/// term `i`.
pub fn has_consecutive_run(position_lists: &[&[u32]]) -> bool {
    let Some((first, rest)) = position_lists.split_first() else {
        return true;
    };
    first.iter().any(|&start| {
        rest.iter()
            .enumerate()
            .all(|(i, positions)| positions.binary_search(&(start + 1 + i as u32)).is_ok())
    })
}
