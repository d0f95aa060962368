//! Runtime contracts for the index data model.
//!
//! Debug-mode assertions that walk the structural invariants of the postings
//! and the link graph. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Double as reusable checkers for the property test suites
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function              | Invariant                                  |
//! |--------------------------------|--------------------------------------------|
//! | `check_postings_consistent`    | frequency-map tokens have live postings    |
//! | `check_frequency_bounds`       | Σ term frequencies ≤ field token total     |
//! | `check_link_graph_symmetric`   | forward edges appear in the inverse graph  |
//! | `check_index_well_formed`      | all of the above plus dense document ids   |

use crate::index::Index;

/// Every token in every document entry's frequency map must have a term
/// entry listing that document with a non-empty position list.
pub fn check_postings_consistent(index: &Index) {
    for field in &index.fields {
        for (&doc_id, entry) in &field.documents {
            for token in entry.term_frequencies.keys() {
                let term = index.term_entry(token);
                debug_assert!(
                    term.is_some(),
                    "Contract violation: token {token:?} in doc {doc_id} has no term entry"
                );
                if let Some(term) = term {
                    debug_assert!(
                        term.docs().contains(&doc_id),
                        "Contract violation: term {token:?} missing doc {doc_id} in docs list"
                    );
                    debug_assert!(
                        term.positions(doc_id).is_some_and(|p| !p.is_empty()),
                        "Contract violation: term {token:?} has no positions for doc {doc_id}"
                    );
                }
            }
        }
    }
}

/// Summed per-document frequencies of any term within a field must not
/// exceed the field's cumulative token count.
pub fn check_frequency_bounds(index: &Index) {
    for field in &index.fields {
        let mut totals: std::collections::HashMap<&str, u64> = std::collections::HashMap::new();
        for entry in field.documents.values() {
            for (token, &frequency) in &entry.term_frequencies {
                *totals.entry(token.as_str()).or_insert(0) += u64::from(frequency);
            }
        }
        for (token, total) in totals {
            debug_assert!(
                total <= field.total_tokens_seen,
                "Contract violation: term {token:?} totals {total} > field {:?} saw {}",
                field.name,
                field.total_tokens_seen
            );
        }
    }
}

/// Every outbound URL in the forward graph must list the source URL in its
/// inverse entry.
pub fn check_link_graph_symmetric(index: &Index) {
    for (url, outbound) in index.graph.forward_entries() {
        for target in outbound {
            let back = index.graph.inverse_sources(target);
            debug_assert!(
                back.is_some_and(|sources| sources.contains(url)),
                "Contract violation: edge {url:?} → {target:?} missing from inverse graph"
            );
        }
    }
}

/// Document ids referenced by field entries must fall inside the dense id
/// range the index has assigned.
pub fn check_doc_ids_dense(index: &Index) {
    let count = index.doc_count();
    for field in &index.fields {
        for &doc_id in field.documents.keys() {
            debug_assert!(
                doc_id < count,
                "Contract violation: field {:?} references doc {doc_id} >= count {count}",
                field.name
            );
        }
    }
}

/// Run every structural contract. No-op in release builds.
pub fn check_index_well_formed(index: &Index) {
    check_doc_ids_dense(index);
    check_postings_consistent(index);
    check_frequency_bounds(index);
    check_link_graph_symmetric(index);
}
