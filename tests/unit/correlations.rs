//! Correlation expansion through the index surface.

use crate::common::doc;
use neomys::Index;

#[test]
fn correlated_word_reaches_synonym_documents() {
    let mut index = Index::with_default_fields();
    index.correlate_word("js", "javascript", 0.9);
    index.add("manual", &doc("drivers", "the javascript driver reference"));

    let results = index.search_text("js", false).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].relevancy_score > 0.0);
}

#[test]
fn bigram_correlation_requires_adjacent_terms() {
    let mut index = Index::with_default_fields();
    index.correlate_word("replica set", "replication", 0.9);
    index.add("manual", &doc("internals", "replication protocol details"));

    assert_eq!(index.search_text("replica set", false).unwrap().len(), 1);
    // The single term probes alone and misses the bigram key.
    assert!(index.search_text("replica", false).unwrap().is_empty());
}

#[test]
fn synonym_scores_below_exact_match() {
    let mut index = Index::with_default_fields();
    index.correlate_word("k8s", "kubernetes", 0.9);
    index.add("manual", &doc("a", "kubernetes deployment"));
    index.add("manual", &doc("b", "kubernetes deployment"));

    let exact = index.search_text("kubernetes", false).unwrap();
    let expanded = index.search_text("k8s", false).unwrap();
    assert_eq!(exact.len(), 2);
    assert_eq!(expanded.len(), 2);
    // Synonym weight 0.9 scales the same arithmetic.
    assert!(expanded[0].relevancy_score < exact[0].relevancy_score);
}

#[test]
fn marker_tokens_index_verbatim_and_expand() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("operators", "use %%lookup to join collections"));

    // The plain spelling reaches the marked token through the correlation
    // the marker registered at ingest.
    let results = index.search_text("lookup", false).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].terms.contains("%%lookup"));
}
