//! HITS re-ranking through the public search surface.

use crate::common::{doc, linked_corpus, linked_doc};
use neomys::Index;

#[test]
fn all_relevant_documents_survive_reranking() {
    let index = linked_corpus();
    let results = index.search_text("deployment", true).unwrap();

    let mut ids: Vec<usize> = results.iter().map(|m| m.doc_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn heavily_linked_page_accumulates_authority() {
    let index = linked_corpus();
    let results = index.search_text("deployment", true).unwrap();

    let reference = results.iter().find(|m| m.doc_id == 4).unwrap();
    for leaf in results.iter().filter(|m| m.doc_id != 4) {
        assert!(reference.authority_score >= leaf.authority_score);
    }
}

#[test]
fn neighbors_without_relevance_stay_hidden() {
    let index = linked_corpus();
    // Only docs 2 and 4 mention sharding; their link neighbors join the
    // base set but must not surface.
    let results = index.search_text("sharding", true).unwrap();

    let mut ids: Vec<usize> = results.iter().map(|m| m.doc_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn reranking_is_deterministic() {
    let index = linked_corpus();
    let first: Vec<(usize, String)> = index
        .search_text("deployment sharding", true)
        .unwrap()
        .iter()
        .map(|m| (m.doc_id, format!("{:.12}", m.score)))
        .collect();
    let second: Vec<(usize, String)> = index
        .search_text("deployment sharding", true)
        .unwrap()
        .iter()
        .map(|m| (m.doc_id, format!("{:.12}", m.score)))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn hits_scores_sort_descending() {
    let index = linked_corpus();
    let results = index.search_text("deployment", true).unwrap();
    for window in results.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
}

#[test]
fn unlinked_corpus_ranks_by_relevance_alone() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("journal", "journal journal journal"));
    index.add("manual", &doc("other", "journal mentioned once here"));

    let results = index.search_text("journal", true).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, 0);
}

#[test]
fn self_links_do_not_inflate_authority() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("padding", "filler"));
    index.add(
        "manual",
        &linked_doc("vain page", "backup strategies", "/vain/", &["/vain/index.html"]),
    );
    index.add(
        "manual",
        &linked_doc("plain page", "backup strategies", "/plain/", &[]),
    );

    let results = index.search_text("backup", true).unwrap();
    assert_eq!(results.len(), 2);
    let vain = results.iter().find(|m| m.doc_id == 1).unwrap();
    let plain = results.iter().find(|m| m.doc_id == 2).unwrap();
    assert!((vain.authority_score - plain.authority_score).abs() < 1e-9);
}
