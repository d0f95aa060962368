//! Relevance ranking over multi-field corpora.

use crate::common::doc;
use neomys::{contracts, Document, Index, Query, MAX_MATCHES};

#[test]
fn title_match_outranks_text_match() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("aggregation pipeline", "stage by stage walkthrough"));
    index.add("manual", &doc("operators", "aggregation expressions reference"));

    let results = index.search_text("aggregation", false).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, 0, "title field weighs 10x the text field");
}

#[test]
fn tags_match_outranks_headings_match() {
    let mut index = Index::with_default_fields();
    let tagged = Document {
        title: Some("page one".to_string()),
        tags: Some("encryption".to_string()),
        text: Some("filler body".to_string()),
        ..Document::default()
    };
    let headed = Document {
        title: Some("page two".to_string()),
        headings: Some("encryption".to_string()),
        text: Some("filler body".to_string()),
        ..Document::default()
    };
    index.add("manual", &tagged);
    index.add("manual", &headed);

    let results = index.search_text("encryption", false).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, 0, "tags weigh 10, headings weigh 5");
}

#[test]
fn repeated_terms_raise_relevance() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("a", "indexes are discussed once"));
    index.add("manual", &doc("b", "indexes indexes indexes everywhere indexes"));

    let results = index.search_text("indexes", false).unwrap();
    assert_eq!(results[0].doc_id, 1);
}

#[test]
fn result_list_is_capped() {
    let mut index = Index::with_default_fields();
    for i in 0..200 {
        index.add("manual", &doc(&format!("page {i}"), "replication internals"));
    }
    contracts::check_index_well_formed(&index);

    let results = index.search_text("replication", false).unwrap();
    assert_eq!(results.len(), MAX_MATCHES);

    let with_hits = index.search_text("replication", true).unwrap();
    assert!(with_hits.len() <= MAX_MATCHES);
}

#[test]
fn matched_terms_are_reported() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("datagrams", "database and datagram internals"));

    let results = index.search_text("data", false).unwrap();
    assert_eq!(results.len(), 1);
    // Prefix expansion matched several stored terms; all are reported.
    assert!(results[0].terms.len() >= 2);
}

#[test]
fn filter_excludes_documents_entirely() {
    let mut index = Index::with_default_fields();
    for i in 0..10 {
        index.add("manual", &doc(&format!("page {i}"), "transactions guide"));
    }

    let query = Query::parse("transactions").unwrap().with_filter(|id| id >= 5);
    let results = index.search(&query, false);
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|m| m.doc_id >= 5));
}

#[test]
fn properties_share_one_id_namespace() {
    let mut index = Index::with_default_fields();
    let a = index.add("manual", &doc("first corpus", "journal internals"));
    let b = index.add("atlas", &doc("second corpus", "journal settings"));
    assert_eq!((a, b), (0, 1));

    let results = index.search_text("journal", false).unwrap();
    assert_eq!(results.len(), 2);
}
