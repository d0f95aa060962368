//! Phrase filtering semantics.

use crate::common::doc;
use neomys::Index;

#[test]
fn contiguous_words_satisfy_phrase() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("guide", "enable full text search on a collection"));

    let results = index.search_text("\"full text search\"", false).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn scattered_words_fail_phrase() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("guide", "full pages of text to search through"));

    assert!(index.search_text("\"full text search\"", false).unwrap().is_empty());
}

#[test]
fn reversed_words_fail_phrase() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("guide", "search text full"));

    assert!(index.search_text("\"full text search\"", false).unwrap().is_empty());
}

#[test]
fn phrase_terms_match_through_stemming() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("guide", "creating indexes quickly"));

    // Query inflections stem to the same stored terms.
    let results = index.search_text("\"created indexing\"", false).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn phrase_with_missing_term_drops_document() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("guide", "text search basics"));

    // "full" has no postings in the document at all.
    assert!(index.search_text("\"full text search\"", false).unwrap().is_empty());
}

#[test]
fn every_phrase_must_hold() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("guide", "wired tiger storage engine internals"));

    let both = index.search_text("\"wired tiger\" \"storage engine\"", false).unwrap();
    assert_eq!(both.len(), 1);

    let one_broken = index
        .search_text("\"wired tiger\" \"engine storage\"", false)
        .unwrap();
    assert!(one_broken.is_empty());
}

#[test]
fn phrase_tokens_also_match_loosely() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("a", "text search basics"));
    index.add("manual", &doc("b", "full text search basics"));

    // Both docs match the loose terms, but only doc 1 survives the phrase.
    let results = index.search_text("\"full text search\"", false).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, 1);
}
