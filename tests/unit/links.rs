//! Link graph behavior through the public surface.

use crate::common::{doc, linked_doc};
use neomys::{normalize_url, Index, LinkGraph, Neighbors};

#[test]
fn url_normalization_collapses_index_html() {
    assert_eq!(normalize_url("/guide/index.html"), "/guide/");
    assert_eq!(normalize_url("/guide/"), "/guide/");
    assert_eq!(normalize_url("/guide/setup.html"), "/guide/setup.html");
}

#[test]
fn both_spellings_resolve_to_one_node() {
    let mut graph = LinkGraph::new();
    graph.add_document(1, "/guide/index.html", &[]);
    assert_eq!(graph.resolve("/guide/"), Some(1));
    assert_eq!(graph.resolve("/guide/index.html"), Some(1));
}

#[test]
fn neighbors_default_to_empty() {
    let graph = LinkGraph::new();
    let Neighbors { incoming, outgoing } = graph.neighbors_of(42);
    assert!(incoming.is_empty());
    assert!(outgoing.is_empty());
}

#[test]
fn cross_spelling_links_resolve_as_self_loops() {
    // A page linking to its own index.html spelling carries no edge.
    let mut graph = LinkGraph::new();
    graph.add_document(1, "/guide/", &["/guide/index.html".to_string()]);
    let n = graph.neighbors_of(1);
    assert!(n.incoming.is_empty());
    assert!(n.outgoing.is_empty());
}

#[test]
fn documents_without_links_never_join_the_graph() {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("padding", "filler"));
    let mut url_only = doc("standalone", "page with a url but no link list");
    url_only.url = Some("/standalone".to_string());
    index.add("manual", &url_only);
    index.add("manual", &linked_doc("linked", "page", "/linked", &["/standalone"]));

    // The url-only page was never registered, so the edge dangles and HITS
    // sees an empty neighborhood; the query must still return both pages.
    let results = index.search_text("page", true).unwrap();
    assert_eq!(results.len(), 2);
}
