//! Character trie mapping index terms to document-id sets.
//!
//! The trie exists for one job: prefix expansion at query time. Exact-term
//! lookups go through the term-entry map instead, which is a plain hash
//! lookup. Every stored term was inserted on its first occurrence in a
//! (document, field) pair, so the doc-id sets here are a superset view of
//! the postings.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Documents whose term terminates at this node. Empty for interior nodes.
    doc_ids: HashSet<usize>,
}

/// Prefix-searchable term registry.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    term_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of distinct terms inserted.
    pub fn len(&self) -> usize {
        self.term_count
    }

    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Register `doc_id` under `term`, creating the path as needed.
    pub fn insert(&mut self, term: &str, doc_id: usize) {
        let mut node = &mut self.root;
        for ch in term.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.doc_ids.is_empty() {
            self.term_count += 1;
        }
        node.doc_ids.insert(doc_id);
    }

    /// Look up `term`, returning a map from doc-id to the stored terms that
    /// matched it.
    ///
    /// With `prefix` set, every stored term starting with `term` matches;
    /// otherwise only an exact hit does. (doc-id, term) pairs are unique by
    /// construction; ordering carries no meaning.
    pub fn search(&self, term: &str, prefix: bool) -> HashMap<usize, HashSet<String>> {
        let mut results: HashMap<usize, HashSet<String>> = HashMap::new();

        let mut node = &self.root;
        for ch in term.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return results,
            }
        }

        if prefix {
            let mut key = term.to_string();
            collect_subtree(node, &mut key, &mut results);
        } else if !node.doc_ids.is_empty() {
            for &doc_id in &node.doc_ids {
                results.entry(doc_id).or_default().insert(term.to_string());
            }
        }

        results
    }
}

fn collect_subtree(
    node: &TrieNode,
    key: &mut String,
    results: &mut HashMap<usize, HashSet<String>>,
) {
    for &doc_id in &node.doc_ids {
        results.entry(doc_id).or_default().insert(key.clone());
    }
    for (&ch, child) in &node.children {
        key.push(ch);
        collect_subtree(child, key, results);
        key.pop();
    }
}
