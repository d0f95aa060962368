//! Shared corpus builders for the integration suites.

#![allow(dead_code)]

use neomys::{Document, Index};

pub fn doc(title: &str, text: &str) -> Document {
    Document {
        title: Some(title.to_string()),
        text: Some(text.to_string()),
        ..Document::default()
    }
}

pub fn linked_doc(title: &str, text: &str, url: &str, links: &[&str]) -> Document {
    Document {
        title: Some(title.to_string()),
        text: Some(text.to_string()),
        url: Some(url.to_string()),
        links: Some(links.iter().map(|l| l.to_string()).collect()),
        ..Document::default()
    }
}

/// A small documentation corpus with a link structure:
///
/// ```text
/// id 0: padding (unlinked; id 0 is invisible to neighbor resolution)
/// id 1: /install    → /reference
/// id 2: /tutorial   → /reference
/// id 3: /admin      → /reference
/// id 4: /reference  → (none)
/// ```
///
/// Every linked page mentions "deployment"; only some mention "sharding".
pub fn linked_corpus() -> Index {
    let mut index = Index::with_default_fields();
    index.add("manual", &doc("padding page", "nothing interesting here"));
    index.add(
        "manual",
        &linked_doc(
            "install guide",
            "deployment prerequisites and setup",
            "/install",
            &["/reference"],
        ),
    );
    index.add(
        "manual",
        &linked_doc(
            "tutorial",
            "first deployment walkthrough with sharding",
            "/tutorial",
            &["/reference"],
        ),
    );
    index.add(
        "manual",
        &linked_doc(
            "admin handbook",
            "production deployment checklists",
            "/admin",
            &["/reference"],
        ),
    );
    index.add(
        "manual",
        &linked_doc(
            "reference",
            "deployment topology and sharding reference",
            "/reference",
            &[],
        ),
    );
    index
}
