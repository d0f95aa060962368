//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document with a title and body text.
pub fn doc(title: &str, text: &str) -> Document {
    Document {
        title: Some(title.to_string()),
        text: Some(text.to_string()),
        ..Document::default()
    }
}

/// Create a linked document: title, body, URL, and outbound links.
pub fn doc_with_url(title: &str, text: &str, url: &str, links: &[&str]) -> Document {
    Document {
        title: Some(title.to_string()),
        text: Some(text.to_string()),
        url: Some(url.to_string()),
        links: Some(links.iter().map(|l| l.to_string()).collect()),
        ..Document::default()
    }
}

/// Create a document exercising every text channel.
pub fn full_doc(title: &str, tags: &str, headings: &str, text: &str) -> Document {
    Document {
        title: Some(title.to_string()),
        tags: Some(tags.to_string()),
        headings: Some(headings.to_string()),
        text: Some(text.to_string()),
        ..Document::default()
    }
}
