// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Neomys CLI: build and query in-memory search indexes.
//!
//! ```bash
//! # Ingest a corpus and print index statistics
//! neomys index --input ./corpus.json --property manual
//!
//! # Query the corpus, with HITS link-analysis re-ranking
//! neomys search --input ./corpus.json "replica set" --hits
//! ```
//!
//! The corpus file is a JSON array of documents with optional `title`,
//! `tags`, `headings`, `text`, `url`, `links`, and `weight` members.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::process::ExitCode;

use neomys::{Document, Index, Match};

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index { input, property } => run_index(&input, &property),
        Commands::Search { input, property, query, limit, hits } => {
            run_search(&input, &property, &query, limit, hits)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn load_corpus(path: &str) -> Result<Vec<Document>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| format!("parsing {path}: {e}"))
}

fn build_index(documents: &[Document], property: &str) -> Index {
    let progress = ProgressBar::new(documents.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} indexing [{bar:30}] {pos}/{len} {msg}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );

    let mut index = Index::with_default_fields();
    for document in documents {
        index.add(property, document);
        progress.inc(1);
    }
    progress.finish_and_clear();
    index
}

fn run_index(input: &str, property: &str) -> Result<(), String> {
    let documents = load_corpus(input)?;
    let index = build_index(&documents, property);

    let linked = documents
        .iter()
        .filter(|d| d.url.is_some() && d.links.is_some())
        .count();

    println!("documents   {}", index.doc_count());
    println!("vocabulary  {}", index.vocabulary_size());
    println!("linked docs {linked}");
    Ok(())
}

fn run_search(
    input: &str,
    property: &str,
    query: &str,
    limit: usize,
    hits: bool,
) -> Result<(), String> {
    let documents = load_corpus(input)?;
    let index = build_index(&documents, property);

    let results = index.search_text(query, hits).map_err(|e| e.to_string())?;
    if results.is_empty() {
        println!("no matches");
        return Ok(());
    }

    for m in results.iter().take(limit) {
        print_match(m, &documents);
    }
    Ok(())
}

fn print_match(m: &Match, documents: &[Document]) {
    let title = documents
        .get(m.doc_id)
        .and_then(|d| d.title.as_deref())
        .unwrap_or("(untitled)");
    let terms: Vec<&str> = m.terms.iter().map(String::as_str).collect();
    println!(
        "#{:<4} {:<40} score {:>8.4}  relevancy {:>8.4}  [{}]",
        m.doc_id,
        title,
        m.score,
        m.relevancy_score,
        terms.join(", ")
    );
}
