// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the neomys command-line interface.
//!
//! Two subcommands: `index` builds an in-memory index from a JSON corpus and
//! reports its shape, `search` builds the same index and runs a query
//! against it. There is no on-disk index format; corpora are small enough
//! that rebuilding per invocation is the simpler contract.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "neomys",
    about = "Field-weighted full-text search with link-analysis ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest a JSON corpus and report index statistics
    Index {
        /// Path to a JSON array of documents
        #[arg(short, long)]
        input: String,

        /// Property name the documents are grouped under
        #[arg(short, long, default_value = "default")]
        property: String,
    },
    /// Ingest a JSON corpus and run a query against it
    Search {
        /// Path to a JSON array of documents
        #[arg(short, long)]
        input: String,

        /// Property name the documents are grouped under
        #[arg(short, long, default_value = "default")]
        property: String,

        /// The query string; quote phrases with double quotes
        query: String,

        /// Maximum results to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Re-rank with HITS link analysis
        #[arg(long)]
        hits: bool,
    },
}
