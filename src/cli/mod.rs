// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the certsearch command-line interface.
//!
//! Four subcommands: `search` for one-shot queries, `expand` to see what the
//! semantic table adds to a query, `show` for a record's full detail, and
//! `repl` to drive the search bar state machine from stdin.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "certsearch",
    about = "Fuzzy suggestion search over a certification catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog, config and labels come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Search config JSON file (weights, thresholds, limit, timings)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Message table JSON file for category labels
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Language for paths and labels
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Prefix for every suggestion path
    #[arg(long, default_value = "")]
    pub base_path: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog records against a query
    Search {
        /// Search query
        query: String,

        /// Maximum number of suggestions (overrides the config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the semantic expansion of a query
    Expand {
        /// Query to expand
        query: String,
    },

    /// Show one record with its domains and study resources
    Show {
        /// Record id, e.g. "cka"
        id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Interactive search bar: type to search, `:down`/`:up` to move,
    /// `:enter` to pick, `:esc` to clear, `:quit` to leave
    Repl {
        #[command(flatten)]
        source: SourceArgs,
    },
}
