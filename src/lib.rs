//! # Wordlist Refinery
//!
//! Wordlist curation tool for penetration testing.
//!
//! ## Features
//!
//! - **Normalization chain**: ordered, composable per-word rules — HTML
//!   stripping, lowercasing, digit/special-character edge trimming,
//!   run collapsing, truncation
//! - **Junk rejection**: all-numeric words, probable hex digests,
//!   low-entropy words dominated by a single character
//! - **Email handling**: rewrite addresses to "user domain" pairs
//! - **Tokenization**: whole-line words or whitespace-split sub-words,
//!   with min/max length gating
//! - **Parallel ingestion**: one task per input file, deterministic
//!   argument-order merge
//! - **Finalization**: stable byte-wise sort and adjacent deduplication
//!
//! ## Usage
//!
//! ```bash
//! # Merge, sort and deduplicate two raw lists
//! wordlist-refinery -o clean.txt raw1.txt raw2.txt --sort --deduplicate
//!
//! # Extract lowercase words from scraped HTML
//! wordlist-refinery -o words.txt dump.html --dewebify --wordify --lower
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_refinery::config::RefineConfig;
//! use wordlist_refinery::ingest::Refinery;
//! use std::path::PathBuf;
//!
//! let config = RefineConfig {
//!     lower: true,
//!     sort: true,
//!     deduplicate: true,
//!     ..Default::default()
//! };
//!
//! let refinery = Refinery::new(config).quiet(true);
//! let summary = refinery
//!     .run(&[PathBuf::from("raw.txt")], &PathBuf::from("clean.txt"))
//!     .unwrap();
//! println!("{} accepted, {} written", summary.total_accepted, summary.written);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod finalize;
pub mod ingest;
pub mod io;
pub mod pipeline;
pub mod progress;
pub mod tokenize;

pub use cli::Args;
pub use config::RefineConfig;
pub use error::{ConfigError, RefineError};
pub use ingest::{Refinery, RunSummary};
