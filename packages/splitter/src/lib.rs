//! cheatdb-splitter - Split a flat cheat database into per-game files.
//!
//! A cheat database is a text file where every game starts with a `_S <code>`
//! line. This crate cuts the database into those blocks, groups them by
//! game code, drops exact duplicates and writes one `<code>.ini` per game.
//!
//! # Example
//!
//! ```
//! use cheatdb_splitter::splitting::{aggregate, segment};
//!
//! let db = "_S ULUS-10080\n_C0 Max HP\n_S ULUS-10080\n_C0 Max HP\n";
//! let records = aggregate(segment(db)).into_records();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].file_name, "ULUS10080.ini");
//! assert_eq!(records[0].contents, "_S ULUS-10080\n_C0 Max HP\n");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Fixed paths, marker and naming constants
//! - [`types`]: Core data types (Block, Group, OutputRecord, SplitReport)
//! - [`error`]: Error types and Result alias
//! - [`input`]: Reading and decoding the database
//! - [`splitting`]: Segmenter, key derivation and aggregation
//! - [`output`]: Writing the `.ini` files
//! - [`cli`]: Command-line interface
//! - [`splitter`]: Main splitter service

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod splitter;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use splitter::split_cheat_db;

// Re-export commonly used items
pub use config::SplitConfig;
pub use error::{Result, SplitterError};
pub use types::{Block, Group, OutputRecord, SplitReport};
