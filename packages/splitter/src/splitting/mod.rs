//! Cheat database splitting.
//!
//! The segmenter cuts the database into `_S` blocks, the key deriver names
//! each block after its game code and the aggregator groups and deduplicates
//! them before they are written.

mod aggregator;
mod key;
mod segmenter;

pub use aggregator::{aggregate, Aggregation, Aggregator, PlaceholderCounter};
pub use key::{derive_key, is_usable_filename, normalize_code, sanitize_filename};
pub use segmenter::{is_start_line, segment, Segmenter};
pub(crate) use segmenter::split_first_line;
