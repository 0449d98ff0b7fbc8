//! Aggregator: groups blocks by key and drops exact duplicates.

use std::collections::HashMap;

use super::key::{derive_key, is_usable_filename, sanitize_filename};
use crate::config::{output_file_name, placeholder_key};
use crate::types::{Block, Group, OutputRecord};

/// Monotonic source of placeholder keys (`UNKNOWN_0001`, `UNKNOWN_0002`, ...).
///
/// Owned by one run; every call yields a key never handed out before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderCounter {
    issued: usize,
}

impl PlaceholderCounter {
    /// Create a counter whose first key is `UNKNOWN_0001`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next placeholder key.
    pub fn next_key(&mut self) -> String {
        self.issued += 1;
        placeholder_key(self.issued)
    }

    /// Number of keys issued so far.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued
    }
}

/// Accumulates blocks into deduplicated groups, keyed in first-seen order.
#[derive(Debug, Default)]
pub struct Aggregator<'a> {
    groups: Vec<Group<'a>>,
    index: HashMap<String, usize>,
    placeholders: PlaceholderCounter,
    blocks: usize,
    duplicates: usize,
}

impl<'a> Aggregator<'a> {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one block.
    ///
    /// Blocks without a usable key get a fresh placeholder key of their own,
    /// so keyless blocks never merge. Returns `false` when the block was
    /// dropped as a duplicate.
    pub fn push(&mut self, block: Block<'a>) -> bool {
        self.blocks += 1;

        let key = match derive_key(&block) {
            Some(key) => key,
            None => {
                let key = self.placeholders.next_key();
                tracing::warn!(
                    offset = block.offset,
                    header = %block.header(),
                    placeholder = %key,
                    "Block has no usable game code"
                );
                key
            }
        };

        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.groups.push(Group::new(key.clone()));
                self.index.insert(key.clone(), slot);
                slot
            }
        };

        let added = self.groups[slot].insert(block.text);
        if !added {
            self.duplicates += 1;
            tracing::debug!(key = %key, offset = block.offset, "Dropping duplicate block");
        }
        added
    }

    /// Finish aggregation.
    #[must_use]
    pub fn finish(self) -> Aggregation<'a> {
        Aggregation {
            blocks: self.blocks,
            duplicates: self.duplicates,
            placeholder_blocks: self.placeholders.issued(),
            groups: self.groups,
            placeholders: self.placeholders,
        }
    }
}

impl<'a> Extend<Block<'a>> for Aggregator<'a> {
    fn extend<I: IntoIterator<Item = Block<'a>>>(&mut self, iter: I) {
        for block in iter {
            self.push(block);
        }
    }
}

/// Result of aggregating every block of one input.
#[derive(Debug)]
pub struct Aggregation<'a> {
    /// Groups in order of first appearance of their key.
    groups: Vec<Group<'a>>,

    /// Counter state, continued when a key is unusable as a file name.
    placeholders: PlaceholderCounter,

    blocks: usize,
    duplicates: usize,
    placeholder_blocks: usize,
}

impl Aggregation<'_> {
    /// Blocks seen.
    #[must_use]
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Blocks dropped as exact duplicates.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Blocks that received a placeholder key.
    #[must_use]
    pub fn placeholder_blocks(&self) -> usize {
        self.placeholder_blocks
    }

    /// Turn the groups into output records.
    ///
    /// File names are the sanitized key plus `.ini`. A key that sanitizes to
    /// nothing usable takes the next placeholder instead.
    #[must_use]
    pub fn into_records(self) -> Vec<OutputRecord> {
        let mut placeholders = self.placeholders;
        self.groups
            .iter()
            .map(|group| {
                let mut name = sanitize_filename(group.key());
                if !is_usable_filename(&name) {
                    name = placeholders.next_key();
                    tracing::warn!(
                        key = %group.key(),
                        placeholder = %name,
                        "Key is not a usable file name"
                    );
                }
                OutputRecord {
                    file_name: output_file_name(&name),
                    contents: group.contents(),
                }
            })
            .collect()
    }
}

/// Aggregate a sequence of blocks.
pub fn aggregate<'a>(blocks: impl IntoIterator<Item = Block<'a>>) -> Aggregation<'a> {
    let mut aggregator = Aggregator::new();
    aggregator.extend(blocks);
    aggregator.finish()
}
