//! Main splitter service that ties all components together.

use crate::config::SplitConfig;
use crate::error::Result;
use crate::input::read_input;
use crate::output::write_records;
use crate::splitting::{aggregate, segment};
use crate::types::SplitReport;

/// Split a cheat database into one deduplicated `.ini` file per game.
///
/// Reads `config.input` completely, groups its `_S` blocks by game code and
/// (over)writes one file per group in `config.output_dir`.
///
/// # Returns
/// A `SplitReport` with the number of files written and block statistics
pub fn split_cheat_db(config: &SplitConfig) -> Result<SplitReport> {
    let input = read_input(&config.input)?;

    let aggregation = aggregate(segment(&input.text));
    let blocks = aggregation.blocks();
    let duplicates = aggregation.duplicates();
    let placeholders = aggregation.placeholder_blocks();

    let records = aggregation.into_records();
    let written = write_records(&records, &config.output_dir)?;

    let report = SplitReport {
        output_dir: config.output_dir.clone(),
        files_written: written.len(),
        blocks,
        duplicates,
        placeholders,
        lossy_input: input.lossy,
    };

    tracing::info!(
        input = %config.input.display(),
        output = %config.output_dir.display(),
        files = report.files_written,
        blocks = report.blocks,
        duplicates = report.duplicates,
        placeholders = report.placeholders,
        "Split complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_split_cheat_db_counts() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("cheat.db");
        fs::write(
            &input,
            "_S ULUS-10080\n_C0 A\n_S ULUS-10080\n_C0 A\n_S\n_C0 B\n",
        )
        .unwrap();

        let config = SplitConfig::new(&input, temp_dir.path().join("output"));
        let report = split_cheat_db(&config).unwrap();

        assert_eq!(report.files_written, 2);
        assert_eq!(report.blocks, 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.placeholders, 1);
        assert!(!report.lossy_input);
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("output");
        let config = SplitConfig::new(temp_dir.path().join("cheat.db"), &output_dir);

        assert!(split_cheat_db(&config).is_err());
        assert!(!output_dir.exists());
    }
}
