//! Command-line interface for the splitter.

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::SplitConfig;
use crate::error::Result;
use crate::splitter::split_cheat_db;
use crate::types::SplitReport;

/// Split cheat.db into one deduplicated .ini file per game in output/.
///
/// Reads `cheat.db` from the current directory and overwrites the matching
/// files in `output/`.
#[derive(Parser)]
#[command(name = "cheatdb-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {}

/// Run the CLI.
pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    split_command(&SplitConfig::default())
}

/// Execute the split with the fixed paths.
fn split_command(config: &SplitConfig) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Splitting {}...", config.input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match split_cheat_db(config) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            if e.files_written() > 0 {
                eprintln!(
                    "{} {} files in '{}' were written before the failure.",
                    style("Partial run:").yellow().bold(),
                    e.files_written(),
                    config.output_dir.display()
                );
            }
            return Err(e);
        }
    };

    pb.finish_and_clear();
    print_report(&report);

    Ok(())
}

fn print_report(report: &SplitReport) {
    println!("  Blocks: {}", report.blocks);
    if report.duplicates > 0 {
        println!("  Duplicates skipped: {}", style(report.duplicates).yellow());
    }
    if report.placeholders > 0 {
        println!(
            "  Blocks without game code: {}",
            style(report.placeholders).yellow().bold()
        );
    }
    if report.lossy_input {
        println!(
            "  {}",
            style("Input contained invalid UTF-8; bad bytes were replaced").yellow()
        );
    }

    println!(
        "{} Wrote/updated {} files in '{}'.",
        style("Done.").green().bold(),
        report.files_written,
        report.output_dir.display()
    );
}
