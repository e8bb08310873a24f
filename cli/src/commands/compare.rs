use std::path::Path;

use anyhow::Context;
use chrono::Local;
use colored::*;
use fwaudit_common::config::Config;
use fwaudit_common::rules::ChangeType;
use fwaudit_core::differ;
use fwaudit_formats::{output, table};

use crate::terminal::print;

pub fn compare(first: &Path, updated: &Path, cfg: &Config) -> anyhow::Result<()> {
    let original = table::read_summary_file(first)
        .with_context(|| format!("failed to read summary {}", first.display()))?;
    let current = table::read_summary_file(updated)
        .with_context(|| format!("failed to read summary {}", updated.display()))?;

    let report = differ::diff(&original, &current)
        .with_context(|| format!("cannot compare {} with {}", first.display(), updated.display()))?;

    let timestamp = output::timestamp(Local::now());
    let path = cfg.output_dir.join(output::comparison_file_name(&timestamp));
    table::write_diff_report(&path, &report)
        .with_context(|| format!("failed to write {}", path.display()))?;

    for change in [ChangeType::Added, ChangeType::Deleted, ChangeType::Modified] {
        print::aligned_line(&change.to_string(), report.count(change), cfg.quiet);
    }
    if cfg.quiet == 0 {
        print::fat_separator(cfg.quiet);
        let outcome: ColoredString = if report.is_empty() {
            "No changes between summaries".green().bold()
        } else {
            format!("{} changed rules", report.entries.len()).yellow().bold()
        };
        print::centerln(&outcome.to_string());
    }
    print::saved("Compare results", &path);

    Ok(())
}
