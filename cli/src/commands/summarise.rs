use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use fwaudit_common::config::Config;
use fwaudit_common::rules::PortField;
use fwaudit_core::aggregator::{self, Summaries};
use fwaudit_formats::{activity, output, table};
use tracing::{info, warn};

use crate::terminal::print;

pub fn summarise(csv_export: &Path, cfg: &Config) -> anyhow::Result<()> {
    let rows = activity::read_activity_export(csv_export)
        .with_context(|| format!("failed to read activity export {}", csv_export.display()))?;
    info!("Read {} activity rows", rows.len());

    let summaries = aggregator::aggregate(&rows);
    if summaries.without_image > 0 {
        info!("Ignored {} rows without an ImageFileName", summaries.without_image);
    }

    let timestamp = output::timestamp(Local::now());
    for (port_field, path) in write_summaries(&summaries, &cfg.output_dir, &timestamp)? {
        let label = format!("{port_field} rules");
        print::aligned_line(&label, summaries.get(port_field).len(), cfg.quiet);
        print::saved(&label, &path);
    }

    Ok(())
}

/// Writes one summary per direction that saw traffic, Outbound first.
/// Every file of a run shares `timestamp`.
pub fn write_summaries(
    summaries: &Summaries,
    output_dir: &Path,
    timestamp: &str,
) -> anyhow::Result<Vec<(PortField, PathBuf)>> {
    let mut written = Vec::new();
    for port_field in [PortField::Outbound, PortField::Inbound] {
        let summary = summaries.get(port_field);
        if summary.is_empty() {
            warn!("No {port_field} connections");
            continue;
        }

        let path = output_dir.join(output::summary_file_name(port_field, timestamp));
        table::write_summary(&path, summary)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push((port_field, path));
    }
    Ok(written)
}
