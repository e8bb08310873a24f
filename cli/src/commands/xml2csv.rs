use std::path::Path;

use anyhow::Context;
use fwaudit_common::config::Config;
use fwaudit_common::network::cidr::CidrCache;
use fwaudit_common::rules::RuleTable;
use fwaudit_core::extractor;
use fwaudit_formats::policy::{self, RuleType};
use fwaudit_formats::{output, table};
use tracing::info;

use crate::terminal::print;

pub fn xml2csv(export: &Path, cfg: &Config) -> anyhow::Result<()> {
    let policy = policy::read_policy_export(export)
        .with_context(|| format!("failed to read policy export {}", export.display()))?;

    let mut cache = CidrCache::new();
    let tables: Vec<RuleTable> = RuleType::ALL
        .into_iter()
        .map(|rule_type| {
            extractor::extract_table(rule_type.element_name(), policy.rules(rule_type), &mut cache)
        })
        .collect();

    for rule_table in &tables {
        info!(
            "{}: {} rules with {} fields",
            rule_table.rule_type,
            rule_table.len(),
            rule_table.fields.len()
        );
        let path = cfg
            .output_dir
            .join(output::rule_table_file_name(&rule_table.rule_type));
        table::write_rule_table(&path, rule_table)
            .with_context(|| format!("failed to write {}", path.display()))?;
        print::aligned_line(&rule_table.rule_type, rule_table.len(), cfg.quiet);
        print::saved(&rule_table.rule_type, &path);
    }

    Ok(())
}
