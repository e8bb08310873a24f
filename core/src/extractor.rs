//! # Policy Rule Extraction
//!
//! Rules in a policy export do not share a schema: each rule only carries the
//! child elements that apply to it. Flattening is therefore done in two passes.
//! The first collects the union of field names over every rule of a type, the
//! second builds one record per rule against that field list, filling gaps with
//! empty strings.

use std::collections::HashSet;

use fwaudit_common::network::cidr::CidrCache;
use fwaudit_common::rules::address::ADDRESS_SEPARATOR;
use fwaudit_common::rules::{FirewallRule, RawRule, RuleTable};
use tracing::debug;

/// Fields holding `;` separated address/subnet lists.
const ADDRESS_FIELDS: [&str; 2] = ["RA4", "LA4"];

/// Separator between repeated occurrences of any other field.
const REPEAT_SEPARATOR: &str = ", ";

/// Union of field names over `rules`, in first-seen order.
pub fn field_universe(rules: &[RawRule]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut fields = Vec::new();
    for rule in rules {
        for (field, _) in &rule.children {
            if seen.insert(field.as_str()) {
                fields.push(field.clone());
            }
        }
    }
    fields
}

/// Flattens one rule against `fields`. Children not named in `fields` are ignored.
pub fn extract_rule(rule: &RawRule, fields: &[String], cache: &mut CidrCache) -> FirewallRule {
    let mut values: Vec<(String, String)> = fields
        .iter()
        .map(|field| (field.clone(), String::new()))
        .collect();

    for (field, text) in &rule.children {
        let Some((_, value)) = values.iter_mut().find(|(name, _)| name == field) else {
            continue;
        };

        if ADDRESS_FIELDS.contains(&field.as_str()) {
            let entries: Vec<String> = text
                .split(';')
                .map(|entry| cache.subnet_to_cidr(entry))
                .collect();
            append(value, &entries.join(ADDRESS_SEPARATOR), ADDRESS_SEPARATOR);
        } else {
            append(value, text, REPEAT_SEPARATOR);
        }
    }

    FirewallRule::new(values)
}

/// Runs both passes over every rule of `rule_type`.
pub fn extract_table(rule_type: &str, rules: &[RawRule], cache: &mut CidrCache) -> RuleTable {
    let fields = field_universe(rules);
    debug!("{rule_type}: {} rules over {} fields", rules.len(), fields.len());

    let rules = rules
        .iter()
        .map(|rule| extract_rule(rule, &fields, cache))
        .collect();

    RuleTable {
        rule_type: rule_type.to_string(),
        fields,
        rules,
    }
}

fn append(value: &mut String, text: &str, separator: &str) {
    if !value.is_empty() {
        value.push_str(separator);
    }
    value.push_str(text);
}
