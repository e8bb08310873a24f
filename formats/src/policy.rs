//! # Policy Export Reader
//!
//! Pulls rule elements out of a Windows Firewall Group Policy XML export.
//!
//! A rule is any element in the firewall settings namespace named
//! `InboundFirewallRules` or `OutboundFirewallRules`, at any depth. Each of its
//! direct children becomes one `(local name, trimmed text)` pair. Deeper
//! elements are not fields and are skipped.

use std::path::Path;

use fwaudit_common::FwError;
use fwaudit_common::rules::RawRule;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::debug;

pub const FIREWALL_NAMESPACE: &str = "http://www.microsoft.com/GroupPolicy/Settings/WindowsFirewall";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    Inbound,
    Outbound,
}

impl RuleType {
    pub const ALL: [RuleType; 2] = [RuleType::Inbound, RuleType::Outbound];

    /// Element name in the export, also used as the CSV file stem.
    pub fn element_name(self) -> &'static str {
        match self {
            RuleType::Inbound => "InboundFirewallRules",
            RuleType::Outbound => "OutboundFirewallRules",
        }
    }

    fn from_element(namespace: &ResolveResult, local_name: &[u8]) -> Option<Self> {
        let ResolveResult::Bound(Namespace(namespace)) = namespace else {
            return None;
        };
        if *namespace != FIREWALL_NAMESPACE.as_bytes() {
            return None;
        }
        RuleType::ALL
            .into_iter()
            .find(|rule_type| rule_type.element_name().as_bytes() == local_name)
    }
}

/// Rule elements of an export, per type, in document order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PolicyExport {
    pub inbound: Vec<RawRule>,
    pub outbound: Vec<RawRule>,
}

impl PolicyExport {
    pub fn rules(&self, rule_type: RuleType) -> &[RawRule] {
        match rule_type {
            RuleType::Inbound => &self.inbound,
            RuleType::Outbound => &self.outbound,
        }
    }

    fn push(&mut self, rule_type: RuleType, rule: RawRule) {
        match rule_type {
            RuleType::Inbound => self.inbound.push(rule),
            RuleType::Outbound => self.outbound.push(rule),
        }
    }
}

struct OpenRule {
    rule_type: RuleType,
    depth: usize,
    rule: RawRule,
}

struct OpenField {
    name: String,
    text: String,
    /// Set once a nested element starts; later text belongs to that element's tail.
    text_closed: bool,
}

fn close_text(open_field: &mut Option<OpenField>) {
    if let Some(field) = open_field.as_mut() {
        field.text_closed = true;
    }
}

pub fn read_policy_export(path: &Path) -> Result<PolicyExport, FwError> {
    let xml = std::fs::read_to_string(path)?;
    parse_policy_export(&xml)
}

pub fn parse_policy_export(xml: &str) -> Result<PolicyExport, FwError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut export = PolicyExport::default();
    let mut depth: usize = 0;
    let mut open_rule: Option<OpenRule> = None;
    let mut open_field: Option<OpenField> = None;

    loop {
        let (namespace, event) = reader
            .read_resolved_event()
            .map_err(|e| FwError::Xml(e.to_string()))?;

        let rule_depth = open_rule.as_ref().map(|rule| rule.depth);

        match event {
            Event::Start(element) => {
                depth += 1;
                let local_name = element.local_name();
                match rule_depth {
                    None => {
                        if let Some(rule_type) = RuleType::from_element(&namespace, local_name.as_ref()) {
                            open_rule = Some(OpenRule {
                                rule_type,
                                depth,
                                rule: RawRule::new(),
                            });
                        }
                    }
                    Some(rule_depth) if depth == rule_depth + 1 => {
                        open_field = Some(OpenField {
                            name: String::from_utf8_lossy(local_name.as_ref()).into_owned(),
                            text: String::new(),
                            text_closed: false,
                        });
                    }
                    Some(_) => close_text(&mut open_field),
                }
            }
            Event::Empty(element) => {
                let local_name = element.local_name();
                match (rule_depth, open_rule.as_mut()) {
                    (None, _) => {
                        if let Some(rule_type) = RuleType::from_element(&namespace, local_name.as_ref()) {
                            export.push(rule_type, RawRule::new());
                        }
                    }
                    (Some(rule_depth), Some(rule)) if depth == rule_depth => {
                        rule.rule
                            .push(String::from_utf8_lossy(local_name.as_ref()), String::new());
                    }
                    _ => close_text(&mut open_field),
                }
            }
            Event::Text(text) => {
                if let Some(field) = open_field.as_mut().filter(|field| !field.text_closed) {
                    let text = text.unescape().map_err(|e| FwError::Xml(e.to_string()))?;
                    field.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(field) = open_field.as_mut().filter(|field| !field.text_closed) {
                    field.text.push_str(&String::from_utf8_lossy(data.as_ref()));
                }
            }
            Event::End(_) => {
                match rule_depth {
                    Some(rule_depth) if depth == rule_depth + 1 => {
                        if let (Some(rule), Some(field)) = (open_rule.as_mut(), open_field.take()) {
                            rule.rule.push(field.name, field.text.trim());
                        }
                    }
                    Some(rule_depth) if depth == rule_depth => {
                        if let Some(rule) = open_rule.take() {
                            export.push(rule.rule_type, rule.rule);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(rule) = open_rule {
        return Err(FwError::Xml(format!(
            "document ended inside a {} element",
            rule.rule_type.element_name()
        )));
    }

    debug!(
        "Read {} inbound and {} outbound rule elements",
        export.inbound.len(),
        export.outbound.len()
    );
    Ok(export)
}
