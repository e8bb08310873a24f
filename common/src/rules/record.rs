/// One flattened policy rule: a value for every field of its [`RuleTable`].
///
/// Values are stored in the table's field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirewallRule {
    values: Vec<(String, String)>,
}

impl FirewallRule {
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(_, value)| value.as_str())
    }
}

/// Every rule of one type (`InboundFirewallRules`, `OutboundFirewallRules`).
///
/// `fields` is the union of field names over all rules, in first-seen order,
/// and is the column header when the table is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    pub rule_type: String,
    pub fields: Vec<String>,
    pub rules: Vec<FirewallRule>,
}

impl RuleTable {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A policy rule element as read from the export, before flattening.
///
/// `children` holds `(field name, text)` for each direct child element, in
/// document order. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRule {
    pub children: Vec<(String, String)>,
}

impl RawRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, text: impl Into<String>) {
        self.children.push((field.into(), text.into()));
    }
}
