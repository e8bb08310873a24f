use fwaudit_common::network::cidr::CidrCache;
use fwaudit_core::extractor;
use fwaudit_formats::policy::{self, RuleType};
use fwaudit_formats::{output, table};

use super::util::write;

const EXPORT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<gp:GPO xmlns:gp="http://www.microsoft.com/GroupPolicy/Settings"
        xmlns:fw="http://www.microsoft.com/GroupPolicy/Settings/WindowsFirewall">
  <gp:Computer>
    <gp:ExtensionData>
      <gp:Extension>
        <fw:InboundFirewallRules>
          <fw:Name>Allow SMB</fw:Name>
          <fw:RA4>10.0.0.0/255.0.0.0;192.168.10.0/255.255.255.0</fw:RA4>
        </fw:InboundFirewallRules>
        <fw:InboundFirewallRules>
          <fw:Name>Allow HTTPS</fw:Name>
          <fw:Protocol>6</fw:Protocol>
          <fw:LPort>443</fw:LPort>
          <fw:LPort>8443</fw:LPort>
        </fw:InboundFirewallRules>
      </gp:Extension>
    </gp:ExtensionData>
  </gp:Computer>
</gp:GPO>"#;

#[test]
fn missing_child_becomes_empty_column() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = write(dir.path(), "example.xml", EXPORT);

    let export = policy::read_policy_export(&export_path).unwrap();
    let mut cache = CidrCache::new();

    for rule_type in RuleType::ALL {
        let rule_table =
            extractor::extract_table(rule_type.element_name(), export.rules(rule_type), &mut cache);
        let path = dir
            .path()
            .join(output::rule_table_file_name(rule_type.element_name()));
        table::write_rule_table(&path, &rule_table).unwrap();
    }

    let inbound = std::fs::read_to_string(dir.path().join("InboundFirewallRules.csv")).unwrap();
    assert_eq!(
        inbound,
        "Name,RA4,Protocol,LPort\n\
         Allow SMB,10.0.0.0/8; 192.168.10.0/24,,\n\
         Allow HTTPS,,6,\"443, 8443\"\n"
    );

    let outbound = std::fs::read_to_string(dir.path().join("OutboundFirewallRules.csv")).unwrap();
    assert_eq!(outbound, "");
}

#[test]
fn missing_export_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = policy::read_policy_export(&dir.path().join("absent.xml"));
    assert!(matches!(result, Err(fwaudit_common::FwError::Io(_))));
}
