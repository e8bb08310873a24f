use fwaudit_common::rules::PortField;
use fwaudit_core::aggregator;
use fwaudit_formats::{activity, table};

use super::util::{activity_csv, summarise_to, summary_name, write};

const SVCHOST: &str = r"\Device\HarddiskVolume3\Windows\System32\svchost.exe";
const APP: &str = r"\Device\HarddiskVolume3\Program Files\App\app.exe";
const DNS_CMD: &str = r"C:\WINDOWS\system32\svchost.exe -k NetworkService -p -s Dnscache";

#[test]
fn export_is_split_into_direction_tables() {
    let dir = tempfile::tempdir().unwrap();
    let csv = activity_csv(&[
        [SVCHOST, "17", "8.8.8.8", "53", "61000", "0", DNS_CMD],
        [SVCHOST, "17", "1.1.1.1", "53", "61001", "0", DNS_CMD],
        [SVCHOST, "17", "8.8.8.8", "53", "61002", "0", DNS_CMD],
        [APP, "6", "10.0.0.10", "50000", "443", "1", ""],
        [APP, "6", "10.0.0.2", "50001", "443", "1", ""],
        ["", "6", "10.0.0.3", "50002", "443", "1", ""],
    ]);
    let export = write(dir.path(), "export.csv", &csv);

    let [outbound, inbound] = [PortField::Outbound, PortField::Inbound]
        .map(|port_field| summarise_to(dir.path(), &export, port_field, &summary_name(port_field)));

    assert_eq!(
        std::fs::read_to_string(outbound).unwrap(),
        "Svc,ImageFileName,Protocol,RemotePort,RemoteAddress\n\
         Dnscache,%SystemRoot%\\System32\\svchost.exe,17,53,1.1.1.1; 8.8.8.8\n"
    );
    assert_eq!(
        std::fs::read_to_string(inbound).unwrap(),
        "Svc,ImageFileName,Protocol,LocalPort,RemoteAddress\n\
         ,%SystemDrive%\\Program Files\\App\\app.exe,6,443,10.0.0.2; 10.0.0.10\n"
    );
}

#[test]
fn same_connection_in_both_directions_stays_separate() {
    let rows = activity::read_activity(
        activity_csv(&[
            ["app.exe", "6", "1.1.1.1", "443", "443", "0", ""],
            ["app.exe", "6", "1.1.1.1", "443", "443", "1", ""],
        ])
        .as_bytes(),
        "export.csv",
    )
    .unwrap();

    let summaries = aggregator::aggregate(&rows);
    assert_eq!(summaries.inbound.len(), 1);
    assert_eq!(summaries.outbound.len(), 1);
}

#[test]
fn written_summary_reads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let csv = activity_csv(&[
        ["app.exe", "6", "10.0.0.1", "443", "50000", "0", ""],
        ["app.exe", "6", "10.0.0.0/8", "443", "50001", "0", ""],
        ["tool.exe", "17", "fe80::1", "123", "50002", "0", ""],
    ]);
    let export = write(dir.path(), "export.csv", &csv);
    let rows = activity::read_activity_export(&export).unwrap();
    let summaries = aggregator::aggregate(&rows);

    let path = dir.path().join("summary.csv");
    table::write_summary(&path, &summaries.outbound).unwrap();

    assert_eq!(table::read_summary_file(&path).unwrap(), summaries.outbound);
}

#[test]
fn export_without_required_columns_fails() {
    let dir = tempfile::tempdir().unwrap();
    let export = write(dir.path(), "export.csv", "ImageFileName,Protocol\napp.exe,6\n");

    let err = activity::read_activity_export(&export).unwrap_err();
    assert!(err.to_string().contains("RemoteAddress"));
}
