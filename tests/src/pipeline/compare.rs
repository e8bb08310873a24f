use fwaudit_common::FwError;
use fwaudit_common::rules::{ChangeType, PortField};
use fwaudit_core::differ;
use fwaudit_formats::table;

use super::util::{activity_csv, summarise_to, write};

#[test]
fn two_days_of_activity_are_compared() {
    let dir = tempfile::tempdir().unwrap();
    let day1 = write(
        dir.path(),
        "day1.csv",
        &activity_csv(&[
            ["app.exe", "6", "1.1.1.1", "443", "50000", "0", ""],
            ["old.exe", "6", "4.4.4.4", "80", "50001", "0", ""],
            ["same.exe", "17", "9.9.9.9", "53", "50002", "0", ""],
        ]),
    );
    let day2 = write(
        dir.path(),
        "day2.csv",
        &activity_csv(&[
            ["app.exe", "6", "1.1.1.1", "443", "50000", "0", ""],
            ["app.exe", "6", "2.2.2.2", "443", "50003", "0", ""],
            ["new.exe", "6", "3.3.3.3", "8080", "50004", "0", ""],
            ["same.exe", "17", "9.9.9.9", "53", "50005", "0", ""],
        ]),
    );

    let first = summarise_to(dir.path(), &day1, PortField::Outbound, "CSSum-Outbound-day1.csv");
    let updated = summarise_to(dir.path(), &day2, PortField::Outbound, "CSSum-Outbound-day2.csv");

    let original = table::read_summary_file(&first).unwrap();
    let current = table::read_summary_file(&updated).unwrap();
    let report = differ::diff(&original, &current).unwrap();

    assert_eq!(report.count(ChangeType::Added), 1);
    assert_eq!(report.count(ChangeType::Deleted), 1);
    assert_eq!(report.count(ChangeType::Modified), 1);

    let path = dir.path().join("CSCom-results.csv");
    table::write_diff_report(&path, &report).unwrap();
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "Svc,ImageFileName,Protocol,RemotePort,ChangeType,RemoteAddress,RemoteAddress_original,RemoteAddress_add,RemoteAddress_remove\n\
         ,new.exe,6,8080,Added,3.3.3.3,,,\n\
         ,old.exe,6,80,Deleted,,4.4.4.4,,\n\
         ,app.exe,6,443,Modified,1.1.1.1; 2.2.2.2,1.1.1.1,2.2.2.2,\n"
    );
}

#[test]
fn inbound_and_outbound_summaries_are_not_compared() {
    let dir = tempfile::tempdir().unwrap();
    let export = write(
        dir.path(),
        "export.csv",
        &activity_csv(&[
            ["app.exe", "6", "1.1.1.1", "443", "50000", "0", ""],
            ["app.exe", "6", "1.1.1.1", "50000", "443", "1", ""],
        ]),
    );
    let outbound = summarise_to(dir.path(), &export, PortField::Outbound, "out.csv");
    let inbound = summarise_to(dir.path(), &export, PortField::Inbound, "in.csv");

    let original = table::read_summary_file(&inbound).unwrap();
    let current = table::read_summary_file(&outbound).unwrap();

    let err = differ::diff(&original, &current).unwrap_err();
    assert!(matches!(err, FwError::PortFieldMismatch { .. }));
    assert!(err.to_string().contains("Inbound"));
}

#[test]
fn duplicated_rule_in_summary_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "dup.csv",
        "Svc,ImageFileName,Protocol,RemotePort,RemoteAddress\n\
         ,app.exe,6,443,1.1.1.1\n\
         ,app.exe,6,443,2.2.2.2\n",
    );

    assert!(matches!(
        table::read_summary_file(&path),
        Err(FwError::DuplicateKey { .. })
    ));
}
