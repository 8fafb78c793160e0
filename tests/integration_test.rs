//! Integration tests for ip-exclude
//!
//! These tests verify the complete workflow from reading list files to the
//! printed report.

use ip_exclude::{
    build_report,
    config::Args,
    models::Family,
    output::{write_text_report, OutputFormat},
    processing::{find_overlapping_pair, verify_disjoint},
    run, Error, ListKind, NetworkError,
};

const DATA: &str = "src/tests/test_data";

fn data(file: &str) -> String {
    format!("{DATA}/{file}")
}

#[test]
fn test_hosting_workflow() {
    let report = build_report(data("include_hosting.txt"), data("exclude_relays.txt"))
        .expect("Failed to build report");

    assert_eq!(report.include.len(), 4, "Duplicate include line should collapse");
    assert_eq!(report.exclude.len(), 5);
    assert_eq!(report.output.len(), 24, "Expected 24 output networks");

    verify_disjoint(&report.output, &report.exclude).expect("Output overlaps exclude");
    assert_eq!(find_overlapping_pair(&report.output), None);

    let out: Vec<String> = report.output.iter().map(|n| n.to_string()).collect();
    assert_eq!(out.first().map(String::as_str), Some("51.68.0.0/21"));
    assert!(out.contains(&"51.68.12.35/32".to_string()));
    assert!(out.contains(&"51.68.201.0/24".to_string()));
    assert!(!out.iter().any(|n| n.starts_with("137.74.")));
    assert_eq!(&out[22..], ["51.75.128.0/17", "2001:41d0::/33"]);

    // 51.68.0.0/16 minus a /32 and a /24
    let v4_in_51_68: u128 = report
        .output
        .iter()
        .filter(|n| n.to_string().starts_with("51.68."))
        .map(|n| n.num_addresses().unwrap())
        .sum();
    assert_eq!(v4_in_51_68, 65536 - 1 - 256);
}

#[test]
fn test_world_minus_reserved() {
    let report = build_report(data("include_world.txt"), data("exclude_reserved.txt"))
        .expect("Failed to build report");

    assert_eq!(report.include.len(), 2);
    assert_eq!(report.exclude.len(), 7);
    assert_eq!(report.output.len(), 181);

    let v4 = report
        .output
        .iter()
        .filter(|n| n.family() == Family::V4)
        .count();
    assert_eq!(v4, 45);

    let v4_total: u128 = report
        .output
        .iter()
        .filter(|n| n.family() == Family::V4)
        .map(|n| n.num_addresses().unwrap())
        .sum();
    let reserved = (1u128 << 24) + (1 << 20) + (1 << 16) + (1 << 24) + (1 << 16);
    assert_eq!(v4_total, (1u128 << 32) - reserved);

    verify_disjoint(&report.output, &report.exclude).expect("Output overlaps exclude");
}

#[test]
fn test_text_report_layout() {
    let report = build_report(data("include_hosting.txt"), data("exclude_relays.txt"))
        .expect("Failed to build report");
    let mut buf = Vec::new();
    write_text_report(&report, &mut buf, 75).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "# 4 input include nets:");
    assert_eq!(
        lines[1],
        "#    51.68.0.0/16 51.75.0.0/16 137.74.0.0/16 2001:41d0::/32"
    );
    assert_eq!(lines[2], "# 5 input exclude nets:");
    assert_eq!(
        lines[3],
        "#    51.68.12.34/32 51.68.200.0/24 51.75.0.0/17 137.74.0.0/16"
    );
    assert_eq!(lines[4], "#    2001:41d0:8000::/33");
    assert_eq!(lines[5], "# 24 output nets");
    assert_eq!(lines[6], "51.68.0.0/21");
    assert_eq!(lines.len(), 6 + 24);
    for line in &lines[..6] {
        assert!(line.starts_with('#'));
        assert!(line.len() <= 75 + 5, "Comment line too long: {line}");
    }
}

#[test]
fn test_bad_exclude_aborts_before_output() {
    let args = Args {
        include_file: data("include_world.txt").into(),
        exclude_file: data("exclude_bad.txt").into(),
        format: OutputFormat::Text,
        wrap_width: 75,
        log_config: "no-such-log4rs.yml".into(),
        log_level: "off".into(),
    };
    let mut buf = Vec::new();
    let err = run(&args, &mut buf).unwrap_err();
    assert!(buf.is_empty(), "No output expected on parse failure");
    assert_eq!(
        err.to_string(),
        "exclude list, line 3: '192.168.1.1/16': '192.168.1.1/16' has host bits set"
    );

    match build_report(data("include_world.txt"), data("exclude_bad.txt")) {
        Err(Error::Parse {
            list: ListKind::Exclude,
            line_no: 3,
            source: NetworkError::HostBitsSet(_),
            ..
        }) => {}
        other => panic!("Unexpected result {other:?}"),
    }
}

#[test]
fn test_missing_include_file() {
    let err = build_report(data("nope.txt"), data("exclude_relays.txt")).unwrap_err();
    assert!(matches!(
        err,
        Error::Io {
            list: ListKind::Include,
            ..
        }
    ));
}

#[test]
fn test_json_run() {
    let args = Args {
        include_file: data("include_hosting.txt").into(),
        exclude_file: data("exclude_relays.txt").into(),
        format: OutputFormat::Json,
        wrap_width: 75,
        log_config: "no-such-log4rs.yml".into(),
        log_level: "off".into(),
    };
    let mut buf = Vec::new();
    run(&args, &mut buf).expect("run failed");
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["output"]["count"], 24);
    assert_eq!(value["include"]["networks"][3], "2001:41d0::/32");
}
