//! Tests for report rendering.

use namecheck_model::{CheckResult, FileReviewResult, Issue, QualifierProblem};
use namecheck_report::{
    ReportFormat, report_rows, write_csv_report, write_json_report, write_master_csv,
    write_report_file,
};

fn results() -> Vec<FileReviewResult> {
    let mut mismatch = CheckResult::mismatch(
        "부산미음동물류",
        "(민간)부산미음동물류",
        Issue::Qualifier {
            problems: vec![QualifierProblem::PrefixMissing],
            official: "(민간)부산미음동물류".to_string(),
        },
    )
    .with_location("R2 C1");
    mismatch.add_location("R5 C1");

    vec![
        FileReviewResult::from_details(
            "reports/a.csv",
            vec![CheckResult::matched("(LH)오산세교").with_location("R3 C1"), mismatch],
        ),
        FileReviewResult::from_details(
            "reports/b.txt",
            vec![CheckResult::matched("(LH)오산세교").with_location("L1")],
        ),
        FileReviewResult::extraction_error("reports/c.pdf", "unsupported format: .pdf"),
    ]
}

#[test]
fn rows_skip_matches_and_compliant_files() {
    let rows = report_rows(&results());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].location, "R2 C1, R5 C1");
    assert_eq!(rows[1].input, "오류");
}

#[test]
fn csv_report() {
    let mut buffer = Vec::new();
    write_csv_report(&mut buffer, &results()).expect("write csv");
    let output = String::from_utf8(buffer).expect("utf-8");
    insta::assert_snapshot!(output, @r#"
    파일명,위치,보고서 기재 명칭,공식명칭(추천),불일치 사유
    a.csv,"R2 C1, R5 C1",부산미음동물류,(민간)부산미음동물류,접두어 누락 → 공식: (민간)부산미음동물류
    c.pdf,,오류,,unsupported format: .pdf
    "#);
}

#[test]
fn json_report_carries_summary_and_all_files() {
    let mut buffer = Vec::new();
    write_json_report(&mut buffer, &results()).expect("write json");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

    assert_eq!(value["summary"]["files"], 3);
    assert_eq!(value["summary"]["matched"], 2);
    assert_eq!(value["summary"]["errors"], 1);
    assert_eq!(value["files"][1]["status"], "Compliant");
    assert!(value["generated_at"].as_str().is_some_and(|s| s.ends_with('Z')));
}

#[test]
fn master_csv_splits_names() {
    let mut buffer = Vec::new();
    write_master_csv(&mut buffer, &["(민간)부산미음동물류", "광명학온(2공구)"]).expect("write");
    let output = String::from_utf8(buffer).expect("utf-8");
    assert_eq!(
        output,
        "No.,공식 명칭,접두어,순수 명칭\n\
         1,(민간)부산미음동물류,민간,부산미음동물류\n\
         2,광명학온(2공구),,광명학온(2공구)\n"
    );
}

#[test]
fn csv_file_starts_with_bom() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.csv");
    write_report_file(&path, ReportFormat::Csv, &results()).expect("write report");

    let bytes = std::fs::read(&path).expect("read back");
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
}
