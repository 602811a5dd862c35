//! Flattened report rows.

use namecheck_model::FileReviewResult;
use serde::Serialize;

/// Column headers of the mismatch report.
pub const REPORT_HEADERS: [&str; 5] = [
    "파일명",
    "위치",
    "보고서 기재 명칭",
    "공식명칭(추천)",
    "불일치 사유",
];

/// Written in the name column for files that failed extraction.
pub const ERROR_MARKER: &str = "오류";

/// One line of the mismatch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub file: String,
    pub location: String,
    pub input: String,
    pub suggestion: String,
    pub issue: String,
}

impl ReportRow {
    pub fn fields(&self) -> [&str; 5] {
        [
            self.file.as_str(),
            self.location.as_str(),
            self.input.as_str(),
            self.suggestion.as_str(),
            self.issue.as_str(),
        ]
    }
}

/// Rows for every mismatch and every extraction failure, in input order.
/// Compliant files and matches are left out.
pub fn report_rows(results: &[FileReviewResult]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for result in results {
        if let Some(error) = &result.error {
            rows.push(ReportRow {
                file: result.file.clone(),
                location: String::new(),
                input: ERROR_MARKER.to_string(),
                suggestion: String::new(),
                issue: error.clone(),
            });
            continue;
        }
        rows.extend(result.mismatches().map(|detail| ReportRow {
            file: result.file.clone(),
            location: detail.location(),
            input: detail.input.clone(),
            suggestion: detail.suggestion(),
            issue: detail.issue.to_string(),
        }));
    }
    rows
}
