//! Rendering of review results.

pub mod error;
pub mod master;
pub mod rows;
pub mod writers;

pub use error::{ReportError, Result};
pub use master::{MASTER_HEADERS, MasterRow, master_rows, write_master_csv};
pub use rows::{ERROR_MARKER, REPORT_HEADERS, ReportRow, report_rows};
pub use writers::{ReportFormat, write_csv_report, write_json_report, write_report_file};
