//! Export module - the sectioned delimited text report.

mod report;


pub use report::{build_report, Delimiter, ReportOptions};
