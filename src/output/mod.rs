//! Output formatting for subtraction results.
//!
//! - [`comment`] - Paragraph wrapping and `#` comment listings
//! - [`report`] - Text and JSON reports

mod comment;
mod report;

pub use comment::{comment_lines, wrap_text, COMMENT_PREFIX, DEFAULT_WIDTH};
pub use report::{write_json_report, write_report, write_text_report, OutputFormat, Report};
