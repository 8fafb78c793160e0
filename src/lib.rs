// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Error, NetworkError, Result};
pub use input::ListKind;
pub use models::{Network, NetworkSet};
pub use output::Report;

use std::path::Path;

/// Read both lists, subtract, and return the report. Nothing is written, so a
/// parse failure on either list leaves no partial output behind.
pub fn build_report<P: AsRef<Path>, Q: AsRef<Path>>(
    include_file: P,
    exclude_file: Q,
) -> Result<Report> {
    let include = input::read_network_file(include_file, ListKind::Include)?;
    let exclude = input::read_network_file(exclude_file, ListKind::Exclude)?;
    if let Some((a, b)) = processing::find_overlapping_pair(&include) {
        log::warn!("include list overlaps itself: {a} and {b}");
    }
    let output = processing::subtract(include.clone(), &exclude)?;
    Ok(Report {
        include,
        exclude,
        output,
    })
}

/// Run the whole tool described by `args`, writing the report to `out`.
pub fn run<W: std::io::Write>(
    args: &config::Args,
    out: &mut W,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let report = build_report(&args.include_file, &args.exclude_file)?;
    output::write_report(&report, args.format, out, args.wrap_width)?;
    Ok(())
}
