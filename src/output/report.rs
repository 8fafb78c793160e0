//! Subtraction report in text or JSON form.

use super::comment::comment_lines;
use crate::models::NetworkSet;
use serde::Serialize;
use std::io::{self, Write};

/// Inputs and result of one subtraction run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub include: NetworkSet,
    pub exclude: NetworkSet,
    pub output: NetworkSet,
}

/// Output format of the report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comment-wrapped listings followed by one output network per line
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

#[derive(Serialize)]
struct JsonList<'a> {
    count: usize,
    networks: &'a NetworkSet,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    include: JsonList<'a>,
    exclude: JsonList<'a>,
    output: JsonList<'a>,
}

impl<'a> From<&'a NetworkSet> for JsonList<'a> {
    fn from(networks: &'a NetworkSet) -> Self {
        JsonList {
            count: networks.len(),
            networks,
        }
    }
}

/// Write the report as `#` comment listings of the inputs, then the sorted
/// output networks one per line.
pub fn write_text_report<W: Write>(report: &Report, out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "# {} input include nets:", report.include.len())?;
    for line in comment_lines(&report.include, width) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "# {} input exclude nets:", report.exclude.len())?;
    for line in comment_lines(&report.exclude, width) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "# {} output nets", report.output.len())?;
    for net in &report.output {
        writeln!(out, "{net}")?;
    }
    Ok(())
}

/// Write the report as a pretty-printed JSON object.
pub fn write_json_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let json = JsonReport {
        include: (&report.include).into(),
        exclude: (&report.exclude).into(),
        output: (&report.output).into(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}

/// Write the report in `format`.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    out: &mut W,
    width: usize,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text_report(report, out, width),
        OutputFormat::Json => write_json_report(report, out),
    }
}
