//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! human layouts for version reports, validation findings and field help.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use semverkit_core::{ErrorKind, Finding, SemVer, VersionPart};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the parts of a version
    fn format_version_report(&self, report: &VersionReport) -> Result<String>;

    /// Format validation findings and the corrected version
    fn format_validation_report(&self, report: &ValidationReport<'_>) -> Result<String>;

    /// Format field descriptions
    fn format_field_infos(&self, fields: &[FieldInfo]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_version_report(&self, report: &VersionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_version_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_validation_report(&self, report: &ValidationReport<'_>) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_field_infos(&self, fields: &[FieldInfo]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_field_infos_human(fields)),
            _ => self.format(&fields),
        }
    }
}

/// The parts of a parsed version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionReport {
    pub version: String,
    pub core: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Vec<String>,
    pub build: Vec<String>,
    pub is_pre_release: bool,
    pub is_valid: bool,
}

impl From<&SemVer> for VersionReport {
    fn from(version: &SemVer) -> Self {
        Self {
            version: version.to_string(),
            core: version.core(),
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release: version.pre_release().to_vec(),
            build: version.build(),
            is_pre_release: version.is_pre_release(),
            is_valid: version.is_valid(),
        }
    }
}

/// Outcome of validating one input
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport<'a> {
    pub input: &'a str,
    pub is_valid: bool,
    pub corrected: String,
    pub errors: &'a [ErrorKind],
    pub findings: &'a [Finding],
}

/// Presentation metadata for one version part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInfo {
    pub part: VersionPart,
    pub label: &'static str,
    pub description: &'static str,
    pub increment_hint: Option<&'static str>,
}

impl From<VersionPart> for FieldInfo {
    fn from(part: VersionPart) -> Self {
        Self {
            part,
            label: part.label(),
            description: part.description(),
            increment_hint: part.increment_hint(),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!("Outputting data: {}", formatted);
        self.write_block(&formatted)
    }

    /// Write a one-line human result, or the structured value for machine formats
    pub fn emit<T: Serialize>(&mut self, human: &str, value: &T) -> Result<()> {
        if self.format == OutputFormat::Human {
            self.writeln(human)
        } else {
            self.data(value)
        }
    }

    /// Write the parts of a version
    pub fn version_report(&mut self, report: &VersionReport) -> Result<()> {
        let formatted = self.format.format_version_report(report)?;
        self.write_block(&formatted)
    }

    /// Write validation findings
    pub fn validation_report(&mut self, report: &ValidationReport<'_>) -> Result<()> {
        let formatted = self.format.format_validation_report(report)?;
        self.write_block(&formatted)
    }

    /// Write field descriptions
    pub fn field_infos(&mut self, fields: &[FieldInfo]) -> Result<()> {
        let formatted = self.format.format_field_infos(fields)?;
        self.write_block(&formatted)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.trim_end().bold().to_string())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i < widths.len() {
                        format!("{:width$}", cell, width = widths[i])
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }

    fn write_block(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Format the parts of a version for human reading
fn format_version_report_human(report: &VersionReport) -> String {
    let rows = [
        ("Version", report.version.clone()),
        (VersionPart::Major.label(), report.major.to_string()),
        (VersionPart::Minor.label(), report.minor.to_string()),
        (VersionPart::Patch.label(), report.patch.to_string()),
        (VersionPart::PreRelease.label(), or_none(&report.pre_release)),
        (VersionPart::Build.label(), or_none(&report.build)),
        ("Valid", yes_no(report.is_valid).to_string()),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:width$} {}\n", format!("{}:", label), value, width = width));
    }
    output
}

/// Format validation findings for human reading
fn format_validation_report_human(report: &ValidationReport<'_>) -> String {
    if report.is_valid {
        return format!("✓ {} is a valid semantic version\n", report.input);
    }

    let mut output = format!(
        "✗ {} is not a valid semantic version - {} problem(s)\n",
        report.input,
        report.findings.len()
    );
    for finding in report.findings {
        output.push_str(&format!("  • {}\n", finding));
    }
    output.push_str(&format!("Corrected: {}\n", report.corrected));
    output
}

/// Format field descriptions for human reading
fn format_field_infos_human(fields: &[FieldInfo]) -> String {
    let mut output = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", field.label));
        output.push_str(&format!("  {}\n", field.description));
        if let Some(hint) = field.increment_hint {
            output.push_str(&format!("  Increment: {}\n", hint));
        }
    }
    output
}

fn or_none(identifiers: &[String]) -> String {
    if identifiers.is_empty() {
        "(none)".to_string()
    } else {
        identifiers.join(".")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
