//! Output formatting shared by the commands.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::{CliError, Result};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
    /// CSV with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Renders a box-drawn table.
///
/// Columns are as wide as their widest cell; the first column is
/// left-aligned, the rest right-aligned.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                if i == 0 {
                    format!(" {:<w$} ", cell, w = w)
                } else {
                    format!(" {:>w$} ", cell, w = w)
                }
            })
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&header_cells));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, S: Serialize>(out: &mut W, value: &S) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Fixed four-decimal rendering used in tables.
pub fn fmt_value(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" csv ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: Unknown format: xml. Supported: json, csv, table"
        );
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(
            &["Name", "Value"],
            &[
                vec!["a".to_string(), "1.0000".to_string()],
                vec!["longer".to_string(), "-12.5000".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[5].starts_with('└'));
        assert_eq!(lines[3], "│ a      │   1.0000 │");
        assert_eq!(lines[4], "│ longer │ -12.5000 │");
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
