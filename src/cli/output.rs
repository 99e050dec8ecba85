use crate::{CaseStyle, Conversion, ConversionReport, InvalidInputKind};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    style: CaseStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<InvalidInputKind>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    inputs: usize,
    rejected: usize,
    failed_conversions: usize,
    conversions: Vec<JsonConversion<'a>>,
}

pub fn print_report(
    report: &ConversionReport,
    colored_output: bool,
    format: &OutputFormat,
    show_style: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_report(report, colored_output, show_style);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(report)?);
            Ok(())
        }
    }
}

fn print_text_report(report: &ConversionReport, colored_output: bool, show_style: bool) {
    for conversion in &report.conversions {
        let line = format_conversion(conversion, colored_output, show_style);
        if conversion.is_ok() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    if report.failed > 0 {
        eprintln!("{}", format_summary(report, colored_output));
    }
}

/// Render one conversion as a single text line
pub fn format_conversion(conversion: &Conversion, colored_output: bool, show_style: bool) -> String {
    match &conversion.result {
        Ok(output) => {
            let label = format!("{:>5}", conversion.style);
            match (show_style, colored_output) {
                (true, true) => format!("{} {}", label.dimmed(), output.green()),
                (true, false) => format!("{} {}", label, output),
                (false, true) => output.green().to_string(),
                (false, false) => output.clone(),
            }
        }
        Err(err) => {
            if colored_output {
                format!(
                    "{} {} {}",
                    "✗".red().bold(),
                    conversion.input.yellow(),
                    err.to_string().red()
                )
            } else {
                format!("✗ {} {}", conversion.input, err)
            }
        }
    }
}

pub fn format_summary(report: &ConversionReport, colored: bool) -> String {
    let input_word = if report.inputs == 1 { "input" } else { "inputs" };

    if colored {
        format!(
            "{} {} of {} {} rejected",
            "✗".red().bold(),
            report.rejected.to_string().red().bold(),
            report.inputs,
            input_word
        )
    } else {
        format!("✗ {} of {} {} rejected", report.rejected, report.inputs, input_word)
    }
}

pub fn render_json(report: &ConversionReport) -> Result<String> {
    let conversions = report
        .conversions
        .iter()
        .map(|c| JsonConversion {
            input: &c.input,
            style: c.style,
            output: c.result.as_deref().ok(),
            error: c.result.as_ref().err().map(|e| e.to_string()),
            error_kind: c.result.as_ref().err().map(|e| e.kind()),
        })
        .collect();

    let output = JsonOutput {
        inputs: report.inputs,
        rejected: report.rejected,
        failed_conversions: report.failed,
        conversions,
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize report")
}
