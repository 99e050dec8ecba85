pub mod output;

use crate::{convert_batch, CaseStyle, Conversion, ConversionReport, InvalidInputError};
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::BufRead;

/// Read one input per non-blank line
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

/// Convert every input into every style.
///
/// With `json_input` each input is parsed as a JSON value first, so
/// `null` or `123` go through input validation instead of being
/// treated as text.
pub fn build_report(
    inputs: &[String],
    styles: &[CaseStyle],
    json_input: bool,
) -> Result<ConversionReport> {
    let per_style: Vec<Vec<Result<String, InvalidInputError>>> = if json_input {
        let values = inputs
            .iter()
            .map(|raw| {
                serde_json::from_str::<Value>(raw)
                    .with_context(|| format!("Invalid JSON input: {}", raw))
            })
            .collect::<Result<Vec<_>>>()?;
        styles.iter().map(|&style| convert_batch(&values, style)).collect()
    } else {
        styles.iter().map(|&style| convert_batch(inputs, style)).collect()
    };

    let mut conversions = Vec::with_capacity(inputs.len() * styles.len());
    for (i, input) in inputs.iter().enumerate() {
        for (results, &style) in per_style.iter().zip(styles) {
            conversions.push(Conversion {
                position: i,
                input: input.clone(),
                style,
                result: results[i].clone(),
            });
        }
    }

    Ok(ConversionReport::new(conversions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_inputs_skips_blank_lines() {
        let inputs = read_inputs(Cursor::new("Hello World\n\n   \nfoo_bar\n")).unwrap();
        assert_eq!(inputs, vec!["Hello World", "foo_bar"]);
    }

    #[test]
    fn test_report_orders_by_input_then_style() {
        let inputs = vec!["Hello World".to_string(), "foo_bar".to_string()];
        let report = build_report(&inputs, &CaseStyle::ALL, false).unwrap();

        let outputs: Vec<_> = report
            .conversions
            .iter()
            .map(|c| c.result.clone().unwrap())
            .collect();
        assert_eq!(
            outputs,
            vec!["hello-world", "hello.world", "helloWorld", "foo-bar", "foo.bar", "fooBar"]
        );
        assert_eq!(report.inputs, 2);
        assert_eq!(report.converted, 6);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn test_json_inputs_are_validated() {
        let inputs = vec![
            "\"API response code\"".to_string(),
            "null".to_string(),
            "123".to_string(),
        ];
        let report = build_report(&inputs, &[CaseStyle::Camel], true).unwrap();

        assert_eq!(report.conversions[0].result.as_deref(), Ok("apiResponseCode"));
        assert_eq!(report.conversions[1].result, Err(InvalidInputError::Missing));
        assert_eq!(
            report.conversions[2].result,
            Err(InvalidInputError::WrongType { found: "number" })
        );
        assert_eq!(report.failed, 2);
        assert_eq!(report.rejected, 2);
    }

    #[test]
    fn test_rejected_input_counted_once_across_styles() {
        let inputs = vec!["null".to_string(), "\"fine\"".to_string()];
        let report = build_report(&inputs, &CaseStyle::ALL, true).unwrap();

        assert_eq!(report.conversions.len(), 6);
        assert_eq!(report.failed, 3);
        assert_eq!(report.inputs, 2);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let inputs = vec!["not json".to_string()];
        let err = build_report(&inputs, &[CaseStyle::Kebab], true).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON input"));
    }
}
