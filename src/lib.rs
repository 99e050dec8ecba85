pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

pub use config::{Config, ConfigLayer};
pub use converter::input::CaseInput;
pub use converter::{
    convert, convert_batch, to_camel_case, to_dot_case, to_kebab_case, tokenize, CaseStyle,
};
pub use error::{InvalidInputError, InvalidInputKind};

use std::collections::HashSet;

/// Outcome of converting one input into one style
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Index of the input this conversion came from
    pub position: usize,
    pub input: String,
    pub style: CaseStyle,
    pub result: Result<String, InvalidInputError>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Conversions of a set of inputs into one or more styles.
///
/// `inputs` and `rejected` count distinct inputs, `converted` and
/// `failed` count individual conversions.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub inputs: usize,
    pub rejected: usize,
    pub converted: usize,
    pub failed: usize,
    pub conversions: Vec<Conversion>,
}

impl ConversionReport {
    pub fn new(conversions: Vec<Conversion>) -> Self {
        let inputs: HashSet<usize> = conversions.iter().map(|c| c.position).collect();
        let rejected: HashSet<usize> = conversions
            .iter()
            .filter(|c| !c.is_ok())
            .map(|c| c.position)
            .collect();
        let failed = conversions.iter().filter(|c| !c.is_ok()).count();

        Self {
            inputs: inputs.len(),
            rejected: rejected.len(),
            converted: conversions.len() - failed,
            failed,
            conversions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversion(position: usize, style: CaseStyle, ok: bool) -> Conversion {
        Conversion {
            position,
            input: format!("input {}", position),
            style,
            result: if ok {
                Ok(String::new())
            } else {
                Err(InvalidInputError::Missing)
            },
        }
    }

    #[test]
    fn test_report_counts_inputs_and_conversions_separately() {
        let mut conversions = Vec::new();
        for style in CaseStyle::ALL {
            conversions.push(conversion(0, style, true));
            conversions.push(conversion(1, style, false));
        }

        let report = ConversionReport::new(conversions);
        assert_eq!(report.inputs, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.converted, 3);
        assert_eq!(report.failed, 3);
    }
}
