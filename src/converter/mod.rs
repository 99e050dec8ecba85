pub mod input;
pub mod joiner;
pub mod tokenizer;

use crate::error::InvalidInputError;
use input::CaseInput;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

pub use tokenizer::tokenize;

/// Target casing convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// lowercase words joined by `-`
    #[default]
    Kebab,
    /// lowercase words joined by `.`
    Dot,
    /// first word lowercase, later words capitalized, no separator
    Camel,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Kebab, CaseStyle::Dot, CaseStyle::Camel];

    /// Convert already-validated text. Never fails.
    pub fn apply(self, text: &str) -> String {
        let tokens = tokenize(text);
        let output = joiner::join(&tokens, self);
        trace!(style = %self, tokens = tokens.len(), "converted text");
        output
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            "camel" | "camelcase" | "camel-case" => Ok(CaseStyle::Camel),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
            CaseStyle::Camel => "camel",
        };
        f.pad(name)
    }
}

/// Validate `input` and convert it into `style`
pub fn convert<I: CaseInput>(input: I, style: CaseStyle) -> Result<String, InvalidInputError> {
    let text = input.as_text()?;
    Ok(style.apply(text))
}

pub fn to_kebab_case<I: CaseInput>(input: I) -> Result<String, InvalidInputError> {
    convert(input, CaseStyle::Kebab)
}

pub fn to_dot_case<I: CaseInput>(input: I) -> Result<String, InvalidInputError> {
    convert(input, CaseStyle::Dot)
}

pub fn to_camel_case<I: CaseInput>(input: I) -> Result<String, InvalidInputError> {
    convert(input, CaseStyle::Camel)
}

/// Convert many inputs in parallel. Results keep the order of `inputs`.
pub fn convert_batch<I>(inputs: &[I], style: CaseStyle) -> Vec<Result<String, InvalidInputError>>
where
    I: CaseInput + Sync,
{
    debug!(count = inputs.len(), style = %style, "converting batch");
    inputs.par_iter().map(|input| convert(input, style)).collect()
}
