use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reason an input was rejected before conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The input was absent (`None`, JSON `null`)
    #[error("input must not be null or undefined")]
    Missing,

    /// The input was present but not text
    #[error("input must be a string, got {found}")]
    WrongType { found: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidInputKind {
    Missing,
    WrongType,
}

impl InvalidInputError {
    pub fn kind(&self) -> InvalidInputKind {
        match self {
            InvalidInputError::Missing => InvalidInputKind::Missing,
            InvalidInputError::WrongType { .. } => InvalidInputKind::WrongType,
        }
    }
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputKind::Missing => write!(f, "missing"),
            InvalidInputKind::WrongType => write!(f, "wrong-type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_distinct() {
        let missing = InvalidInputError::Missing;
        let wrong = InvalidInputError::WrongType { found: "number" };

        assert_eq!(missing.to_string(), "input must not be null or undefined");
        assert_eq!(wrong.to_string(), "input must be a string, got number");
        assert_ne!(missing.to_string(), wrong.to_string());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(InvalidInputError::Missing.kind(), InvalidInputKind::Missing);
        assert_eq!(
            InvalidInputError::WrongType { found: "array" }.kind().to_string(),
            "wrong-type"
        );
        assert_eq!(
            serde_json::to_string(&InvalidInputKind::WrongType).unwrap(),
            "\"wrong-type\""
        );
    }
}
