use crate::error::InvalidInputError;
use serde_json::Value;
use std::borrow::Cow;

/// A value that may or may not hold convertible text.
///
/// Conversions call [`CaseInput::as_text`] before doing any work, so
/// absent values and non-text values are rejected up front with a
/// tagged [`InvalidInputError`].
pub trait CaseInput {
    fn as_text(&self) -> Result<&str, InvalidInputError>;
}

impl CaseInput for str {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        Ok(self)
    }
}

impl CaseInput for String {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        Ok(self.as_str())
    }
}

impl CaseInput for Cow<'_, str> {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        Ok(self.as_ref())
    }
}

impl<T: CaseInput + ?Sized> CaseInput for &T {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        (**self).as_text()
    }
}

impl<T: CaseInput> CaseInput for Option<T> {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        match self {
            Some(value) => value.as_text(),
            None => Err(InvalidInputError::Missing),
        }
    }
}

impl CaseInput for Value {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            Value::Null => Err(InvalidInputError::Missing),
            Value::Bool(_) => Err(InvalidInputError::WrongType { found: "boolean" }),
            Value::Number(_) => Err(InvalidInputError::WrongType { found: "number" }),
            Value::Array(_) => Err(InvalidInputError::WrongType { found: "array" }),
            Value::Object(_) => Err(InvalidInputError::WrongType { found: "object" }),
        }
    }
}

impl<T> CaseInput for [T] {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        Err(InvalidInputError::WrongType { found: "array" })
    }
}

impl<T> CaseInput for Vec<T> {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        Err(InvalidInputError::WrongType { found: "array" })
    }
}

impl CaseInput for bool {
    fn as_text(&self) -> Result<&str, InvalidInputError> {
        Err(InvalidInputError::WrongType { found: "boolean" })
    }
}

macro_rules! reject_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CaseInput for $ty {
                fn as_text(&self) -> Result<&str, InvalidInputError> {
                    Err(InvalidInputError::WrongType { found: "number" })
                }
            }
        )*
    };
}

reject_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_is_accepted() {
        assert_eq!("hello".as_text(), Ok("hello"));
        assert_eq!(String::from("hello").as_text(), Ok("hello"));
        assert_eq!(Some("hello").as_text(), Ok("hello"));
        assert_eq!(json!("hello").as_text(), Ok("hello"));
        assert_eq!(Cow::Borrowed("hello").as_text(), Ok("hello"));
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(None::<&str>.as_text(), Err(InvalidInputError::Missing));
        assert_eq!(Value::Null.as_text(), Err(InvalidInputError::Missing));
        assert_eq!(Some(None::<String>).as_text(), Err(InvalidInputError::Missing));
    }

    #[test]
    fn test_wrong_types() {
        let number = InvalidInputError::WrongType { found: "number" };
        assert_eq!(123i32.as_text(), Err(number.clone()));
        assert_eq!(7u8.as_text(), Err(number.clone()));
        assert_eq!(1.5f64.as_text(), Err(number.clone()));
        assert_eq!(json!(123).as_text(), Err(number));
        assert_eq!(
            true.as_text(),
            Err(InvalidInputError::WrongType { found: "boolean" })
        );
        assert_eq!(
            json!({"a": 1}).as_text(),
            Err(InvalidInputError::WrongType { found: "object" })
        );
        assert_eq!(
            vec!["a", "b"].as_text(),
            Err(InvalidInputError::WrongType { found: "array" })
        );
        assert_eq!(
            json!(["a"]).as_text(),
            Err(InvalidInputError::WrongType { found: "array" })
        );
    }
}
