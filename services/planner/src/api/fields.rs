//! Lenient numeric request fields.
//!
//! Form-driven clients post numbers as the raw text the user typed, so
//! numeric fields accept either a JSON integer or a string holding one.

use serde_json::Value;

use crate::api::error::FieldError;

/// Read an integer from a JSON number or numeric string.
pub fn integer(field: &str, value: Option<&Value>) -> Result<i64, FieldError> {
    let Some(value) = value else {
        return Err(FieldError::new(field, "is required"));
    };

    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| FieldError::new(field, "must be a whole number"))
}

/// Read an integer and narrow it to the target type.
pub fn bounded<T: TryFrom<i64>>(field: &str, value: Option<&Value>) -> Result<T, FieldError> {
    let n = integer(field, value)?;
    T::try_from(n).map_err(|_| FieldError::new(field, "is out of range"))
}

/// Read an optional boolean; absent or null means `false`.
pub fn flag(field: &str, value: Option<&Value>) -> Result<bool, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" | "" => Ok(false),
            _ => Err(FieldError::new(field, "must be true or false")),
        },
        Some(_) => Err(FieldError::new(field, "must be true or false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(40), Some(40))]
    #[case(json!("40"), Some(40))]
    #[case(json!(" -2 "), Some(-2))]
    #[case(json!(4.5), None)]
    #[case(json!("forty"), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    fn test_integer(#[case] value: Value, #[case] expected: Option<i64>) {
        assert_eq!(integer("capacity", Some(&value)).ok(), expected);
    }

    #[test]
    fn test_integer_missing() {
        let err = integer("capacity", None).unwrap_err();
        assert_eq!(err.field, "capacity");
        assert_eq!(err.message, "is required");
    }

    #[test]
    fn test_bounded_out_of_range() {
        let value = json!(-1);
        assert!(bounded::<u32>("capacity", Some(&value)).is_err());
        let value = json!(i64::from(i32::MAX) + 1);
        assert!(bounded::<i32>("floorNo", Some(&value)).is_err());
    }

    #[rstest]
    #[case(None, Some(false))]
    #[case(Some(json!(true)), Some(true))]
    #[case(Some(json!("on")), Some(true))]
    #[case(Some(json!("false")), Some(false))]
    #[case(Some(json!(3)), None)]
    fn test_flag(#[case] value: Option<Value>, #[case] expected: Option<bool>) {
        assert_eq!(flag("nearWashroom", value.as_ref()).ok(), expected);
    }
}
