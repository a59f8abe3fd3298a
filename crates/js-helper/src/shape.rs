//! Value-shape predicates.

use crate::value::JsValue;
use regex::Regex;
use std::sync::OnceLock;

fn number_string_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("number string pattern"))
}

fn phone_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{11}$").expect("phone number pattern"))
}

/// Whether the value is a number greater than zero. `NaN` is not.
pub fn is_positive_number(value: &JsValue) -> bool {
    value.as_f64().is_some_and(|n| n > 0.0)
}

/// Whether the value is a number less than zero. `-0` is not.
pub fn is_negative_number(value: &JsValue) -> bool {
    value.as_f64().is_some_and(|n| n < 0.0)
}

/// Whether the value is a string of digits with at most one decimal point,
/// such as `"12"`, `"12.3"`, `".5"` or `"7."`. A lone `"."` is rejected; the
/// empty string is accepted.
///
/// # Examples
///
/// ```
/// use js_helper::{is_number_string, JsValue};
///
/// assert!(is_number_string(&JsValue::from("12.3")));
/// assert!(!is_number_string(&JsValue::from(".")));
/// assert!(!is_number_string(&JsValue::from(12.3)));
/// ```
pub fn is_number_string(value: &JsValue) -> bool {
    value
        .as_str()
        .is_some_and(|s| s != "." && number_string_regex().is_match(s))
}

/// Whether the value is a string of exactly 11 digits.
pub fn is_phone_number(value: &JsValue) -> bool {
    value
        .as_str()
        .is_some_and(|s| phone_number_regex().is_match(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_negative() {
        assert!(is_positive_number(&JsValue::from(1.5)));
        assert!(!is_positive_number(&JsValue::from(0.0)));
        assert!(!is_positive_number(&JsValue::from(-2.0)));
        assert!(is_negative_number(&JsValue::from(-2.0)));
        assert!(!is_negative_number(&JsValue::from(-0.0)));
        assert!(!is_negative_number(&JsValue::from(3.0)));
    }

    #[test]
    fn test_sign_requires_number() {
        assert!(!is_positive_number(&JsValue::from("5")));
        assert!(!is_negative_number(&JsValue::from("-5")));
        assert!(!is_positive_number(&JsValue::Bool(true)));
        assert!(!is_positive_number(&JsValue::Number(f64::NAN)));
        assert!(!is_negative_number(&JsValue::Number(f64::NAN)));
        assert!(is_positive_number(&JsValue::Number(f64::INFINITY)));
    }

    #[test]
    fn test_number_string() {
        for s in ["12.3", "12", ".5", "7.", "0", "", "007"] {
            assert!(is_number_string(&JsValue::from(s)), "{:?}", s);
        }
        for s in [".", "1.2.3", "-1", "+1", "1e5", " 1", "12a", "1,000", "١٢"] {
            assert!(!is_number_string(&JsValue::from(s)), "{:?}", s);
        }
        assert!(!is_number_string(&JsValue::Null));
    }

    #[test]
    fn test_phone_number() {
        assert!(is_phone_number(&JsValue::from("12345678901")));
        assert!(!is_phone_number(&JsValue::from("1234")));
        assert!(!is_phone_number(&JsValue::from("123456789012")));
        assert!(!is_phone_number(&JsValue::from("1234567890a")));
        assert!(!is_phone_number(&JsValue::from("12345678901\n")));
        assert!(!is_phone_number(&JsValue::from(12345678901i64)));
    }
}
