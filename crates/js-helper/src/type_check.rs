//! Type predicates.
//!
//! Every predicate inspects the intrinsic [`ValueTag`] of a value. A function
//! is never an object, an array is never an object, and null is neither.

use crate::value::{JsValue, ValueTag};

/// Whether the value is anything other than `undefined`.
///
/// # Examples
///
/// ```
/// use js_helper::{is_defined, JsValue};
///
/// assert!(is_defined(&JsValue::Null));
/// assert!(!is_defined(&JsValue::Undefined));
/// ```
pub fn is_defined(value: &JsValue) -> bool {
    value.tag() != ValueTag::Undefined
}

/// Whether the value is `undefined`.
pub fn is_undefined(value: &JsValue) -> bool {
    value.tag() == ValueTag::Undefined
}

/// Whether the value is `null` or `undefined`.
pub fn is_null_or_undefined(value: &JsValue) -> bool {
    matches!(value.tag(), ValueTag::Null | ValueTag::Undefined)
}

/// Whether the value is a number. `NaN` and infinities are numbers.
pub fn is_number(value: &JsValue) -> bool {
    value.tag() == ValueTag::Number
}

/// Whether the value is a string.
pub fn is_string(value: &JsValue) -> bool {
    value.tag() == ValueTag::String
}

/// Whether the value is a plain object (not an array, function or null).
pub fn is_object(value: &JsValue) -> bool {
    value.tag() == ValueTag::Object
}

/// Whether the value is an array.
pub fn is_array(value: &JsValue) -> bool {
    value.tag() == ValueTag::Array
}

/// Whether the value is a function.
pub fn is_function(value: &JsValue) -> bool {
    value.tag() == ValueTag::Function
}

/// Whether the value is `true` or `false`.
pub fn is_boolean(value: &JsValue) -> bool {
    value.tag() == ValueTag::Boolean
}

/// Whether the value is a plain object with no own keys. Non-objects are
/// never empty objects.
///
/// # Examples
///
/// ```
/// use js_helper::{is_empty_object, JsValue};
/// use serde_json::json;
///
/// assert!(is_empty_object(&JsValue::from(json!({}))));
/// assert!(!is_empty_object(&JsValue::from(json!({"a": 1}))));
/// assert!(!is_empty_object(&JsValue::from(json!([]))));
/// ```
pub fn is_empty_object(value: &JsValue) -> bool {
    match value {
        JsValue::Object(map) => map.is_empty(),
        _ => false,
    }
}
