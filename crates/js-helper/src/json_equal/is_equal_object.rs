use crate::value::JsValue;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::trace;

/// Compares two structures key by key.
///
/// The comparison is loose:
/// - two falsy values (`undefined`, `null`, `false`, `0`, `NaN`, `""`) are
///   equal, and a falsy value never equals a truthy one;
/// - array fields match as multisets: both arrays have the same length and
///   each left element pairs with its own equal element on the right;
/// - object (and null) fields recurse;
/// - every other field compares with `===`;
/// - a key present only on the right makes the structures unequal.
///
/// Values with no own enumerable entries (numbers, booleans, functions) have
/// nothing to compare, so any two truthy ones are equal.
///
/// Recursion depth follows the nesting depth of `a`.
///
/// # Examples
///
/// ```
/// use js_helper::{is_equal_object, JsValue};
/// use serde_json::json;
///
/// let a = JsValue::from(json!({"test": 123, "list": [1, 2, 3]}));
/// let b = JsValue::from(json!({"list": [3, 1, 2], "test": 123}));
/// let c = JsValue::from(json!({"test": 123, "list": [1, 2, 3], "extra": true}));
///
/// assert!(is_equal_object(&a, &b));
/// assert!(!is_equal_object(&a, &c));
/// ```
pub fn is_equal_object(a: &JsValue, b: &JsValue) -> bool {
    compare_entries(a, b, &is_equal_object)
}

/// Same as [`is_equal_object`], but object-valued fields of `a` are compared
/// with `compare_field`.
///
/// The comparator only replaces the comparison of direct object fields.
/// Elements inside array fields are still compared with
/// [`is_equal_object`], and `compare_field` is not passed further down.
pub fn is_equal_object_with<F>(a: &JsValue, b: &JsValue, compare_field: F) -> bool
where
    F: Fn(&JsValue, &JsValue) -> bool,
{
    compare_entries(a, b, &compare_field)
}

fn compare_entries(
    a: &JsValue,
    b: &JsValue,
    compare_field: &dyn Fn(&JsValue, &JsValue) -> bool,
) -> bool {
    match (a.is_truthy(), b.is_truthy()) {
        (false, false) => return true,
        (true, true) => {}
        _ => return false,
    }
    if let (JsValue::String(left), JsValue::String(right)) = (a, b) {
        let equal = left.chars().eq(right.chars());
        if !equal {
            trace!("string mismatch");
        }
        return equal;
    }

    let mut visited: HashSet<Cow<'_, str>> = HashSet::new();
    for (key, value) in a.own_entries() {
        let other = b.get_property(&key);
        let other: &JsValue = &other;
        let equal = match &*value {
            JsValue::Array(items) => is_equal_array(items, other),
            v if v.type_of() == "object" => compare_field(v, other),
            v => v.strict_equals(other),
        };
        if !equal {
            trace!(key = %key, "field mismatch");
            return false;
        }
        visited.insert(key);
    }

    for (key, _) in b.own_entries() {
        if !visited.contains(&*key) {
            trace!(key = %key, "extra field on right-hand side");
            return false;
        }
    }
    true
}

fn is_equal_array(left: &[JsValue], right: &JsValue) -> bool {
    let JsValue::Array(right) = right else {
        return false;
    };
    if left.len() != right.len() {
        return false;
    }
    // Each right-hand element pairs with at most one left-hand element.
    let mut used = vec![false; right.len()];
    left.iter().all(|item| {
        let found = right.iter().zip(&used).position(|(candidate, taken)| {
            !taken
                && if item.type_of() == "object" {
                    candidate.type_of() == "object" && is_equal_object(item, candidate)
                } else {
                    item.strict_equals(candidate)
                }
        });
        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
