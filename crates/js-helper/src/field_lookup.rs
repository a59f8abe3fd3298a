//! Depth-first field search in nested objects and arrays.

use crate::value::JsValue;
use tracing::trace;

/// Finds the first property named `field_name` anywhere inside `obj`.
///
/// When `parent_field_name` is given, only properties whose direct parent
/// property has that name match. Elements of an array property count as
/// children of that property. Properties are visited depth-first in their
/// enumeration order and the first match wins.
///
/// Returns `None` when nothing matches, when `obj` is not an object, array or
/// function, and when the matching property holds `null` (the search then
/// continues with the next sibling of the enclosing property).
///
/// # Examples
///
/// ```
/// use js_helper::{get_field_value_in_complex_object, JsValue};
/// use serde_json::json;
///
/// let doc = JsValue::from(json!({
///     "user": {"name": "ann"},
///     "owner": {"name": "bob"}
/// }));
///
/// assert_eq!(
///     get_field_value_in_complex_object(&doc, "name", None),
///     Some(&JsValue::from("ann"))
/// );
/// assert_eq!(
///     get_field_value_in_complex_object(&doc, "name", Some("owner")),
///     Some(&JsValue::from("bob"))
/// );
/// ```
pub fn get_field_value_in_complex_object<'a>(
    obj: &'a JsValue,
    field_name: &str,
    parent_field_name: Option<&str>,
) -> Option<&'a JsValue> {
    get_field_value_with_parent(obj, field_name, parent_field_name, None)
}

/// Full form of [`get_field_value_in_complex_object`], where
/// `current_parent_name` is the name of the property that holds `obj`.
///
/// An empty `parent_field_name` is the same as no constraint.
pub fn get_field_value_with_parent<'a>(
    obj: &'a JsValue,
    field_name: &str,
    parent_field_name: Option<&str>,
    current_parent_name: Option<&str>,
) -> Option<&'a JsValue> {
    if !obj.is_truthy()
        || !matches!(obj, JsValue::Object(_) | JsValue::Array(_) | JsValue::Function(_))
    {
        return None;
    }
    let parent_matches = match parent_field_name {
        None | Some("") => true,
        Some(parent) => current_parent_name == Some(parent),
    };

    for (prop, value) in obj.container_entries() {
        if parent_matches && prop == field_name {
            return match value {
                JsValue::Null => None,
                found => Some(found),
            };
        }
        match value {
            JsValue::Array(items) => {
                trace!(property = %prop, len = items.len(), "searching array");
                let found = items.iter().find_map(|item| {
                    get_field_value_with_parent(item, field_name, parent_field_name, Some(&*prop))
                });
                if found.is_some() {
                    return found;
                }
            }
            JsValue::Object(_) | JsValue::Function(_) => {
                trace!(property = %prop, "searching object");
                let found =
                    get_field_value_with_parent(value, field_name, parent_field_name, Some(&*prop));
                if found.is_some() {
                    return found;
                }
            }
            _ => {}
        }
    }
    None
}
