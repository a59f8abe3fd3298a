//! Dynamic value model.
//!
//! [`JsValue`] is a closed set of runtime categories: the JSON values plus
//! `undefined` and callable functions. All helpers in this crate inspect
//! values through their [`ValueTag`] rather than through their structure.

use crate::error::ValueError;
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Ordered key-value storage for [`JsValue::Object`].
pub type JsObject = IndexMap<String, JsValue>;

type NativeFn = dyn Fn(&[JsValue]) -> JsValue + Send + Sync;

static UNDEFINED: JsValue = JsValue::Undefined;

/// A callable value. Two functions are the same function only if they share
/// the same underlying closure.
#[derive(Clone)]
pub struct JsFunction {
    name: Option<Arc<str>>,
    inner: Arc<NativeFn>,
}

impl JsFunction {
    /// Wraps an anonymous closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[JsValue]) -> JsValue + Send + Sync + 'static,
    {
        Self {
            name: None,
            inner: Arc::new(f),
        }
    }

    /// Wraps a closure under a name, used only for diagnostics.
    pub fn named<F>(name: &str, f: F) -> Self
    where
        F: Fn(&[JsValue]) -> JsValue + Send + Sync + 'static,
    {
        Self {
            name: Some(Arc::from(name)),
            inner: Arc::new(f),
        }
    }

    /// Diagnostic name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invokes the function with positional arguments.
    pub fn call(&self, args: &[JsValue]) -> JsValue {
        (self.inner)(args)
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &JsFunction) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[Function: {}]", name),
            None => f.write_str("[Function (anonymous)]"),
        }
    }
}

/// Intrinsic runtime category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl ValueTag {
    /// Tag name, e.g. `"Array"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueTag::Undefined => "Undefined",
            ValueTag::Null => "Null",
            ValueTag::Boolean => "Boolean",
            ValueTag::Number => "Number",
            ValueTag::String => "String",
            ValueTag::Array => "Array",
            ValueTag::Object => "Object",
            ValueTag::Function => "Function",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.as_str())
    }
}

/// Any dynamically-typed value.
#[derive(Debug, Clone, Default)]
pub enum JsValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsValue>),
    Object(JsObject),
    Function(JsFunction),
}

impl JsValue {
    /// Intrinsic category, as reported by `Object.prototype.toString`.
    pub fn tag(&self) -> ValueTag {
        match self {
            JsValue::Undefined => ValueTag::Undefined,
            JsValue::Null => ValueTag::Null,
            JsValue::Bool(_) => ValueTag::Boolean,
            JsValue::Number(_) => ValueTag::Number,
            JsValue::String(_) => ValueTag::String,
            JsValue::Array(_) => ValueTag::Array,
            JsValue::Object(_) => ValueTag::Object,
            JsValue::Function(_) => ValueTag::Function,
        }
    }

    /// The `typeof` category. Null and arrays report `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Bool(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Function(_) => "function",
            JsValue::Null | JsValue::Array(_) | JsValue::Object(_) => "object",
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Bool(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            JsValue::Array(_) | JsValue::Object(_) | JsValue::Function(_) => true,
        }
    }

    /// `===` semantics: primitives by value, containers and functions by
    /// identity.
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Array(a), JsValue::Array(b)) => std::ptr::eq(a, b),
            (JsValue::Object(a), JsValue::Object(b)) => std::ptr::eq(a, b),
            (JsValue::Function(a), JsValue::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Own enumerable entries of an object or array, borrowed.
    ///
    /// Array elements are keyed by their decimal index. Other values yield
    /// nothing.
    pub fn container_entries(&self) -> Vec<(Cow<'_, str>, &JsValue)> {
        match self {
            JsValue::Object(map) => map
                .iter()
                .map(|(k, v)| (Cow::Borrowed(k.as_str()), v))
                .collect(),
            JsValue::Array(arr) => arr
                .iter()
                .enumerate()
                .map(|(i, v)| (Cow::Owned(i.to_string()), v))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Own enumerable entries, including the indexed characters of a string.
    pub fn own_entries(&self) -> Vec<(Cow<'_, str>, Cow<'_, JsValue>)> {
        match self {
            JsValue::String(s) => s
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    (
                        Cow::Owned(i.to_string()),
                        Cow::Owned(JsValue::String(c.to_string())),
                    )
                })
                .collect(),
            _ => self
                .container_entries()
                .into_iter()
                .map(|(k, v)| (k, Cow::Borrowed(v)))
                .collect(),
        }
    }

    /// Property read. Missing properties read as `Undefined`.
    pub fn get_property(&self, key: &str) -> Cow<'_, JsValue> {
        match self {
            JsValue::Object(map) => match map.get(key) {
                Some(v) => Cow::Borrowed(v),
                None => Cow::Borrowed(&UNDEFINED),
            },
            JsValue::Array(arr) => match array_index(key).and_then(|i| arr.get(i)) {
                Some(v) => Cow::Borrowed(v),
                None => Cow::Borrowed(&UNDEFINED),
            },
            JsValue::String(s) => match array_index(key).and_then(|i| s.chars().nth(i)) {
                Some(c) => Cow::Owned(JsValue::String(c.to_string())),
                None => Cow::Borrowed(&UNDEFINED),
            },
            _ => Cow::Borrowed(&UNDEFINED),
        }
    }

    /// The number, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts to JSON, failing for values JSON cannot carry.
    pub fn to_json(&self) -> Result<Value, ValueError> {
        Value::try_from(self)
    }
}

/// Parses a canonical array index ("0", "17"; not "01" or "+1").
fn array_index(key: &str) -> Option<usize> {
    let idx: usize = key.parse().ok()?;
    if idx.to_string() == key {
        Some(idx)
    } else {
        None
    }
}

/// Structural equality; functions compare by identity, numbers as `f64`.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Array(a), JsValue::Array(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => a == b,
            _ => self.strict_equals(other),
        }
    }
}

impl From<Value> for JsValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsValue::Null,
            Value::Bool(b) => JsValue::Bool(b),
            Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => JsValue::String(s),
            Value::Array(arr) => JsValue::Array(arr.into_iter().map(JsValue::from).collect()),
            Value::Object(map) => JsValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Bool(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i64> for JsValue {
    fn from(n: i64) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<Vec<JsValue>> for JsValue {
    fn from(arr: Vec<JsValue>) -> Self {
        JsValue::Array(arr)
    }
}

impl From<JsObject> for JsValue {
    fn from(map: JsObject) -> Self {
        JsValue::Object(map)
    }
}

impl From<JsFunction> for JsValue {
    fn from(f: JsFunction) -> Self {
        JsValue::Function(f)
    }
}

// 2^53: integral values below this convert to JSON integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl TryFrom<&JsValue> for Value {
    type Error = ValueError;

    fn try_from(v: &JsValue) -> Result<Self, Self::Error> {
        match v {
            JsValue::Undefined => Err(ValueError::Undefined),
            JsValue::Function(f) => Err(ValueError::Function(f.name().map(str::to_string))),
            JsValue::Null => Ok(Value::Null),
            JsValue::Bool(b) => Ok(Value::Bool(*b)),
            JsValue::Number(n) => {
                if !n.is_finite() {
                    return Err(ValueError::NonFiniteNumber(*n));
                }
                if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
                    Ok(Value::Number(Number::from(*n as i64)))
                } else {
                    Number::from_f64(*n)
                        .map(Value::Number)
                        .ok_or(ValueError::NonFiniteNumber(*n))
                }
            }
            JsValue::String(s) => Ok(Value::String(s.clone())),
            JsValue::Array(arr) => arr
                .iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            JsValue::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), Value::try_from(v)?);
                }
                Ok(Value::Object(out))
            }
        }
    }
}
