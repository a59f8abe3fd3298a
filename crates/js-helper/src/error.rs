use thiserror::Error;

/// Errors raised when a [`JsValue`](crate::JsValue) has no JSON equivalent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("undefined has no JSON representation")]
    Undefined,

    #[error("function {} has no JSON representation", .0.as_deref().unwrap_or("(anonymous)"))]
    Function(Option<String>),

    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}
