//! js-helper - helpers for dynamically-typed values
//!
//! This crate provides small standalone functions over [`JsValue`]: type
//! predicates, loose deep equality, keyboard key-code translation, nested
//! field lookup, element tag predicates and value-shape checks.

pub mod dom;
pub mod error;
pub mod field_lookup;
pub mod json_equal;
pub mod key_code;
pub mod shape;
pub mod type_check;
pub mod value;

// Re-exports for convenience
pub use dom::{
    has_child_element, has_class, is_article, is_body, is_button, is_canvas, is_code, is_div,
    is_footer, is_form, is_head, is_header, is_html, is_image, is_input, is_link, is_nav,
    is_script, is_span, is_svg, is_text_node, is_title, DomNode, Element, ElementNode,
};
pub use error::ValueError;
pub use field_lookup::{get_field_value_in_complex_object, get_field_value_with_parent};
pub use json_equal::{is_equal_object, is_equal_object_with};
pub use key_code::{convert_key_code_to_ascii_code, convert_key_code_to_char};
pub use shape::{is_negative_number, is_number_string, is_phone_number, is_positive_number};
pub use type_check::{
    is_array, is_boolean, is_defined, is_empty_object, is_function, is_null_or_undefined,
    is_number, is_object, is_string, is_undefined,
};
pub use value::{JsFunction, JsObject, JsValue, ValueTag};
