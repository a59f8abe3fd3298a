//! Structural equality.
//!
//! Provides the loose deep comparison used to tell whether two plain data
//! structures hold the same content.

mod is_equal_object;

pub use is_equal_object::{is_equal_object, is_equal_object_with};
