//! Element helpers.
//!
//! Predicates work against any element representation implementing
//! [`DomNode`]. [`ElementNode`] is an in-memory implementation that can also
//! be described as JSON.

mod element;
mod predicates;

pub use element::{Element, ElementNode};
pub use predicates::{
    has_child_element, has_class, is_article, is_body, is_button, is_canvas, is_code, is_div,
    is_footer, is_form, is_head, is_header, is_html, is_image, is_input, is_link, is_nav,
    is_script, is_span, is_svg, is_text_node, is_title,
};

/// Read-only view of a document node.
pub trait DomNode {
    /// Upper-case tag name of an element; `None` for text nodes.
    fn tag_name(&self) -> Option<&str>;

    /// Value of the named attribute, if set.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Number of distinct class names.
    fn class_count(&self) -> usize;

    /// Number of child nodes, text nodes included.
    fn child_node_count(&self) -> usize;

    /// Whether this is a text node.
    fn is_text(&self) -> bool;
}
