use super::DomNode;

const BUTTON_INPUT_TYPE: &str = "button";

fn has_tag<N: DomNode + ?Sized>(ele: Option<&N>, tag: &str) -> bool {
    ele.and_then(|e| e.tag_name()) == Some(tag)
}

macro_rules! tag_predicates {
    ($($(#[$meta:meta])* $name:ident => $tag:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<N: DomNode + ?Sized>(ele: Option<&N>) -> bool {
                has_tag(ele, $tag)
            }
        )*
    };
}

tag_predicates! {
    /// Whether the element is a `<div>`. `None` is never a div.
    is_div => "DIV";
    /// Whether the element is a `<span>`.
    is_span => "SPAN";
    /// Whether the element is an `<input>` of any type.
    is_input => "INPUT";
    /// Whether the element is an `<img>`.
    is_image => "IMG";
    /// Whether the element is a `<script>`.
    is_script => "SCRIPT";
    /// Whether the element is a `<link>`.
    is_link => "LINK";
    /// Whether the element is the `<html>` root.
    is_html => "HTML";
    /// Whether the element is a `<head>`.
    is_head => "HEAD";
    /// Whether the element is a `<title>`.
    is_title => "TITLE";
    /// Whether the element is a `<body>`.
    is_body => "BODY";
    /// Whether the element is a `<header>`.
    is_header => "HEADER";
    /// Whether the element is a `<footer>`.
    is_footer => "FOOTER";
    /// Whether the element is a `<nav>`.
    is_nav => "NAV";
    /// Whether the element is an `<article>`.
    is_article => "ARTICLE";
    /// Whether the element is a `<code>`.
    is_code => "CODE";
    /// Whether the element is a `<canvas>`.
    is_canvas => "CANVAS";
    /// Whether the element is an `<svg>`.
    is_svg => "SVG";
    /// Whether the element is a `<form>`.
    is_form => "FORM";
}

/// Whether the node is a text node.
pub fn is_text_node<N: DomNode + ?Sized>(ele: Option<&N>) -> bool {
    ele.is_some_and(|e| e.is_text())
}

/// Whether the element is a `<button>` or an `<input type="button">`.
pub fn is_button<N: DomNode + ?Sized>(ele: Option<&N>) -> bool {
    has_tag(ele, "BUTTON")
        || (is_input(ele) && ele.and_then(|e| e.attribute("type")) == Some(BUTTON_INPUT_TYPE))
}

/// Whether the element has at least one class name.
pub fn has_class<N: DomNode + ?Sized>(ele: Option<&N>) -> bool {
    ele.is_some_and(|e| e.class_count() > 0)
}

/// Whether the element has at least one child node.
pub fn has_child_element<N: DomNode + ?Sized>(ele: Option<&N>) -> bool {
    ele.is_some_and(|e| e.child_node_count() > 0)
}
