use super::DomNode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const CLASS_ATTRIBUTE: &str = "class";

/// An element with attributes and child nodes.
///
/// Class names live in the `class` attribute, as in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag_name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<ElementNode>,
}

impl Element {
    /// Creates an element, upper-casing the tag name the way
    /// `document.createElement` does for HTML documents.
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_uppercase(),
            ..Self::default()
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Appends a class name to the `class` attribute.
    pub fn with_class(mut self, class_name: &str) -> Self {
        let classes = self
            .attributes
            .entry(CLASS_ATTRIBUTE.to_string())
            .or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class_name);
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<ElementNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Distinct whitespace-separated tokens of the `class` attribute.
    pub fn class_list(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.attributes
            .get(CLASS_ATTRIBUTE)
            .map(|classes| {
                classes
                    .split_ascii_whitespace()
                    .filter(|c| seen.insert(*c))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A node in an element tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementNode {
    Element(Element),
    Text { text: String },
}

impl ElementNode {
    /// An element node with the given tag.
    pub fn element(tag_name: &str) -> Self {
        ElementNode::Element(Element::new(tag_name))
    }

    /// A text node.
    pub fn text(text: &str) -> Self {
        ElementNode::Text {
            text: text.to_string(),
        }
    }
}

impl From<Element> for ElementNode {
    fn from(element: Element) -> Self {
        ElementNode::Element(element)
    }
}

impl DomNode for Element {
    fn tag_name(&self) -> Option<&str> {
        Some(&self.tag_name)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn class_count(&self) -> usize {
        self.class_list().len()
    }

    fn child_node_count(&self) -> usize {
        self.children.len()
    }

    fn is_text(&self) -> bool {
        false
    }
}

impl DomNode for ElementNode {
    fn tag_name(&self) -> Option<&str> {
        match self {
            ElementNode::Element(element) => element.tag_name(),
            ElementNode::Text { .. } => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            ElementNode::Element(element) => element.attribute(name),
            ElementNode::Text { .. } => None,
        }
    }

    fn class_count(&self) -> usize {
        match self {
            ElementNode::Element(element) => element.class_count(),
            ElementNode::Text { .. } => 0,
        }
    }

    fn child_node_count(&self) -> usize {
        match self {
            ElementNode::Element(element) => element.child_node_count(),
            ElementNode::Text { .. } => 0,
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, ElementNode::Text { .. })
    }
}
