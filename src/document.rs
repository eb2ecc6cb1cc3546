//! Document view capability.
//!
//! The rewriter never touches a real rendering engine; it works through the
//! [`Document`] trait. [`MemoryDocument`] is an arena-backed implementation
//! that (de)serializes a page snapshot as a JSON tree of [`PageNode`]s.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Handle to an element inside a document.
pub type NodeId = usize;

/// The subset of DOM operations the translation core needs.
pub trait Document {
    /// The document element (`<html>`), if any.
    fn root(&self) -> Option<NodeId>;

    /// Every element attached to the tree, in document order.
    fn elements(&self) -> Vec<NodeId>;

    fn tag_name(&self, node: NodeId) -> Option<&str>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Text held directly by the element, without its descendants.
    fn own_text(&self, node: NodeId) -> Option<&str>;

    /// Concatenated text of the element and all its descendants.
    fn text_content(&self, node: NodeId) -> Option<String>;

    /// Replace the element's content with `text`, dropping its children.
    fn set_text_content(&mut self, node: NodeId, text: &str);

    /// Replace only the element's own text, keeping child elements (icons).
    fn replace_text(&mut self, node: NodeId, text: &str);

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Case-insensitive tag comparison.
    fn is_tag(&self, node: NodeId, tag: &str) -> bool {
        self.tag_name(node)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    /// Nearest element, starting with `node` itself, that satisfies `matches`.
    fn closest<F>(&self, node: NodeId, mut matches: F) -> Option<NodeId>
    where
        Self: Sized,
        F: FnMut(&Self, NodeId) -> bool,
    {
        let mut current = Some(node);
        while let Some(id) = current {
            if matches(self, id) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Attached elements satisfying `matches`, in document order.
    fn select<F>(&self, mut matches: F) -> Vec<NodeId>
    where
        Self: Sized,
        F: FnMut(&Self, NodeId) -> bool,
    {
        self.elements()
            .into_iter()
            .filter(|&id| matches(self, id))
            .collect()
    }
}

/// Serializable page snapshot.
///
/// An element's own `text` is rendered before its children, so
/// `<li><i class="icon"></i> Lake view</li>` is written as an `li` with text
/// `" Lake view"` and an icon child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageNode>,
}

impl PageNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: PageNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory document.
///
/// Elements removed by `set_text_content` stay in the arena, detached, like
/// DOM nodes still referenced from an earlier query.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
    root: Option<NodeId>,
}

impl MemoryDocument {
    /// A document with no elements at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a document whose root element is `tree`.
    pub fn from_tree(tree: PageNode) -> Self {
        let mut doc = Self::empty();
        let root = doc.insert(None, tree);
        doc.root = Some(root);
        doc
    }

    /// Parse a JSON page snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let tree: PageNode = serde_json::from_str(json).context("Failed to parse page snapshot")?;
        Ok(Self::from_tree(tree))
    }

    /// Render the attached tree back to a JSON page snapshot.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_tree()).context("Failed to serialize page snapshot")
    }

    /// Snapshot of the attached tree.
    pub fn to_tree(&self) -> Option<PageNode> {
        self.root.map(|root| self.build_tree(root))
    }

    fn insert(&mut self, parent: Option<NodeId>, node: PageNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Element {
            tag: node.tag,
            classes: node.classes,
            attributes: node.attributes,
            text: node.text,
            parent,
            children: Vec::new(),
        });

        let children: Vec<NodeId> = node
            .children
            .into_iter()
            .map(|child| self.insert(Some(id), child))
            .collect();
        self.nodes[id].children = children;
        id
    }

    fn build_tree(&self, id: NodeId) -> PageNode {
        let element = &self.nodes[id];
        PageNode {
            tag: element.tag.clone(),
            classes: element.classes.clone(),
            attributes: element.attributes.clone(),
            text: element.text.clone(),
            children: element
                .children
                .iter()
                .map(|&child| self.build_tree(child))
                .collect(),
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let element = &self.nodes[id];
        out.push_str(&element.text);
        for &child in &element.children {
            self.collect_text(child, out);
        }
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn elements(&self) -> Vec<NodeId> {
        let mut ordered = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            ordered.push(id);
            stack.extend(self.nodes[id].children.iter().rev());
        }
        ordered
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|e| e.tag.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|e| e.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.nodes.get_mut(node) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.nodes.get_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    fn own_text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|e| e.text.as_str())
    }

    fn text_content(&self, node: NodeId) -> Option<String> {
        self.nodes.get(node)?;
        let mut text = String::new();
        self.collect_text(node, &mut text);
        Some(text)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        let Some(element) = self.nodes.get_mut(node) else {
            return;
        };
        element.text = text.to_string();
        let children = std::mem::take(&mut element.children);
        for child in children {
            self.nodes[child].parent = None;
        }
    }

    fn replace_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.nodes.get_mut(node) {
            element.text = text.to_string();
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.nodes.get_mut(node) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }
}
