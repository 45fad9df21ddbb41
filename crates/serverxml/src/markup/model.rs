//! Generic parse tree produced by the markup reader

use indexmap::IndexMap;

use crate::error::Pos;

/// Parsed markup document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// Untyped markup element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
    /// Position of the opening `<`
    pub pos: Pos,
}

/// Markup content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            pos: Pos::default(),
        }
    }

    /// Leading text: the text run before the first child element, if any.
    /// Whitespace is kept as written; the reader merges runs split by
    /// comments or processing instructions.
    pub fn text(&self) -> Option<&str> {
        match self.children.first() {
            Some(Content::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Child elements in document order, skipping text runs
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|content| match content {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }
}
