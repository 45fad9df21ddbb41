//! Generic element node shared by every catalog kind

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Kind;
use crate::error::{Error, Result};

/// Node of a configuration tree
///
/// Attributes are plain strings, including numeric-looking ones such as
/// ports. Children are owned; a tree never shares or back-references nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    kind: Kind,
    attributes: IndexMap<String, String>,
    value: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            value: None,
            children: Vec::new(),
        }
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Remove an attribute, returning its previous value
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    /// Attributes in the order they were first supplied
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear_value(&mut self) -> Option<String> {
        self.value.take()
    }

    /// Append `child` after the existing children and return it for further edits
    #[allow(clippy::indexing_slicing)] // `index` was pushed on the line above
    pub fn add(&mut self, child: Self) -> &mut Self {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Remove the first child equal to `child`; absent children are ignored
    pub fn remove(&mut self, child: &Self) -> Option<Self> {
        let index = self.children.iter().position(|c| c == child)?;
        Some(self.children.remove(index))
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// First child of exactly `kind`
    pub fn find(&self, kind: Kind) -> Option<&Self> {
        self.children.iter().find(|child| child.kind == kind)
    }

    pub fn find_mut(&mut self, kind: Kind) -> Option<&mut Self> {
        self.children.iter_mut().find(|child| child.kind == kind)
    }

    /// Every child of exactly `kind`, in document order
    pub fn find_all(&self, kind: Kind) -> Vec<&Self> {
        self.children
            .iter()
            .filter(|child| child.kind == kind)
            .collect()
    }

    pub fn find_all_mut(&mut self, kind: Kind) -> impl Iterator<Item = &mut Self> {
        self.children
            .iter_mut()
            .filter(move |child| child.kind == kind)
    }

    /// Like [`Element::find`], but absence is an [`AbsentRequiredChild`] error
    ///
    /// [`AbsentRequiredChild`]: crate::ErrorKind::AbsentRequiredChild
    pub fn require(&self, kind: Kind) -> Result<&Self> {
        self.find(kind).ok_or_else(|| Error::absent_child(kind.tag()))
    }

    pub fn require_mut(&mut self, kind: Kind) -> Result<&mut Self> {
        self.find_mut(kind)
            .ok_or_else(|| Error::absent_child(kind.tag()))
    }
}
