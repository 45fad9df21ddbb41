//! Typed tree construction from parsed markup

use tracing::{debug, instrument, warn};

use crate::element::Element;
use crate::error::{Error, Result, Span};
use crate::markup::{self, Config, Document, Parser};
use crate::registry::Registry;

/// Builds [`Element`] trees from markup using a [`Registry`]
#[derive(Clone, Debug)]
pub struct Builder<'r> {
    registry: &'r Registry,
    config: Config,
}

impl Builder<'static> {
    /// Builder backed by the process-wide catalog registry
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(Registry::global()?))
    }
}

impl<'r> Builder<'r> {
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: Config::default(),
        }
    }

    /// Replace the markup reader limits
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Parse `source` and build its typed tree.
    ///
    /// Any unregistered tag aborts the whole build; no partial tree is returned.
    #[instrument(skip_all, fields(len = source.len()))]
    pub fn build(&self, source: &str) -> Result<Element> {
        let document = Parser::with_config(source.as_bytes(), self.config).parse()?;
        self.build_document(&document)
    }

    /// Build from an already parsed document
    pub fn build_document(&self, document: &Document) -> Result<Element> {
        let mut count = 0usize;
        let root = self.build_tree(&document.root, &mut count)?;
        debug!(root = root.tag(), elements = count, "built configuration tree");
        Ok(root)
    }

    fn build_tree(&self, node: &markup::Element, count: &mut usize) -> Result<Element> {
        let Some(kind) = self.registry.lookup(&node.name) else {
            warn!(tag = %node.name, "unknown element");
            return Err(Error::unknown_element(node.name.as_str(), Span::at(node.pos)));
        };

        let mut element = kind.instantiate();
        for (key, value) in &node.attributes {
            element.set(key.as_str(), value.as_str());
        }
        if let Some(text) = node.text() {
            element.set_value(text);
        }
        *count += 1;

        for child in node.elements() {
            element.add(self.build_tree(child, count)?);
        }

        Ok(element)
    }
}
