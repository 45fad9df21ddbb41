//! Tag name to element kind registry

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::catalog::Kind;
use crate::error::{Error, Result};

static GLOBAL: OnceLock<Result<Registry>> = OnceLock::new();

/// Maps markup tag names to the [`Kind`] that constructs them
#[derive(Clone, Debug, Default)]
pub struct Registry {
    kinds: IndexMap<&'static str, Kind>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every entry of the static catalog
    pub fn with_catalog() -> Result<Self> {
        let mut registry = Self::new();
        for kind in Kind::ALL {
            registry.register(kind.tag(), kind)?;
        }
        Ok(registry)
    }

    /// Process-wide catalog registry, built on first use
    ///
    /// A duplicate tag in the catalog is reported on every call.
    pub fn global() -> Result<&'static Self> {
        GLOBAL
            .get_or_init(Self::with_catalog)
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn register(&mut self, tag: &'static str, kind: Kind) -> Result<()> {
        if self.kinds.contains_key(tag) {
            return Err(Error::duplicate_registration(tag));
        }
        self.kinds.insert(tag, kind);
        Ok(())
    }

    pub fn lookup(&self, tag: &str) -> Option<Kind> {
        self.kinds.get(tag).copied()
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
