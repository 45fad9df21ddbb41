//! serverxml - typed document model for application-server `server.xml` files
//!
//! Markup is read into a tree of [`Element`]s whose kinds come from a closed
//! catalog, edited through typed accessors, and rendered back in a canonical
//! layout that does not depend on the order attributes were assigned.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), serverxml::Error> {
//! let mut server = serverxml::build(
//!     "<server description=\"demo\"><featureManager><feature>servlet-3.0</feature></featureManager></server>",
//! )?;
//!
//! if let Some(manager) = server.find_mut(serverxml::Kind::FeatureManager) {
//!     manager.add_features(["jsp-2.2", "servlet-3.0"]);
//! }
//!
//! assert_eq!(
//!     serverxml::render(&server),
//!     "<server description=\"demo\">\n    <featureManager>\n        <feature>servlet-3.0</feature>\n        <feature>jsp-2.2</feature>\n    </featureManager>\n</server>"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! File access, server discovery and process control are left to callers; this
//! crate only turns text into trees and trees into text.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod markup;
pub use markup::Config as MarkupConfig;

pub mod catalog;
pub use catalog::{keys, Kind};

pub mod element;
pub use element::Element;

pub mod registry;
pub use registry::Registry;

pub mod builder;
pub use builder::Builder;

pub mod outputter;
pub use outputter::{Outputter, RenderConfig};

/// Build a typed tree from markup text using the catalog registry
pub fn build(source: &str) -> Result<Element> {
    Builder::new()?.build(source)
}

/// Build with custom markup reader limits
pub fn build_with_config(source: &str, config: MarkupConfig) -> Result<Element> {
    Builder::new()?.with_config(config).build(source)
}

/// Render a tree in canonical form
pub fn render(root: &Element) -> String {
    Outputter::new().render(root)
}

/// Render with custom options
pub fn render_with_config(root: &Element, config: RenderConfig) -> String {
    Outputter::with_config(config).render(root)
}

/// True when `source` already is the canonical rendering of its own tree
pub fn is_canonical(source: &str) -> Result<bool> {
    let root = build(source)?;
    Ok(render(&root) == source.trim_end_matches(['\r', '\n']))
}
