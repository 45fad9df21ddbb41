//! Minimal markup reader
//!
//! Produces the untyped parse tree consumed by [`crate::Builder`]. Comments,
//! processing instructions and the document prolog are skipped; CDATA is
//! rejected. Namespaces get no special treatment.

pub mod cursor;
pub mod model;
pub mod parser;

pub use cursor::Cursor;
pub use model::{Content, Document, Element};
pub use parser::{Config, Parser, MAX_NESTING};
