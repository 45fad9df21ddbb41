//! Error types for serverxml

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start.line == 0
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed markup in the source text
    InvalidMarkup,
    /// Well-formed markup this reader deliberately does not model
    UnsupportedMarkup,
    /// A tag with no entry in the type registry
    UnknownElement { tag: String },
    /// Two catalog entries claiming the same tag
    DuplicateRegistration { tag: String },
    /// A structural child a caller relied on is missing
    AbsentRequiredChild { tag: String },
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMarkup => write!(f, "invalid markup"),
            Self::UnsupportedMarkup => write!(f, "unsupported markup"),
            Self::UnknownElement { tag } => write!(f, "unknown element: <{tag}>"),
            Self::DuplicateRegistration { tag } => {
                write!(f, "element <{tag}> registered twice")
            }
            Self::AbsentRequiredChild { tag } => {
                write!(f, "required child element <{tag}> is absent")
            }
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for serverxml
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn unknown_element(tag: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::UnknownElement { tag: tag.into() }, span)
    }

    pub fn duplicate_registration(tag: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::DuplicateRegistration { tag: tag.into() },
            Span::empty(),
        )
    }

    pub fn absent_child(tag: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::AbsentRequiredChild { tag: tag.into() },
            Span::empty(),
        )
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for serverxml
pub type Result<T> = std::result::Result<T, Error>;
