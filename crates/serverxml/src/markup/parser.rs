//! Markup reader implementation

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result, Span};
use crate::markup::cursor::Cursor;
use crate::markup::model::{Content, Document, Element};

/// Hard nesting ceiling. The reader recurses once per level, so depth is
/// bounded even when [`Config::max_depth`] is 0 or larger than this.
pub const MAX_NESTING: u16 = 512;

/// Reader limits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means [`MAX_NESTING`])
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Config with unlimited size and the reader's nesting ceiling
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    /// Depth limit actually enforced
    pub const fn effective_max_depth(&self) -> u16 {
        if self.max_depth == 0 || self.max_depth > MAX_NESTING {
            MAX_NESTING
        } else {
            self.max_depth
        }
    }
}

/// Markup reader producing a generic [`Document`]
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    depth: u16,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::default())
    }

    pub const fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    /// Parse a complete document with exactly one root element
    pub fn parse(&mut self) -> Result<Document> {
        if self.config.max_size > 0 && self.cursor.remaining_len() > self.config.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Span::empty(),
            ));
        }

        self.skip_misc()?;
        if self.cursor.current() != Some(b'<') {
            return Err(self.error_here(ErrorKind::InvalidMarkup, "expected root element"));
        }
        let root = self.parse_element()?;
        self.skip_misc()?;

        if !self.cursor.is_eof() {
            return Err(self.error_here(
                ErrorKind::InvalidMarkup,
                "unexpected content after root element",
            ));
        }

        Ok(Document { root })
    }

    fn parse_element(&mut self) -> Result<Element> {
        let pos = self.cursor.position();
        self.enter()?;
        self.expect_byte(b'<')?;

        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.consume(b'/') {
            self.expect_byte(b'>')?;
            self.depth -= 1;
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
                pos,
            });
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        loop {
            if self.cursor.starts_with(b"</") {
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(self.error_here(
                        ErrorKind::InvalidMarkup,
                        &format!("mismatched closing tag: expected </{name}>, found </{close_name}>"),
                    ));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.starts_with(b"<!--") {
                self.cursor.advance_by(4);
                self.skip_until(b"-->")?;
                continue;
            }

            if self.cursor.starts_with(b"<![CDATA[") {
                return Err(self.error_here(
                    ErrorKind::UnsupportedMarkup,
                    "CDATA sections are not supported",
                ));
            }

            if self.cursor.starts_with(b"<?") {
                self.cursor.advance_by(2);
                self.skip_until(b"?>")?;
                continue;
            }

            if self.cursor.current() == Some(b'<') {
                let child = self.parse_element()?;
                children.push(Content::Element(child));
                continue;
            }

            if self.cursor.is_eof() {
                return Err(self.error_here(
                    ErrorKind::InvalidMarkup,
                    &format!("unterminated element <{name}>"),
                ));
            }

            // text split only by skipped comments or PIs stays one run
            let text = self.parse_text()?;
            match children.last_mut() {
                Some(Content::Text(previous)) => previous.push_str(&text),
                _ => children.push(Content::Text(text)),
            }
        }

        self.depth -= 1;
        Ok(Element {
            name,
            attributes,
            children,
            pos,
        })
    }

    fn enter(&mut self) -> Result<()> {
        let max = self.config.effective_max_depth();
        if self.depth >= max {
            return Err(Error::new(
                ErrorKind::MaxDepthExceeded { max },
                Span::at(self.cursor.position()),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, String>> {
        let mut attrs = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => {
                    return Err(self.error_here(ErrorKind::InvalidMarkup, "unexpected end of input"))
                }
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains_key(&name) {
                return Err(self.error_here(
                    ErrorKind::InvalidMarkup,
                    &format!("duplicate attribute: {name}"),
                ));
            }
            attrs.insert(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => {
                return Err(
                    self.error_here(ErrorKind::InvalidMarkup, "expected quoted attribute value")
                )
            }
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = self.bytes_to_string(raw)?;
                return self.decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_here(ErrorKind::InvalidMarkup, "unterminated attribute value"))
    }

    fn parse_text(&mut self) -> Result<String> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = self.bytes_to_string(raw)?;
        self.decode_entities(&text)
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        match self.cursor.current() {
            Some(first) if is_name_start(first) => self.cursor.advance(),
            _ => return Err(self.error_here(ErrorKind::InvalidMarkup, "expected name")),
        }

        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let raw = self.cursor.slice_from(start);
        self.bytes_to_string(raw)
    }

    /// Skip whitespace, declarations, processing instructions and comments
    /// outside the root element.
    fn skip_misc(&mut self) -> Result<()> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with(b"<?") {
                self.cursor.advance_by(2);
                self.skip_until(b"?>")?;
            } else if self.cursor.starts_with(b"<!--") {
                self.cursor.advance_by(4);
                self.skip_until(b"-->")?;
            } else if self.cursor.starts_with(b"<!DOCTYPE") {
                self.skip_until(b">")?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        while !self.cursor.is_eof() {
            if self.cursor.starts_with(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_here(ErrorKind::InvalidMarkup, "unterminated markup"))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else {
            Err(self.error_here(
                ErrorKind::InvalidMarkup,
                &format!("expected '{}'", char::from(expected)),
            ))
        }
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| self.error_here(ErrorKind::InvalidMarkup, "invalid utf-8"))
    }

    fn decode_entities(&self, input: &str) -> Result<String> {
        decode_entities(input)
            .ok_or_else(|| self.error_here(ErrorKind::InvalidMarkup, "invalid entity reference"))
    }

    fn error_here(&self, kind: ErrorKind, message: &str) -> Error {
        Error::with_message(kind, Span::at(self.cursor.position()), message)
    }
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_entities(input: &str) -> Option<String> {
    if !input.contains('&') {
        return Some(input.to_string());
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            result.push(ch);
            continue;
        }

        let mut entity = String::new();
        let mut terminated = false;
        for next in chars.by_ref() {
            if next == ';' {
                terminated = true;
                break;
            }
            entity.push(next);
        }
        if !terminated {
            return None;
        }

        let decoded = match entity.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => decode_numeric_entity(&entity),
        };
        result.push(decoded?);
    }

    Some(result)
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
