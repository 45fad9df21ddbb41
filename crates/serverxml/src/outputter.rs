//! Canonical text rendering of configuration trees
//!
//! Layout rules:
//! - four spaces of indentation per depth level, root at depth 0
//! - a node with children spans an open line, its children and a close line;
//!   any stored text is dropped
//! - a childless node with text renders as `<tag attrs>text</tag>`
//! - anything else renders self-closing as `<tag attrs />`
//! - `id` comes first, remaining attributes sorted by key
//! - lines are joined with `\n`, without a trailing newline

use tracing::{debug, instrument};

use crate::catalog::keys;
use crate::element::Element;

const INDENT: &str = "    ";

/// Rendering options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Escape markup characters in attribute values and text.
    ///
    /// Off by default so existing canonical files render byte-for-byte.
    pub escape: bool,
}

impl RenderConfig {
    pub const fn escaped() -> Self {
        Self { escape: true }
    }
}

/// Renders [`Element`] trees to canonical text
#[derive(Clone, Debug, Default)]
pub struct Outputter {
    config: RenderConfig,
}

impl Outputter {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    #[instrument(skip_all, fields(root = root.tag()))]
    pub fn render(&self, root: &Element) -> String {
        let mut lines = Vec::new();
        self.render_element(root, 0, &mut lines);
        debug!(lines = lines.len(), "rendered configuration tree");
        lines.join("\n")
    }

    fn render_element(&self, element: &Element, depth: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        let tag = element.tag();
        let attrs = self.render_attributes(element);

        if element.has_children() {
            lines.push(format!("{indent}<{tag}{attrs}>"));
            for child in element.children() {
                self.render_element(child, depth + 1, lines);
            }
            lines.push(format!("{indent}</{tag}>"));
            return;
        }

        match element.value() {
            Some(text) if !text.is_empty() => {
                let text = self.text(text);
                lines.push(format!("{indent}<{tag}{attrs}>{text}</{tag}>"));
            }
            _ => lines.push(format!("{indent}<{tag}{attrs} />")),
        }
    }

    fn render_attributes(&self, element: &Element) -> String {
        let mut rest: Vec<(&str, &str)> = element
            .attributes()
            .filter(|(key, _)| *key != keys::ID)
            .collect();
        rest.sort_by(|a, b| a.0.cmp(b.0));

        let mut output = String::new();
        let ordered = element
            .get(keys::ID)
            .map(|id| (keys::ID, id))
            .into_iter()
            .chain(rest);
        for (key, value) in ordered {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(&self.attribute_value(value));
            output.push('"');
        }
        output
    }

    fn attribute_value(&self, value: &str) -> String {
        if self.config.escape {
            escape(value).replace('"', "&quot;")
        } else {
            value.to_string()
        }
    }

    fn text(&self, text: &str) -> String {
        if self.config.escape {
            escape(text)
        } else {
            text.to_string()
        }
    }
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
