//! Typed document tree produced by the parsing stage.

use crate::callout::CalloutVariant;
use crate::state::TocEntry;

/// Column alignment for table cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(alignment: pulldown_cmark::Alignment) -> Self {
        match alignment {
            pulldown_cmark::Alignment::None => Self::None,
            pulldown_cmark::Alignment::Left => Self::Left,
            pulldown_cmark::Alignment::Center => Self::Center,
            pulldown_cmark::Alignment::Right => Self::Right,
        }
    }
}

/// HTML attribute carried by a pass-through container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for boolean attributes such as `hidden`.
    pub value: Option<String>,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Look up an attribute value by (case-insensitive) name.
#[must_use]
pub fn attribute_value<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|attr| attr.name.eq_ignore_ascii_case(name))
        .and_then(|attr| attr.value.as_deref())
}

/// Table row as a list of cells, each a list of inline nodes.
pub type TableRow = Vec<Vec<RenderNode>>;

/// A node of the rendered document.
///
/// Every variant is handled by exactly one [`RenderRules`](crate::RenderRules)
/// method; dispatch is an exhaustive `match` in [`Document::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderNode {
    Heading {
        level: u8,
        id: String,
        children: Vec<RenderNode>,
    },
    Paragraph(Vec<RenderNode>),
    /// Fenced or indented code block. `info` is the first word of the fence
    /// info string, if any.
    CodeBlock {
        info: Option<String>,
        content: String,
    },
    InlineCode(String),
    Table {
        alignments: Vec<Alignment>,
        head: TableRow,
        rows: Vec<TableRow>,
    },
    Blockquote(Vec<RenderNode>),
    Callout {
        variant: CalloutVariant,
        children: Vec<RenderNode>,
    },
    List {
        /// Start number for ordered lists, `None` for bullet lists.
        start: Option<u64>,
        items: Vec<Vec<RenderNode>>,
    },
    Link {
        dest: String,
        title: String,
        children: Vec<RenderNode>,
    },
    Image {
        src: String,
        alt: String,
        title: String,
    },
    Rule,
    /// Raw HTML container (e.g. `<div class="...">`) that is not a callout.
    Container {
        tag: String,
        attrs: Vec<Attribute>,
        children: Vec<RenderNode>,
    },
    Text(String),
    Emphasis(Vec<RenderNode>),
    Strong(Vec<RenderNode>),
    Strikethrough(Vec<RenderNode>),
    SoftBreak,
    HardBreak,
    TaskMarker(bool),
    /// Raw HTML fragment passed through from the source.
    Html(String),
}

impl RenderNode {
    /// Concatenated plain text of this node and its descendants.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::InlineCode(text) => out.push_str(text),
            Self::CodeBlock { content, .. } => out.push_str(content),
            Self::Image { alt, .. } => out.push_str(alt),
            Self::SoftBreak | Self::HardBreak => out.push(' '),
            Self::Heading { children, .. }
            | Self::Paragraph(children)
            | Self::Blockquote(children)
            | Self::Callout { children, .. }
            | Self::Link { children, .. }
            | Self::Container { children, .. }
            | Self::Emphasis(children)
            | Self::Strong(children)
            | Self::Strikethrough(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::List { items, .. } => {
                for child in items.iter().flatten() {
                    child.collect_text(out);
                }
            }
            Self::Table { head, rows, .. } => {
                for child in head.iter().chain(rows.iter().flatten()).flatten() {
                    child.collect_text(out);
                }
            }
            Self::Rule | Self::TaskMarker(_) | Self::Html(_) => {}
        }
    }
}

/// Parsed markdown document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level block nodes in document order.
    pub nodes: Vec<RenderNode>,
    /// One entry per heading, in document order.
    pub toc: Vec<TocEntry>,
    /// Parse-time warnings (e.g. unclosed HTML containers).
    pub warnings: Vec<String>,
}
