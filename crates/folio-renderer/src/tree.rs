//! Builds a [`Document`] tree from a pulldown-cmark event stream.
//!
//! Block-level HTML containers (`<div>`, `<section>`, `<aside>`) opened in
//! one HTML block and closed in a later one wrap the markdown in between.
//! Containers still open when an enclosing markdown block ends, or at the
//! end of input, are closed automatically and reported as warnings.
//!
//! Inline `<a href>` ... `</a>` pairs become link nodes so raw links get the
//! same link rule as markdown ones.

use pulldown_cmark::{BlockQuoteKind, CodeBlockKind, Event, Tag, TagEnd};

use crate::callout::CalloutVariant;
use crate::html_block::{self, HtmlBlock};
use crate::node::{Alignment, Attribute, Document, RenderNode, TableRow, attribute_value};
use crate::state::HeadingAnchors;

/// Build a document tree from markdown events.
///
/// With `raw_html` disabled every HTML fragment in the source becomes a text
/// node, so it is escaped on output instead of interpreted.
pub fn parse<'a, I>(events: I, raw_html: bool) -> Document
where
    I: IntoIterator<Item = Event<'a>>,
{
    let mut builder = TreeBuilder::new(raw_html);
    for event in events {
        builder.event(event);
    }
    builder.finish()
}

enum Frame {
    Root,
    Paragraph,
    Heading { level: u8 },
    BlockQuote(Option<BlockQuoteKind>),
    CodeBlock { info: Option<String> },
    List { start: Option<u64> },
    Item,
    Table { alignments: Vec<Alignment> },
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    /// `raw` marks a link opened by an inline `<a href>` tag.
    Link {
        dest: String,
        title: String,
        raw: bool,
    },
    Image { src: String, title: String },
    HtmlBlock { raw: String },
    Container { tag: String, attrs: Vec<Attribute> },
    /// Constructs without a node of their own (footnotes, superscript, ...);
    /// children are spliced into the parent.
    Transparent,
}

struct Open {
    frame: Frame,
    children: Vec<RenderNode>,
    /// List items, or the cells of a table row.
    parts: Vec<Vec<RenderNode>>,
    head: TableRow,
    rows: Vec<TableRow>,
}

impl Open {
    fn new(frame: Frame) -> Self {
        Self {
            frame,
            children: Vec::new(),
            parts: Vec::new(),
            head: Vec::new(),
            rows: Vec::new(),
        }
    }
}

struct TreeBuilder {
    stack: Vec<Open>,
    anchors: HeadingAnchors,
    warnings: Vec<String>,
    raw_html: bool,
}

impl TreeBuilder {
    fn new(raw_html: bool) -> Self {
        Self {
            stack: vec![Open::new(Frame::Root)],
            anchors: HeadingAnchors::default(),
            warnings: Vec::new(),
            raw_html,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push(RenderNode::Text(text.into_string())),
            Event::Code(code) => self.push(RenderNode::InlineCode(code.into_string())),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::SoftBreak => self.push(RenderNode::SoftBreak),
            Event::HardBreak => self.push(RenderNode::HardBreak),
            Event::Rule => self.push(RenderNode::Rule),
            Event::TaskListMarker(checked) => self.push(RenderNode::TaskMarker(checked)),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph,
            Tag::Heading { level, .. } => Frame::Heading {
                level: level as u8,
            },
            Tag::BlockQuote(kind) => Frame::BlockQuote(kind),
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                info: match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_owned)
                    }
                    CodeBlockKind::Indented => None,
                },
            },
            Tag::HtmlBlock => Frame::HtmlBlock { raw: String::new() },
            Tag::List(start) => Frame::List { start },
            Tag::Item => Frame::Item,
            Tag::Table(alignments) => Frame::Table {
                alignments: alignments.into_iter().map(Alignment::from).collect(),
            },
            Tag::TableHead => Frame::TableHead,
            Tag::TableRow => Frame::TableRow,
            Tag::TableCell => Frame::TableCell,
            Tag::Emphasis => Frame::Emphasis,
            Tag::Strong => Frame::Strong,
            Tag::Strikethrough => Frame::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link {
                dest: dest_url.into_string(),
                title: title.into_string(),
                raw: false,
            },
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                src: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::FootnoteDefinition(_)
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => Frame::Transparent,
        };
        self.stack.push(Open::new(frame));
    }

    fn end(&mut self, _tag: TagEnd) {
        while matches!(
            self.top().frame,
            Frame::Container { .. } | Frame::Link { raw: true, .. }
        ) {
            self.close_unterminated_container();
        }
        if self.stack.len() > 1 {
            self.close_top();
        }
    }

    fn html(&mut self, html: &str) {
        if let Frame::HtmlBlock { raw } = &mut self.top_mut().frame {
            raw.push_str(html);
        } else {
            let node = self.raw_node(html.to_owned());
            self.push(node);
        }
    }

    fn inline_html(&mut self, html: &str) {
        if self.raw_html {
            if let Some((dest, title)) = html_block::link_open(html) {
                self.stack
                    .push(Open::new(Frame::Link { dest, title, raw: true }));
                return;
            }
            if html_block::is_link_close(html)
                && matches!(self.top().frame, Frame::Link { raw: true, .. })
            {
                self.close_top();
                return;
            }
        }
        self.html(html);
    }

    fn raw_node(&self, html: String) -> RenderNode {
        if self.raw_html {
            RenderNode::Html(html)
        } else {
            RenderNode::Text(html)
        }
    }

    fn top(&self) -> &Open {
        self.stack.last().expect("root frame is never popped")
    }

    fn top_mut(&mut self) -> &mut Open {
        self.stack.last_mut().expect("root frame is never popped")
    }

    /// Append a node to the innermost open frame, merging adjacent text.
    fn push(&mut self, node: RenderNode) {
        let children = &mut self.top_mut().children;
        if let (RenderNode::Text(text), Some(RenderNode::Text(last))) = (&node, children.last_mut())
        {
            last.push_str(text);
            return;
        }
        children.push(node);
    }

    fn close_unterminated_container(&mut self) {
        if let Frame::Container { tag, .. } = &self.top().frame {
            let warning = format!("Unclosed <{tag}> container closed automatically");
            self.warnings.push(warning);
        }
        self.close_top();
    }

    fn close_top(&mut self) {
        let Some(open) = self.stack.pop() else {
            return;
        };
        let Open {
            frame,
            children,
            parts,
            head,
            rows,
        } = open;

        let node = match frame {
            Frame::Root => {
                self.stack.push(Open {
                    frame: Frame::Root,
                    children,
                    parts,
                    head,
                    rows,
                });
                return;
            }
            Frame::Paragraph => RenderNode::Paragraph(children),
            Frame::Heading { level } => {
                let text: String = children.iter().map(RenderNode::plain_text).collect();
                let id = self.anchors.register(level, &text);
                RenderNode::Heading {
                    level,
                    id,
                    children,
                }
            }
            Frame::BlockQuote(Some(kind)) => RenderNode::Callout {
                variant: CalloutVariant::from(kind),
                children,
            },
            Frame::BlockQuote(None) => RenderNode::Blockquote(children),
            Frame::CodeBlock { info } => RenderNode::CodeBlock {
                info,
                content: children.iter().map(RenderNode::plain_text).collect(),
            },
            Frame::List { start } => RenderNode::List {
                start,
                items: parts,
            },
            Frame::Item | Frame::TableCell => {
                self.top_mut().parts.push(children);
                return;
            }
            Frame::TableHead => {
                self.top_mut().head = parts;
                return;
            }
            Frame::TableRow => {
                self.top_mut().rows.push(parts);
                return;
            }
            Frame::Table { alignments } => RenderNode::Table {
                alignments,
                head,
                rows,
            },
            Frame::Emphasis => RenderNode::Emphasis(children),
            Frame::Strong => RenderNode::Strong(children),
            Frame::Strikethrough => RenderNode::Strikethrough(children),
            Frame::Link { dest, title, .. } => RenderNode::Link {
                dest,
                title,
                children,
            },
            Frame::Image { src, title } => RenderNode::Image {
                src,
                alt: children.iter().map(RenderNode::plain_text).collect(),
                title,
            },
            Frame::HtmlBlock { raw } => {
                self.html_block(raw);
                return;
            }
            Frame::Container { tag, attrs } => container_node(tag, attrs, children),
            Frame::Transparent => {
                for child in children {
                    self.push(child);
                }
                return;
            }
        };
        self.push(node);
    }

    fn html_block(&mut self, raw: String) {
        if !self.raw_html {
            self.push(RenderNode::Text(raw));
            return;
        }

        match html_block::classify(&raw) {
            HtmlBlock::Open {
                tag,
                attrs,
                leading,
            } => {
                let mut open = Open::new(Frame::Container { tag, attrs });
                open.children.extend(leading.map(RenderNode::Html));
                self.stack.push(open);
            }
            HtmlBlock::Close { tag } => self.close_container(&tag, raw),
            HtmlBlock::Element { tag, attrs, inner } => {
                let children = if inner.is_empty() {
                    Vec::new()
                } else {
                    vec![RenderNode::Html(inner)]
                };
                self.push(container_node(tag, attrs, children));
            }
            HtmlBlock::Other => self.push(RenderNode::Html(raw)),
        }
    }

    /// Close the innermost open container with `tag`, auto-closing any
    /// containers nested inside it. A closing tag without a matching
    /// container is kept as raw HTML.
    fn close_container(&mut self, tag: &str, raw: String) {
        let open_match = self
            .stack
            .iter()
            .rev()
            .take_while(|open| matches!(open.frame, Frame::Container { .. }))
            .any(|open| matches!(&open.frame, Frame::Container { tag: open_tag, .. } if open_tag == tag));

        if !open_match {
            self.warnings
                .push(format!("Closing </{tag}> without a matching open container"));
            self.push(RenderNode::Html(raw));
            return;
        }

        while !matches!(&self.top().frame, Frame::Container { tag: open_tag, .. } if open_tag == tag)
        {
            self.close_unterminated_container();
        }
        self.close_top();
    }

    fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            if matches!(self.top().frame, Frame::Container { .. }) {
                self.close_unterminated_container();
            } else {
                self.close_top();
            }
        }
        let root = self.stack.pop().map(|open| open.children).unwrap_or_default();
        Document {
            nodes: root,
            toc: self.anchors.take_toc(),
            warnings: self.warnings,
        }
    }
}

/// Build the node for a closed HTML container: a callout when its class
/// carries the callout marker, a plain container otherwise.
fn container_node(tag: String, attrs: Vec<Attribute>, children: Vec<RenderNode>) -> RenderNode {
    match attribute_value(&attrs, "class").and_then(CalloutVariant::from_class) {
        Some(variant) => RenderNode::Callout { variant, children },
        None => RenderNode::Container {
            tag,
            attrs,
            children,
        },
    }
}
