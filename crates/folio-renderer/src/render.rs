//! Rule application: walks a [`Document`] and dispatches each node to its
//! [`RenderRules`] method.

use crate::code_block::{detect_language, strip_trailing_newline};
use crate::link::LinkKind;
use crate::node::{Document, RenderNode};
use crate::raw::apply_rules;
use crate::rules::{ListKind, RenderRules};

impl Document {
    /// Render the document with the given rule set.
    pub fn render<R: RenderRules + ?Sized>(&self, rules: &R) -> String {
        let mut out = String::with_capacity(4096);
        render_nodes(&self.nodes, rules, &mut out);
        out
    }
}

fn render_nodes<R: RenderRules + ?Sized>(nodes: &[RenderNode], rules: &R, out: &mut String) {
    for node in nodes {
        render_node(node, rules, out);
    }
}

fn render_children<R: RenderRules + ?Sized>(nodes: &[RenderNode], rules: &R) -> String {
    let mut inner = String::new();
    render_nodes(nodes, rules, &mut inner);
    inner
}

fn render_node<R: RenderRules + ?Sized>(node: &RenderNode, rules: &R, out: &mut String) {
    match node {
        RenderNode::Heading {
            level,
            id,
            children,
        } => rules.heading(*level, id, &render_children(children, rules), out),
        RenderNode::Paragraph(children) => rules.paragraph(&render_children(children, rules), out),
        RenderNode::CodeBlock { info, content } => match detect_language(info.as_deref()) {
            Some(lang) => rules.code_block(&lang, strip_trailing_newline(content), out),
            None => rules.inline_code(content, out),
        },
        RenderNode::InlineCode(code) => rules.inline_code(code, out),
        RenderNode::Table {
            alignments,
            head,
            rows,
        } => {
            let head: Vec<String> = head
                .iter()
                .map(|cell| render_children(cell, rules))
                .collect();
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|row| row.iter().map(|cell| render_children(cell, rules)).collect())
                .collect();
            rules.table(alignments, &head, &rows, out);
        }
        RenderNode::Blockquote(children) => rules.blockquote(&render_children(children, rules), out),
        RenderNode::Callout { variant, children } => {
            rules.callout(*variant, &render_children(children, rules), out);
        }
        RenderNode::List { start, items } => {
            let items: Vec<String> = items
                .iter()
                .map(|item| render_children(item, rules))
                .collect();
            rules.list(ListKind::from_start(*start), &items, out);
        }
        RenderNode::Link {
            dest,
            title,
            children,
        } => rules.link(
            dest,
            title,
            LinkKind::classify(dest),
            &render_children(children, rules),
            out,
        ),
        RenderNode::Image { src, alt, title } => rules.image(src, alt, title, out),
        RenderNode::Rule => rules.rule(out),
        RenderNode::Container {
            tag,
            attrs,
            children,
        } => rules.container(tag, attrs, &render_children(children, rules), out),
        RenderNode::Text(text) => rules.text(text, out),
        RenderNode::Emphasis(children) => rules.emphasis(&render_children(children, rules), out),
        RenderNode::Strong(children) => rules.strong(&render_children(children, rules), out),
        RenderNode::Strikethrough(children) => {
            rules.strikethrough(&render_children(children, rules), out);
        }
        RenderNode::SoftBreak => rules.soft_break(out),
        RenderNode::HardBreak => rules.hard_break(out),
        RenderNode::TaskMarker(checked) => rules.task_marker(*checked, out),
        RenderNode::Html(html) => rules.html(&apply_rules(rules, html), out),
    }
}
