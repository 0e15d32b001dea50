//! Markdown rendering pipeline with pluggable per-node rules.
//!
//! Rendering happens in three stages:
//! 1. [`parse`] turns a pulldown-cmark event stream into a typed [`Document`]
//!    tree, resolving heading anchors and block-level HTML containers.
//! 2. [`Document::render`] walks the tree and hands each [`RenderNode`] to a
//!    [`RenderRules`] implementation. Links and callouts written as raw HTML
//!    go through the same rules.
//! 3. When raw HTML is passed through, the output is cleaned by [`Sanitizer`].
//!
//! [`MarkdownPipeline`] runs all three.
//!
//! # Rule sets
//!
//! - [`StyledRules`]: Tailwind-styled markup with syntax highlighting
//! - [`PlainRules`]: semantic HTML5 without classes
//!
//! # Example
//!
//! ```
//! use folio_renderer::{MarkdownPipeline, StyledRules};
//!
//! let result = MarkdownPipeline::new(StyledRules::new())
//!     .render("## Setup\n\n<div class=\"callout warning\">\n\nBack up first.\n\n</div>\n");
//! assert_eq!(result.toc[0].id, "setup");
//! assert!(result.html.contains("border-yellow-300"));
//! ```

mod callout;
mod code_block;
mod highlight;
mod html_block;
mod link;
mod node;
mod pipeline;
mod plain;
mod raw;
mod render;
mod rules;
mod sanitize;
mod state;
mod styled;
mod tree;

pub use callout::CalloutVariant;
pub use code_block::{detect_language, language_class, strip_trailing_newline};
pub use highlight::{DEFAULT_THEME, Highlighter};
pub use link::LinkKind;
pub use node::{Alignment, Attribute, Document, RenderNode, TableRow, attribute_value};
pub use pipeline::{MarkdownPipeline, RawHtml, RenderResult};
pub use plain::PlainRules;
pub use rules::{ListKind, RenderRules, alignment_style, render_attributes};
pub use sanitize::Sanitizer;
pub use state::{TocEntry, escape_html, slugify};
pub use styled::StyledRules;
pub use tree::parse;
