//! Link and callout rules for elements inside raw HTML fragments.
//!
//! Markdown links and callout containers become nodes of their own, but an
//! `<a href>` or `<div class="callout">` written inside a raw HTML block
//! reaches the renderer as part of an opaque fragment. This pass finds those
//! elements and replaces their tags with the markup the rules produce, so a
//! raw external link opens in a new tab and a nested callout gets styled.

use html_escape::decode_html_entities;
use lol_html::html_content::{ContentType, Element, EndTag};
use lol_html::{HandlerResult, RewriteStrSettings, element, rewrite_str};

use crate::callout::CalloutVariant;
use crate::link::LinkKind;
use crate::rules::RenderRules;

/// Stands in for element content while a rule renders its wrapper.
const CONTENT_SLOT: &str = "\u{0}";

/// Apply the link and callout rules to elements of a raw HTML fragment.
///
/// Returns the fragment unchanged if it cannot be rewritten.
pub(crate) fn apply_rules<R: RenderRules + ?Sized>(rules: &R, html: &str) -> String {
    if !html.contains('<') {
        return html.to_owned();
    }

    let result = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("a[href]", |el| {
                    let dest = attribute(el, "href");
                    let title = attribute(el, "title");
                    let mut markup = String::new();
                    rules.link(&dest, &title, LinkKind::classify(&dest), CONTENT_SLOT, &mut markup);
                    wrap_content(el, &markup);
                    Ok(())
                }),
                element!("div[class], section[class], aside[class]", |el| {
                    let variant = el
                        .get_attribute("class")
                        .and_then(|class| CalloutVariant::from_class(&class));
                    if let Some(variant) = variant {
                        let mut markup = String::new();
                        rules.callout(variant, CONTENT_SLOT, &mut markup);
                        wrap_content(el, &markup);
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    );

    match result {
        Ok(rewritten) => rewritten,
        Err(e) => {
            tracing::debug!(error = %e, "Raw HTML left as written");
            html.to_owned()
        }
    }
}

/// Decoded attribute value, empty when absent.
fn attribute(el: &Element<'_, '_>, name: &str) -> String {
    el.get_attribute(name)
        .map(|value| decode_html_entities(&value).into_owned())
        .unwrap_or_default()
}

/// Replace the element's own tags with `markup`, split at [`CONTENT_SLOT`].
///
/// Elements without an end tag, and rules that drop the content, leave the
/// element as written.
fn wrap_content(el: &mut Element<'_, '_>, markup: &str) {
    let Some((open, close)) = markup.split_once(CONTENT_SLOT) else {
        return;
    };
    let close = close.to_owned();
    let Some(handlers) = el.end_tag_handlers() else {
        return;
    };
    handlers.push(Box::new(move |end: &mut EndTag<'_>| -> HandlerResult {
        end.before(&close, ContentType::Html);
        Ok(())
    }));
    el.before(open, ContentType::Html);
    el.remove_and_keep_content();
}
