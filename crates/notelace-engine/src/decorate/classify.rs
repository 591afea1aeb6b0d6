use crate::editing::selection::{Selection, is_cursor_in_range};
use crate::models::space_index::{DynamicPages, SpaceIndex};
use crate::parsing::wikilink::parse_wiki_link;
use crate::refs::page_ref::PageRef;
use crate::refs::resolve::resolve_path;

use super::decoration::{
    ActivationContext, Decoration, LINK_CLASS, LINK_MISSING_CLASS, LinkWidget,
};

/// Node kind name the tree walker reports for wiki-link tokens.
pub const WIKI_LINK_KIND: &str = "WikiLink";

/// One node span as reported by the host's tree walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan<'a> {
    /// Kind name of the syntax node.
    pub kind: &'a str,
    /// Start byte offset in the document.
    pub start: usize,
    /// End byte offset in the document (exclusive).
    pub end: usize,
    /// The document text in `start..end`.
    pub text: &'a str,
}

/// Read-only view of the document state a decoration pass runs against.
pub struct DocumentContext<'a> {
    /// Name of the page being edited, e.g. `Notes/Index`.
    pub current_page: &'a str,
    /// Primary editor selection.
    pub selection: Selection,
    /// Known-file index, owned and refreshed by the host's sync engine.
    pub index: &'a SpaceIndex,
    /// Predicate for extension-generated pages.
    pub dynamic_pages: &'a dyn DynamicPages,
}

/// Classifies one candidate span into at most one decoration instruction.
///
/// Non-wiki-link kinds, malformed or partially-typed link text, and embedded
/// images all produce `None`; none of these are errors. For a well-formed
/// link the outcome depends on where the cursor is:
///
/// - cursor inside the token: the raw markup stays visible, and a "missing"
///   style mark is laid over the inner text (markers excluded) only when the
///   target does not exist;
/// - cursor outside: the whole token collapses into a [`LinkWidget`].
///
/// Pure for a fixed document state, index, and selection; hosts re-run the
/// pass on every edit and rely on identical output to avoid flicker.
pub fn classify(token: &TokenSpan<'_>, ctx: &DocumentContext<'_>) -> Option<Decoration> {
    if token.kind != WIKI_LINK_KIND {
        return None;
    }
    let link = parse_wiki_link(token.text)?;
    if link.is_embed() {
        return None;
    }

    let mut page_ref = PageRef::parse(link.target);
    // Wiki-link targets are root-absolute: resolve `/` + page.
    page_ref.page = resolve_path(ctx.current_page, &format!("/{}", page_ref.page));

    let exists = page_exists(ctx, &page_ref.page);

    if is_cursor_in_range(ctx.selection, token.start..token.end) {
        // Link is being edited; only flag a missing target.
        if exists {
            return None;
        }
        return Some(Decoration::Mark {
            range: token.start + link.open_marker.len()..token.end - link.close_marker.len(),
            css_class: LINK_MISSING_CLASS,
        });
    }

    let text = match link.alias {
        Some(alias) => alias,
        None => link.target.rsplit('/').next().unwrap_or(link.target),
    };

    let encoded = page_ref.encode();
    let widget = LinkWidget {
        text: text.to_string(),
        title: if exists {
            format!("Navigate to {encoded}")
        } else {
            format!("Create {}", page_ref.page)
        },
        href: format!("/{encoded}"),
        css_class: if exists { LINK_CLASS } else { LINK_MISSING_CLASS },
        activation: ActivationContext {
            page: ctx.current_page.to_string(),
            token_start: token.start,
            edit_pos: token.start + link.open_marker.len(),
        },
    };

    Some(Decoration::Replace {
        range: token.start..token.end,
        widget,
    })
}

/// Runs a full decoration pass, keeping instruction order aligned with token
/// order as the host's decoration engine requires.
pub fn decorate<'a>(
    tokens: impl IntoIterator<Item = TokenSpan<'a>>,
    ctx: &DocumentContext<'_>,
) -> Vec<Decoration> {
    tokens.into_iter().filter_map(|t| classify(&t, ctx)).collect()
}

/// Existence verdict for a resolved page identifier, recomputed from current
/// index state on every pass.
fn page_exists(ctx: &DocumentContext<'_>, page: &str) -> bool {
    // Optimistic until the first full listing has arrived.
    if !ctx.index.full_sync_completed() {
        return true;
    }
    // Pure in-page anchors and extension-generated pages always resolve.
    if page.is_empty() || ctx.dynamic_pages.is_likely_handled(page) {
        return true;
    }
    ctx.index.contains_page(page)
}
