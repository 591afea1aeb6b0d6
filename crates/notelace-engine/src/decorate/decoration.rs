use serde::Serialize;
use std::ops::Range;

/// Style class for a link whose target exists.
pub const LINK_CLASS: &str = "nl-wiki-link-page";
/// Style class for a link whose target is missing.
pub const LINK_MISSING_CLASS: &str = "nl-wiki-link-page-missing";

/// One instruction for the host's decoration engine.
///
/// `Mark` attaches a style class to a range and leaves the text visible;
/// `Replace` substitutes the range with a rendered link widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Decoration {
    Mark {
        range: Range<usize>,
        css_class: &'static str,
    },
    Replace {
        range: Range<usize>,
        widget: LinkWidget,
    },
}

impl Decoration {
    /// The document range this instruction covers.
    pub fn range(&self) -> Range<usize> {
        match self {
            Decoration::Mark { range, .. } => range.clone(),
            Decoration::Replace { range, .. } => range.clone(),
        }
    }
}

/// Description of the navigable widget that replaces a wiki link when the
/// cursor is elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkWidget {
    /// Display text: the alias, or the last path segment of the target.
    pub text: String,
    /// Hover tooltip ("Navigate to ..." or "Create ...").
    pub title: String,
    /// Destination, `/` + the canonical encoded page reference.
    pub href: String,
    pub css_class: &'static str,
    /// Offsets for interaction, captured when the widget was built.
    pub activation: ActivationContext,
}

/// Construction-time offsets the activation path reasons about.
///
/// The document may have changed by the time the user clicks; these offsets
/// are then approximate, which is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationContext {
    /// Page the link was rendered on.
    pub page: String,
    /// Start offset of the whole `[[...]]` token.
    pub token_start: usize,
    /// Offset just inside the opening marker, where alt-click parks the
    /// cursor for editing.
    pub edit_pos: usize,
}
