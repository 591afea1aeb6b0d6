use serde::Serialize;

/// A reference to a page, split into the page identifier and an optional
/// in-page anchor.
///
/// An empty `page` with an anchor (`[[#heading]]`) refers to a location in
/// the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub page: String,
    pub anchor: Option<String>,
}

impl PageRef {
    /// Splits a raw reference at the first `#` into page and anchor.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('#') {
            Some((page, anchor)) => Self {
                page: page.to_string(),
                anchor: Some(anchor.to_string()),
            },
            None => Self {
                page: raw.to_string(),
                anchor: None,
            },
        }
    }

    /// Renders the canonical string form. Inverse of [`PageRef::parse`] for
    /// well-formed input.
    pub fn encode(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("{}#{}", self.page, anchor),
            None => self.page.clone(),
        }
    }
}
