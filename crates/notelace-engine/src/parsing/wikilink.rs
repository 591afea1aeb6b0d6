use super::cursor::Cursor;

/// Wiki-link delimiter constants. The parser calls these; it never hardcodes
/// `[[` or `|`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
    pub const EMBED: u8 = b'!';
}

/// The four groups of a well-formed wiki-link token, borrowed from the
/// token's text.
///
/// A token that does not match the expected shape produces no `ParsedLink`
/// at all; partially-typed links are expected during live editing and are
/// simply skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink<'a> {
    /// `[[`, or `![[` for embedded images.
    pub open_marker: &'a str,
    /// Raw reference text; may carry a path and an in-page anchor.
    pub target: &'a str,
    /// Display text override after `|`, if present.
    pub alias: Option<&'a str>,
    /// Always `]]`.
    pub close_marker: &'a str,
}

impl ParsedLink<'_> {
    /// True when the token is an embedded image (`![[...]]`), which is not
    /// a navigable link.
    pub fn is_embed(&self) -> bool {
        self.open_marker.as_bytes().first() == Some(&WikiLink::EMBED)
    }
}

/// Parses a full wiki-link token into its four groups.
///
/// Accepts exactly: optional `!`, `[[`, a non-empty target excluding `]`
/// and `|`, an optional `|`-delimited non-empty alias excluding `]`, and
/// `]]` closing out the text. Anything else returns `None`.
pub fn parse_wiki_link(text: &str) -> Option<ParsedLink<'_>> {
    let mut cur = Cursor::new(text);

    if cur.peek() == Some(WikiLink::EMBED) {
        cur.bump();
    }
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }
    cur.bump_n(WikiLink::OPEN.len());
    let open_end = cur.pos();

    let target_start = cur.pos();
    while let Some(b) = cur.peek() {
        if b == WikiLink::ALIAS || b == WikiLink::CLOSE[0] {
            break;
        }
        cur.bump();
    }
    let target_end = cur.pos();
    if target_end == target_start {
        return None;
    }

    let mut alias = None;
    if cur.peek() == Some(WikiLink::ALIAS) {
        cur.bump(); // |
        let alias_start = cur.pos();
        while let Some(b) = cur.peek() {
            if b == WikiLink::CLOSE[0] {
                break;
            }
            cur.bump();
        }
        if cur.pos() == alias_start {
            return None;
        }
        alias = Some(&text[alias_start..cur.pos()]);
    }

    if !cur.starts_with(WikiLink::CLOSE) {
        return None;
    }
    let close_start = cur.pos();
    cur.bump_n(WikiLink::CLOSE.len());
    if !cur.eof() {
        return None;
    }

    Some(ParsedLink {
        open_marker: &text[..open_end],
        target: &text[target_start..target_end],
        alias,
        close_marker: &text[close_start..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_link() {
        let link = parse_wiki_link("[[target]]").unwrap();
        assert_eq!(link.open_marker, "[[");
        assert_eq!(link.target, "target");
        assert!(link.alias.is_none());
        assert_eq!(link.close_marker, "]]");
        assert!(!link.is_embed());
    }

    #[test]
    fn parse_link_with_alias() {
        let link = parse_wiki_link("[[target|alias]]").unwrap();
        assert_eq!(link.target, "target");
        assert_eq!(link.alias, Some("alias"));
    }

    #[test]
    fn parse_embed() {
        let link = parse_wiki_link("![[image.png]]").unwrap();
        assert_eq!(link.open_marker, "![[");
        assert_eq!(link.target, "image.png");
        assert!(link.is_embed());
    }

    #[test]
    fn parse_path_and_anchor_target() {
        let link = parse_wiki_link("[[Projects/Alpha#notes]]").unwrap();
        assert_eq!(link.target, "Projects/Alpha#notes");
    }

    #[test]
    fn unclosed_link_rejected() {
        assert!(parse_wiki_link("[[unclosed").is_none());
        assert!(parse_wiki_link("[[almost]").is_none());
    }

    #[test]
    fn empty_target_rejected() {
        assert!(parse_wiki_link("[[]]").is_none());
        assert!(parse_wiki_link("[[|alias]]").is_none());
    }

    #[test]
    fn empty_alias_rejected() {
        assert!(parse_wiki_link("[[target|]]").is_none());
    }

    #[test]
    fn stray_bracket_in_target_rejected() {
        assert!(parse_wiki_link("[[tar]get]]").is_none());
    }

    #[test]
    fn trailing_text_rejected() {
        assert!(parse_wiki_link("[[target]] tail").is_none());
    }

    #[test]
    fn multibyte_target() {
        let link = parse_wiki_link("[[Café/Menü]]").unwrap();
        assert_eq!(link.target, "Café/Menü");
    }
}
