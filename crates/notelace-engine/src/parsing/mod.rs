//! # Wiki-Link Token Parsing
//!
//! Cursor-based parsing of a single wiki-link token's text into its four
//! groups: open marker, target, optional alias, close marker.
//!
//! The acceptance boundary is deliberately strict: the whole token text must
//! match, the target may not contain `]` or `|`, and the alias may not
//! contain `]`. Anything else is not an error, it's just not a link yet —
//! half-typed links show up on every keystroke during live editing.
//!
//! ## Modules
//!
//! - **`cursor`**: byte cursor over the token text
//! - **`wikilink`**: delimiter constants, `ParsedLink`, `parse_wiki_link()`

pub mod cursor;
pub mod wikilink;

pub use wikilink::{ParsedLink, WikiLink, parse_wiki_link};
