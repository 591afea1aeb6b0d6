pub mod decorate;
pub mod editing;
pub mod models;
pub mod parsing;
pub mod refs;

// Re-export key types for easier usage
pub use decorate::{
    ActivationContext, ClickEvent, Decoration, DispatchError, DocumentContext, EditorHandle,
    EventDispatcher, LinkWidget, Modifiers, TokenSpan, activate_link, classify, decorate,
};
pub use editing::{Selection, is_cursor_in_range};
pub use models::{DynamicPages, NoDynamicPages, SpaceIndex};
pub use parsing::{ParsedLink, parse_wiki_link};
pub use refs::{PageRef, resolve_path};
