//! # Link Decoration
//!
//! Turns wiki-link tokens into decoration instructions for the host's
//! decoration engine.
//!
//! The core is [`classify`]: one token span in, at most one [`Decoration`]
//! out. When the cursor sits inside the token the raw markup stays visible
//! (with a "missing" style mark if the target doesn't exist); otherwise the
//! token is replaced by a navigable [`LinkWidget`]. [`decorate`] runs the
//! whole pass in token order.
//!
//! Widget interaction goes through [`activation`]: alt-click parks the
//! cursor inside the markers for editing, any other click dispatches a
//! navigation event to the host.

pub mod activation;
pub mod classify;
pub mod decoration;

pub use activation::{
    ClickEvent, DispatchError, EditorHandle, EventDispatcher, Modifiers, PAGE_CLICK_EVENT,
    activate_link,
};
pub use classify::{DocumentContext, TokenSpan, WIKI_LINK_KIND, classify, decorate};
pub use decoration::{
    ActivationContext, Decoration, LINK_CLASS, LINK_MISSING_CLASS, LinkWidget,
};
