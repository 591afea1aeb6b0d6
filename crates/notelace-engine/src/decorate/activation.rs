use serde::Serialize;

use super::decoration::ActivationContext;

/// Event name for wiki-link navigation clicks.
pub const PAGE_CLICK_EVENT: &str = "page:click";

/// Modifier keys held during a widget interaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// Payload forwarded to the host when a link is clicked for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    /// Page the click happened on.
    pub page: String,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
    /// Token start offset at widget construction time.
    pub pos: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no handler registered for {0}")]
    NoHandler(String),
    #[error("event rejected by host: {0}")]
    Rejected(String),
}

/// Host-side event bus for navigation intents.
pub trait EventDispatcher {
    fn dispatch(&mut self, event: &str, payload: ClickEvent) -> Result<(), DispatchError>;
}

/// Minimal handle on the hosting editor for the alt-click branch.
pub trait EditorHandle {
    fn set_cursor(&mut self, pos: usize);
    fn focus(&mut self);
}

/// Handles a user interaction with a rendered link widget.
///
/// With the alternate modifier the cursor moves just inside the opening
/// marker and the editor is focused, without navigating. Otherwise a
/// [`ClickEvent`] is dispatched to the host; a dispatch failure is logged
/// and otherwise ignored.
pub fn activate_link(
    ctx: &ActivationContext,
    modifiers: Modifiers,
    editor: &mut dyn EditorHandle,
    dispatcher: &mut dyn EventDispatcher,
) {
    if modifiers.alt {
        editor.set_cursor(ctx.edit_pos);
        editor.focus();
        return;
    }

    let event = ClickEvent {
        page: ctx.page.clone(),
        ctrl_key: modifiers.ctrl,
        meta_key: modifiers.meta,
        alt_key: modifiers.alt,
        pos: ctx.token_start,
    };
    if let Err(err) = dispatcher.dispatch(PAGE_CLICK_EVENT, event) {
        log::error!("failed to dispatch {PAGE_CLICK_EVENT}: {err}");
    }
}
