//! Key-to-command decision tables.
//!
//! # Responsibility
//! - Decide what a key press means given the widget selection and edit
//!   state. Pure mapping; execution stays in the session.

use crate::model::item::ItemId;

/// Keys the global dispatcher distinguishes. Everything else the host
/// observes maps to `Other` and is ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Enter,
    Escape,
    Other,
}

/// Command decided from a global key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Ask for confirmation, then delete the selected item.
    RequestDelete(ItemId),
    /// Open the selected item's title for editing.
    EnterEdit(ItemId),
}

/// Event from the text input rendered while an item is in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFieldEvent {
    KeyEnter,
    KeyEscape,
    /// The input lost focus.
    Blur,
}

/// Command decided from an edit-field event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFieldCommand {
    /// Persist the draft as the item title and leave edit mode.
    Commit,
    /// Leave edit mode without persisting the draft.
    Discard,
}

/// Stateless key dispatcher.
#[derive(Debug, Default)]
pub struct HotkeyDispatcher;

impl HotkeyDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Decides the command for a global key press.
    ///
    /// Returns `None` without a widget selection, while an edit field is
    /// active (it intercepts its own keys), and for every key outside the
    /// table.
    pub fn dispatch_global(
        &self,
        key: Key,
        selection: Option<&ItemId>,
        editing: bool,
    ) -> Option<EditorCommand> {
        if editing {
            return None;
        }
        let selected = selection?;
        match key {
            Key::Delete => Some(EditorCommand::RequestDelete(selected.clone())),
            Key::Enter => Some(EditorCommand::EnterEdit(selected.clone())),
            Key::Escape | Key::Other => None,
        }
    }

    /// Decides the command for an event from the active edit field.
    ///
    /// Losing focus commits exactly as Enter does.
    pub fn dispatch_edit_field(&self, event: EditFieldEvent) -> EditFieldCommand {
        match event {
            EditFieldEvent::KeyEnter | EditFieldEvent::Blur => EditFieldCommand::Commit,
            EditFieldEvent::KeyEscape => EditFieldCommand::Discard,
        }
    }
}
