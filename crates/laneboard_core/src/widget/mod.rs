//! Contracts for the external rendering widget and host prompts.
//!
//! # Responsibility
//! - Define the adapter surface this core needs from the rendering/gesture
//!   widget: selection query/set, remount trigger, drag-enable flag.
//! - Define the blocking confirmation contract for destructive actions.
//!
//! # Invariants
//! - The core never reaches into widget internals; hit-testing, layout and
//!   zoom/pan stay on the widget's side of this boundary.

pub mod render;

use crate::model::item::{Item, ItemId};

pub use render::{RenderGroup, RenderItem};

/// Adapter over the external rendering/gesture widget.
///
/// Implementations live outside this crate (the host UI); tests and the CLI
/// probe use in-process stubs.
pub trait TimelineWidget {
    /// Currently selected item id, if any.
    fn selected_item(&self) -> Option<ItemId>;

    /// Programmatically sets (or clears) the widget selection.
    fn select_item(&mut self, id: Option<ItemId>);

    /// Asks the widget to fully reinitialize. The widget discards its
    /// transient UI state, including selection, except what the caller
    /// reapplies afterward.
    fn request_remount(&mut self);

    /// Feeds the widget the "can items be dragged" flag so it disables move
    /// gestures while an item is in edit mode.
    fn set_can_move(&mut self, can_move: bool);
}

/// Blocking yes/no decision from the user, external to this core.
pub trait ConfirmationPrompt {
    /// Returns whether `item` should really be deleted. Declining is a
    /// no-op for the caller, not an error.
    fn confirm_delete(&self, item: &Item) -> bool;
}
