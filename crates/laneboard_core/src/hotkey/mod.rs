//! Keyboard dispatch for the editor overlay.
//!
//! # Responsibility
//! - Map global key events and edit-field events to editor commands.
//!
//! # Invariants
//! - Global keys act only while a widget selection exists.
//! - The edit field owns Enter/Escape while an item is in edit mode; the
//!   global path yields to it.

pub mod dispatcher;

pub use dispatcher::{
    EditFieldCommand, EditFieldEvent, EditorCommand, HotkeyDispatcher, Key,
};
