//! Core mutation logic for an editable timeline overlay.
//!
//! Bookings on parallel lanes, edited through an external rendering/gesture
//! widget: drag-move, edge-resize, in-place rename, creation and deletion,
//! with at most one item in text-edit mode at a time. This crate is the
//! single source of truth for the mutation invariants; the widget stays an
//! adapter behind `widget::TimelineWidget`.

pub mod config;
pub mod edit;
pub mod hotkey;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod sync;
pub mod widget;

pub use config::{ConfigError, EditorConfig, DEFAULT_ITEM_DURATION_MS};
pub use edit::{EditModeCoordinator, EditObserver};
pub use hotkey::{EditFieldCommand, EditFieldEvent, EditorCommand, HotkeyDispatcher, Key};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Group, GroupId, Item, ItemId, ItemPatch, ItemValidationError};
pub use service::{EditorSession, ResizeEdge, SessionError, SessionResult};
pub use store::{ItemStore, StoreError, StoreObserver, StoreResult};
pub use sync::{RenderSyncBridge, SyncGoal};
pub use widget::{ConfirmationPrompt, RenderGroup, RenderItem, TimelineWidget};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
