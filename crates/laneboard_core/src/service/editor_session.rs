//! Mutation handlers for the editor overlay.
//!
//! # Responsibility
//! - Provide the gesture- and key-level entry points the host wires the
//!   widget callbacks to.
//! - Enforce the mutation rules: duration preservation on move, single-edge
//!   resize, move lock during edit mode, confirmed deletes.
//!
//! # Invariants
//! - Moving an item never changes its duration.
//! - Resizing changes exactly one edge and never crosses the other.
//! - Deleting the item in edit mode clears edit state in the same call.
//! - After every entry point the widget's can-move flag matches the edit
//!   state.

use crate::config::EditorConfig;
use crate::edit::coordinator::EditModeCoordinator;
use crate::hotkey::dispatcher::{
    EditFieldCommand, EditFieldEvent, EditorCommand, HotkeyDispatcher, Key,
};
use crate::model::item::{Item, ItemPatch};
use crate::store::item_store::{ItemStore, StoreError};
use crate::sync::render_sync::{RenderSyncBridge, SyncGoal};
use crate::widget::render::{RenderGroup, RenderItem};
use crate::widget::{ConfirmationPrompt, TimelineWidget};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Which item edge a resize gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
}

impl ResizeEdge {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Errors from session entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Store-level rejection, passed through unchanged.
    Store(StoreError),
    /// The widget reported a lane index outside the registered group list.
    UnknownGroupIndex { index: usize },
    /// A drag-move arrived while an item is in text-edit mode.
    MoveLockedWhileEditing { id: String },
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::UnknownGroupIndex { index } => {
                write!(f, "no group registered at lane index {index}")
            }
            Self::MoveLockedWhileEditing { id } => {
                write!(f, "cannot move item {id}: an item is in edit mode")
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Orchestrates one editing surface: the item store, the edit-mode cell,
/// the render-sync bridge and the widget/prompt adapters.
pub struct EditorSession<W: TimelineWidget, P: ConfirmationPrompt> {
    store: ItemStore,
    edit: EditModeCoordinator,
    bridge: RenderSyncBridge,
    hotkeys: HotkeyDispatcher,
    widget: W,
    prompt: P,
    config: EditorConfig,
}

impl<W: TimelineWidget, P: ConfirmationPrompt> EditorSession<W, P> {
    /// Creates a session with default configuration.
    pub fn new(store: ItemStore, widget: W, prompt: P) -> Self {
        Self::with_config(store, widget, prompt, EditorConfig::default())
    }

    pub fn with_config(store: ItemStore, widget: W, prompt: P, config: EditorConfig) -> Self {
        let mut session = Self {
            store,
            edit: EditModeCoordinator::new(),
            bridge: RenderSyncBridge::new(),
            hotkeys: HotkeyDispatcher::new(),
            widget,
            prompt,
            config,
        };
        session.refresh_widget_flags();
        session
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn edit(&self) -> &EditModeCoordinator {
        &self.edit
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Moves an item to a new start time and lane, preserving its duration
    /// exactly.
    ///
    /// Rejected while any item is in edit mode; editing and dragging are
    /// mutually exclusive interaction modes, and this is the backstop behind
    /// the widget's can-move flag.
    pub fn move_item(
        &mut self,
        id: &str,
        new_start_ms: i64,
        new_group_id: &str,
    ) -> SessionResult<Item> {
        if !self.edit.can_move_items() {
            warn!("event=item_move_rejected module=service status=error id={id} error=edit_mode_active");
            return Err(SessionError::MoveLockedWhileEditing { id: id.to_string() });
        }

        let duration_ms = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::UnknownItem { id: id.to_string() })?
            .duration_ms();

        let patch = ItemPatch {
            group_id: Some(new_group_id.to_string()),
            start_ms: Some(new_start_ms),
            end_ms: Some(new_start_ms + duration_ms),
            ..ItemPatch::default()
        };
        let moved = self.store.update(id, &patch)?;
        info!(
            "event=item_moved module=service status=ok id={id} group={new_group_id} start_ms={new_start_ms}"
        );
        Ok(moved)
    }

    /// Resizes one edge of an item, leaving the other edge untouched.
    ///
    /// A resize that would cross the opposite edge is rejected and the item
    /// is left unchanged. Resize stays permitted during edit mode.
    pub fn resize_item(&mut self, id: &str, new_ms: i64, edge: ResizeEdge) -> SessionResult<Item> {
        let patch = match edge {
            ResizeEdge::Left => ItemPatch {
                start_ms: Some(new_ms),
                ..ItemPatch::default()
            },
            ResizeEdge::Right => ItemPatch {
                end_ms: Some(new_ms),
                ..ItemPatch::default()
            },
        };
        let resized = self.store.update(id, &patch)?;
        info!(
            "event=item_resized module=service status=ok id={id} edge={} new_ms={new_ms}",
            edge.as_str()
        );
        Ok(resized)
    }

    /// Creates an item at `at_ms` with the configured default duration,
    /// then schedules selection and edit mode for it so the user can name
    /// it immediately.
    ///
    /// Selection and edit mode take effect at the next `settle_render_sync`
    /// call, once the widget has observed the new collection.
    pub fn create_item(&mut self, group_id: &str, at_ms: i64) -> SessionResult<Item> {
        let created = self
            .store
            .create(group_id, at_ms, self.config.default_item_duration_ms)?;
        self.bridge.schedule(
            &mut self.widget,
            SyncGoal::AdoptItem {
                id: created.id.clone(),
                enter_edit: true,
            },
        );
        Ok(created)
    }

    /// Deletes an item after the external confirmation prompt agrees.
    ///
    /// Declining the prompt and deleting an absent id are both no-ops.
    /// Returns whether an item was actually removed.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let Some(item) = self.store.get(id).cloned() else {
            debug!("event=item_delete_noop module=service status=ok id={id}");
            return false;
        };

        if self.config.confirm_deletes && !self.prompt.confirm_delete(&item) {
            info!("event=item_delete_declined module=service status=ok id={id}");
            return false;
        }

        self.store.delete(id);
        if self.edit.is_editing(id) {
            self.edit.exit();
        }
        if self.widget.selected_item().as_deref() == Some(id) {
            self.widget.select_item(None);
        }
        self.refresh_widget_flags();
        true
    }

    /// Persists a new title, leaves edit mode and schedules a widget
    /// remount with selection restore.
    ///
    /// The remount is needed because a title change can alter rendered item
    /// height, which the widget does not re-measure on its own.
    pub fn rename_item(&mut self, id: &str, new_title: &str) -> SessionResult<Item> {
        let patch = ItemPatch {
            title: Some(new_title.to_string()),
            ..ItemPatch::default()
        };
        let renamed = self.store.update(id, &patch)?;
        self.edit.exit();
        self.bridge
            .schedule(&mut self.widget, SyncGoal::RestoreSelection);
        self.refresh_widget_flags();
        info!("event=item_renamed module=service status=ok id={id}");
        Ok(renamed)
    }

    /// Leaves edit mode without persisting the draft.
    pub fn discard_edit(&mut self) {
        self.edit.exit();
        self.refresh_widget_flags();
    }

    /// Widget callback: an item was dragged to a new time and lane index.
    pub fn on_item_move(
        &mut self,
        id: &str,
        drag_ms: i64,
        group_index: usize,
    ) -> SessionResult<Item> {
        let group_id = self
            .store
            .group_at(group_index)
            .ok_or(SessionError::UnknownGroupIndex { index: group_index })?
            .id
            .clone();
        self.move_item(id, drag_ms, &group_id)
    }

    /// Widget callback: an item edge was dragged to a new time.
    pub fn on_item_resize(&mut self, id: &str, new_ms: i64, edge: ResizeEdge) -> SessionResult<Item> {
        self.resize_item(id, new_ms, edge)
    }

    /// Widget callback: the canvas was double-clicked on a lane.
    pub fn on_canvas_double_click(&mut self, group_id: &str, at_ms: i64) -> SessionResult<Item> {
        self.create_item(group_id, at_ms)
    }

    /// Widget callback: an item was double-clicked; opens it for editing.
    ///
    /// A stale id (the item vanished since the widget rendered) is ignored.
    pub fn on_item_double_click(&mut self, id: &str) {
        if self.store.get(id).is_none() {
            debug!("event=edit_enter_noop module=service status=ok id={id}");
            return;
        }
        self.edit.enter(id);
        self.refresh_widget_flags();
    }

    /// Global keydown entry point. Returns whether a command was dispatched.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let selection = self.widget.selected_item();
        let editing = self.edit.current().is_some();
        match self
            .hotkeys
            .dispatch_global(key, selection.as_ref(), editing)
        {
            Some(EditorCommand::RequestDelete(id)) => {
                self.delete_item(&id);
                true
            }
            Some(EditorCommand::EnterEdit(id)) => {
                self.on_item_double_click(&id);
                true
            }
            None => false,
        }
    }

    /// Entry point for events from the active edit field.
    ///
    /// A commit renames the item currently in edit mode with `draft`; a
    /// discard drops the draft. Returns the renamed item on commit, `None`
    /// otherwise (including when nothing is in edit mode).
    pub fn handle_edit_field(
        &mut self,
        event: EditFieldEvent,
        draft: &str,
    ) -> SessionResult<Option<Item>> {
        match self.hotkeys.dispatch_edit_field(event) {
            EditFieldCommand::Commit => {
                let Some(id) = self.edit.current().cloned() else {
                    return Ok(None);
                };
                self.rename_item(&id, draft).map(Some)
            }
            EditFieldCommand::Discard => {
                self.discard_edit();
                Ok(None)
            }
        }
    }

    /// Host callback after the widget's render turn: finishes any pending
    /// render-sync pass. Returns whether one settled.
    pub fn settle_render_sync(&mut self) -> bool {
        let settled = self
            .bridge
            .settle(&mut self.widget, &self.store, &mut self.edit);
        self.refresh_widget_flags();
        settled
    }

    pub fn has_pending_render_sync(&self) -> bool {
        self.bridge.has_pending()
    }

    /// True exactly when no item is in edit mode; fed to the widget as its
    /// drag-enable flag.
    pub fn can_move_items(&self) -> bool {
        self.edit.can_move_items()
    }

    /// Items in widget shape, with per-item render hints.
    pub fn render_items(&self) -> Vec<RenderItem> {
        let selected = self.widget.selected_item();
        self.store
            .items()
            .iter()
            .map(|item| {
                RenderItem::from_item(
                    item,
                    selected.as_deref() == Some(item.id.as_str()),
                    self.edit.is_editing(&item.id),
                )
            })
            .collect()
    }

    /// Lane headers in widget shape.
    pub fn render_groups(&self) -> Vec<RenderGroup> {
        self.store.groups().iter().map(RenderGroup::from_group).collect()
    }

    fn refresh_widget_flags(&mut self) {
        self.widget.set_can_move(self.edit.can_move_items());
    }
}
