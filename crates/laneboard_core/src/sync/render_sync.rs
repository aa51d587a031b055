//! Remount-and-reselect protocol for the rendering widget.
//!
//! # Responsibility
//! - Sequence the two halves of a resynchronize pass: capture + remount
//!   request now, selection reapply after the widget's next render turn.
//!
//! # Invariants
//! - `schedule` captures the reselect target before requesting the remount.
//! - A pending pass settles exactly once; `settle` with nothing pending is
//!   a no-op.
//! - Reselection is best-effort by contract: if the captured id no longer
//!   exists in the store, the reapply is skipped silently. Callers that
//!   schedule a pass accept that the reselect half may not happen.
//!
//! The gap between `schedule` and `settle` is a sequencing device, not
//! concurrency: the host calls `settle` once the widget has re-rendered,
//! which is assumed to happen synchronously within one scheduling-queue
//! turn after the remount request.

use crate::edit::coordinator::EditModeCoordinator;
use crate::model::item::ItemId;
use crate::store::item_store::ItemStore;
use crate::widget::TimelineWidget;
use log::{debug, info};

/// What a scheduled pass should do once the widget has re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncGoal {
    /// Remount the widget and restore whatever selection it had at schedule
    /// time. Used after mutations that change rendered layout (a title edit
    /// can change item height).
    RestoreSelection,
    /// Let the widget observe a freshly created item, then select it and
    /// optionally open it for editing. No remount is needed; the widget
    /// only has to pick up the new collection snapshot first.
    AdoptItem { id: ItemId, enter_edit: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSync {
    reselect: Option<ItemId>,
    enter_edit: bool,
}

/// Two-phase resynchronize operation on the widget-adapter boundary.
#[derive(Default)]
pub struct RenderSyncBridge {
    pending: Option<PendingSync>,
}

impl RenderSyncBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a resynchronize pass.
    ///
    /// For `RestoreSelection` the widget's current selection is read before
    /// the remount request, so the remount cannot clobber the capture.
    /// Scheduling while a pass is already pending replaces it with the
    /// newer goal.
    pub fn schedule(&mut self, widget: &mut dyn TimelineWidget, goal: SyncGoal) {
        if self.pending.is_some() {
            debug!("event=render_sync_replaced module=sync status=ok");
        }
        let pending = match goal {
            SyncGoal::RestoreSelection => {
                let captured = widget.selected_item();
                widget.request_remount();
                info!(
                    "event=render_sync_scheduled module=sync status=ok kind=remount reselect={}",
                    captured.as_deref().unwrap_or("-")
                );
                PendingSync {
                    reselect: captured,
                    enter_edit: false,
                }
            }
            SyncGoal::AdoptItem { id, enter_edit } => {
                info!(
                    "event=render_sync_scheduled module=sync status=ok kind=adopt reselect={id} enter_edit={enter_edit}"
                );
                PendingSync {
                    reselect: Some(id),
                    enter_edit,
                }
            }
        };
        self.pending = Some(pending);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Finishes the pending pass after the widget's render turn.
    ///
    /// Reapplies the captured selection, entering edit mode when the pass
    /// adopted a new item. A target that vanished from the store in the
    /// meantime is skipped without error. Returns whether a pass settled.
    pub fn settle(
        &mut self,
        widget: &mut dyn TimelineWidget,
        store: &ItemStore,
        edit: &mut EditModeCoordinator,
    ) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        match pending.reselect {
            Some(id) if store.get(&id).is_some() => {
                widget.select_item(Some(id.clone()));
                if pending.enter_edit {
                    edit.enter(id.clone());
                }
                info!("event=render_sync_settled module=sync status=ok reselect={id}");
            }
            Some(id) => {
                // Target vanished between schedule and settle; skip the reapply.
                debug!("event=render_sync_skipped module=sync status=ok reselect={id}");
            }
            None => {
                widget.select_item(None);
                info!("event=render_sync_settled module=sync status=ok reselect=-");
            }
        }
        true
    }
}
