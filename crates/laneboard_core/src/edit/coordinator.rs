//! Edit-mode coordination cell.
//!
//! # Responsibility
//! - Track which single item (if any) has its title open as a text field.
//! - Notify observers on every actual edit-target transition.
//!
//! # Invariants
//! - `current()` references an item present in the store; callers that
//!   enter edit mode gate on existence, and item deletion exits edit mode
//!   in the same logical transaction.
//! - While an item is in edit mode, drag-move is disabled system-wide
//!   (`can_move_items` is the widget-facing flag for this); resize stays
//!   permitted.

use crate::model::item::ItemId;
use log::debug;
use std::sync::Arc;

/// Observer notified when the edit target changes.
pub trait EditObserver {
    fn edit_target_changed(&self, current: Option<&ItemId>);
}

/// Owner of the single optional edit-mode cell.
#[derive(Default)]
pub struct EditModeCoordinator {
    current_edit_id: Option<ItemId>,
    observers: Vec<Arc<dyn EditObserver>>,
}

impl EditModeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer for edit-target transitions.
    pub fn subscribe(&mut self, observer: Arc<dyn EditObserver>) {
        self.observers.push(observer);
    }

    /// Puts `id` into text-edit mode, replacing any item already there.
    ///
    /// Switching away from a mid-edit item does not save its draft; the
    /// previous session is discarded.
    pub fn enter(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        if self.current_edit_id.as_ref() == Some(&id) {
            return;
        }
        debug!("event=edit_enter module=edit id={id}");
        self.current_edit_id = Some(id);
        self.notify();
    }

    /// Leaves text-edit mode. No-op when nothing is being edited.
    pub fn exit(&mut self) {
        if self.current_edit_id.is_none() {
            return;
        }
        debug!("event=edit_exit module=edit");
        self.current_edit_id = None;
        self.notify();
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.current_edit_id.as_deref() == Some(id)
    }

    pub fn current(&self) -> Option<&ItemId> {
        self.current_edit_id.as_ref()
    }

    /// Widget-facing "can items be dragged" flag: true exactly when no item
    /// is in edit mode.
    pub fn can_move_items(&self) -> bool {
        self.current_edit_id.is_none()
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.edit_target_changed(self.current_edit_id.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditModeCoordinator, EditObserver};
    use crate::model::item::ItemId;
    use std::cell::RefCell;
    use std::sync::Arc;

    struct RecordingObserver {
        transitions: RefCell<Vec<Option<ItemId>>>,
    }

    impl EditObserver for RecordingObserver {
        fn edit_target_changed(&self, current: Option<&ItemId>) {
            self.transitions.borrow_mut().push(current.cloned());
        }
    }

    #[test]
    fn enter_overwrites_previous_target() {
        let mut edit = EditModeCoordinator::new();
        edit.enter("1");
        edit.enter("2");
        assert!(!edit.is_editing("1"));
        assert!(edit.is_editing("2"));
    }

    #[test]
    fn can_move_items_tracks_edit_state() {
        let mut edit = EditModeCoordinator::new();
        assert!(edit.can_move_items());
        edit.enter("1");
        assert!(!edit.can_move_items());
        edit.exit();
        assert!(edit.can_move_items());
    }

    #[test]
    fn observers_see_actual_transitions_only() {
        let observer = Arc::new(RecordingObserver {
            transitions: RefCell::new(Vec::new()),
        });
        let mut edit = EditModeCoordinator::new();
        edit.subscribe(observer.clone());

        edit.exit();
        edit.enter("1");
        edit.enter("1");
        edit.enter("2");
        edit.exit();

        let transitions = observer.transitions.borrow();
        assert_eq!(
            *transitions,
            vec![
                Some("1".to_string()),
                Some("2".to_string()),
                None,
            ]
        );
    }
}
