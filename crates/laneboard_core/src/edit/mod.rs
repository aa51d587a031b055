//! Text-edit mode ownership.
//!
//! # Responsibility
//! - Own the single `current_edit_id` cell shared by every component that
//!   needs edit-mode state.
//!
//! # Invariants
//! - At most one item is in text-edit mode at any time.
//! - Only the coordinator writes the cell; everything else reads it.

pub mod coordinator;

pub use coordinator::{EditModeCoordinator, EditObserver};
