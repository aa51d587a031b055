//! Widget resynchronization after non-incremental mutations.
//!
//! # Responsibility
//! - Force a widget remount when a mutation changed something the widget
//!   cannot re-measure incrementally, while preserving the user's perceived
//!   selection continuity.
//!
//! # Invariants
//! - The reselect target is captured before the remount is requested.
//! - Reselection is best-effort: a vanished target is skipped silently.

pub mod render_sync;

pub use render_sync::{RenderSyncBridge, SyncGoal};
