//! Item collection ownership and mutation gate.
//!
//! # Responsibility
//! - Own the ordered item collection and the read-only group registry.
//! - Provide the only mutation path for items; no component edits items
//!   directly.
//!
//! # Invariants
//! - Every stored item satisfies `start_ms < end_ms` and references a
//!   registered group.
//! - Subscribers observe a collection snapshot after every successful
//!   mutation, never after a rejected one.

pub mod item_store;

pub use item_store::{ItemStore, StoreError, StoreObserver, StoreResult};
