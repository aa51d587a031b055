//! Canonical domain model for timeline bookings and lanes.
//!
//! # Responsibility
//! - Define the single interval representation edited by the session.
//! - Keep widget-facing duplicate shapes out of the domain (see `widget::render`).
//!
//! # Invariants
//! - Every item satisfies `start_ms < end_ms` strictly.
//! - Groups are read-only reference data for this core.

pub mod group;
pub mod item;

pub use group::Group;
pub use item::{GroupId, Item, ItemId, ItemPatch, ItemValidationError};
