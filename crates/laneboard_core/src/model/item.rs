//! Booking item domain model.
//!
//! # Responsibility
//! - Define the canonical time-interval record owned by the store.
//! - Provide interval validation shared by every write path.
//!
//! # Invariants
//! - `start_ms < end_ms` strictly; a zero or negative duration is invalid.
//! - `id` is unique within a store and never reused for another item.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an item.
///
/// Kept string-typed because the external widget addresses items by string
/// id; the content is numeric so the store can derive the next id.
pub type ItemId = String;

/// Identifier of the lane (group) an item is assigned to.
pub type GroupId = String;

/// Canonical record for one booking on the timeline.
///
/// This is the only stored representation of the interval. The widget-facing
/// shape with its duplicated field pairs is derived at the boundary, so the
/// two views cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Lane this item is assigned to. Never empty.
    pub group_id: GroupId,
    /// Display title; the empty string represents an untitled item.
    pub title: String,
    /// Interval start, epoch milliseconds.
    pub start_ms: i64,
    /// Interval end, epoch milliseconds. Strictly greater than `start_ms`.
    pub end_ms: i64,
}

impl Item {
    /// Creates an item after checking the interval invariant.
    pub fn new(
        id: impl Into<ItemId>,
        group_id: impl Into<GroupId>,
        title: impl Into<String>,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            id: id.into(),
            group_id: group_id.into(),
            title: title.into(),
            start_ms,
            end_ms,
        };
        item.validate()?;
        Ok(item)
    }

    /// Interval length in milliseconds. Always positive for a valid item.
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Checks the interval invariant.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.start_ms >= self.end_ms {
            return Err(ItemValidationError::EmptyInterval {
                start_ms: self.start_ms,
                end_ms: self.end_ms,
            });
        }
        Ok(())
    }
}

/// Partial field change applied through `ItemStore::update`.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub group_id: Option<GroupId>,
    pub title: Option<String>,
    pub start_ms: Option<i64>,
    pub end_ms: Option<i64>,
}

/// Validation failure for a single item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// The interval would be empty or inverted.
    EmptyInterval { start_ms: i64, end_ms: i64 },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInterval { start_ms, end_ms } => write!(
                f,
                "item interval is empty: start {start_ms} must be strictly before end {end_ms}"
            ),
        }
    }
}

impl Error for ItemValidationError {}
