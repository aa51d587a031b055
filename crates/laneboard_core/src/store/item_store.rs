//! In-memory item store with id generation and change notification.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered item collection.
//! - Validate every write against interval and group invariants before
//!   committing it.
//!
//! # Invariants
//! - Write paths validate before mutating; a rejected write leaves the
//!   collection unchanged.
//! - `items()` returns insertion order, stable across reads and updates.
//! - New ids are the stringified successor of the largest numeric id present.

use crate::model::group::Group;
use crate::model::item::{GroupId, Item, ItemId, ItemPatch};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level mutation errors.
///
/// All variants are local and non-fatal: the triggering operation aborts and
/// the collection is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Creation was requested with a zero or negative duration.
    NonPositiveDuration { duration_ms: i64 },
    /// The mutation would leave the item with an empty or inverted interval.
    EmptyInterval {
        id: ItemId,
        start_ms: i64,
        end_ms: i64,
    },
    /// The mutation references a group that is not registered.
    UnknownGroup { group_id: GroupId },
    /// A patch targeted an item id that is not present in the store.
    UnknownItem { id: ItemId },
    /// Seed data contained two items with the same id.
    DuplicateId { id: ItemId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDuration { duration_ms } => {
                write!(f, "item duration must be positive, got {duration_ms}ms")
            }
            Self::EmptyInterval {
                id,
                start_ms,
                end_ms,
            } => write!(
                f,
                "item {id} interval would be empty: start {start_ms} must stay strictly before end {end_ms}"
            ),
            Self::UnknownGroup { group_id } => write!(f, "group not registered: {group_id}"),
            Self::UnknownItem { id } => write!(f, "item not found: {id}"),
            Self::DuplicateId { id } => write!(f, "duplicate item id in seed data: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Observer notified with the new collection snapshot after every
/// successful mutation.
pub trait StoreObserver {
    fn items_changed(&self, items: &[Item]);
}

/// Ordered in-memory item collection and the group registry it validates
/// against.
pub struct ItemStore {
    groups: Vec<Group>,
    items: Vec<Item>,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl ItemStore {
    /// Creates an empty store over the given lane registry.
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            groups,
            items: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Creates a store pre-populated with seed items.
    ///
    /// Every seed item is validated against the same invariants as a live
    /// mutation; the first violation rejects the whole seed.
    pub fn with_items(groups: Vec<Group>, items: Vec<Item>) -> StoreResult<Self> {
        let mut store = Self::new(groups);
        for item in items {
            if store.get(&item.id).is_some() {
                return Err(StoreError::DuplicateId { id: item.id });
            }
            store.check_interval(&item)?;
            store.check_group(&item.group_id)?;
            store.items.push(item);
        }
        Ok(store)
    }

    /// Registers an observer for collection snapshots.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Looks a group up by id.
    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    /// Looks a group up by lane index, the addressing the gesture widget
    /// uses for drop targets.
    pub fn group_at(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Creates a new item at `at_ms` lasting `duration_ms`.
    ///
    /// The new id is the stringified successor of the largest numeric id in
    /// the store; non-numeric ids are ignored for that maximum. The title
    /// starts empty so the user can name the item immediately.
    pub fn create(&mut self, group_id: &str, at_ms: i64, duration_ms: i64) -> StoreResult<Item> {
        if duration_ms <= 0 {
            warn!(
                "event=item_create_rejected module=store status=error group={group_id} duration_ms={duration_ms}"
            );
            return Err(StoreError::NonPositiveDuration { duration_ms });
        }
        self.check_group(group_id)?;

        let item = Item {
            id: self.next_id(),
            group_id: group_id.to_string(),
            title: String::new(),
            start_ms: at_ms,
            end_ms: at_ms + duration_ms,
        };
        info!(
            "event=item_created module=store status=ok id={} group={} start_ms={} end_ms={}",
            item.id, item.group_id, item.start_ms, item.end_ms
        );
        self.items.push(item.clone());
        self.notify();
        Ok(item)
    }

    /// Applies a partial field change to one item.
    ///
    /// The patch is validated against the interval and group invariants on a
    /// candidate copy first; a rejected patch leaves the stored item
    /// untouched.
    pub fn update(&mut self, id: &str, patch: &ItemPatch) -> StoreResult<Item> {
        let index = match self.items.iter().position(|item| item.id == id) {
            Some(index) => index,
            None => {
                warn!("event=item_update_rejected module=store status=error id={id} error=unknown_item");
                return Err(StoreError::UnknownItem { id: id.to_string() });
            }
        };

        let mut candidate = self.items[index].clone();
        if let Some(group_id) = &patch.group_id {
            candidate.group_id = group_id.clone();
        }
        if let Some(title) = &patch.title {
            candidate.title = title.clone();
        }
        if let Some(start_ms) = patch.start_ms {
            candidate.start_ms = start_ms;
        }
        if let Some(end_ms) = patch.end_ms {
            candidate.end_ms = end_ms;
        }

        if let Err(err) = self
            .check_interval(&candidate)
            .and_then(|()| self.check_group(&candidate.group_id))
        {
            warn!("event=item_update_rejected module=store status=error id={id} error={err}");
            return Err(err);
        }

        info!(
            "event=item_updated module=store status=ok id={} group={} start_ms={} end_ms={}",
            candidate.id, candidate.group_id, candidate.start_ms, candidate.end_ms
        );
        self.items[index] = candidate.clone();
        self.notify();
        Ok(candidate)
    }

    /// Removes one item. Idempotent: deleting an absent id is a no-op and
    /// returns `false`.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("event=item_delete_noop module=store status=ok id={id}");
            return false;
        }
        info!("event=item_deleted module=store status=ok id={id}");
        self.notify();
        true
    }

    fn next_id(&self) -> ItemId {
        let max = self
            .items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    fn check_interval(&self, item: &Item) -> StoreResult<()> {
        item.validate().map_err(|_| StoreError::EmptyInterval {
            id: item.id.clone(),
            start_ms: item.start_ms,
            end_ms: item.end_ms,
        })
    }

    fn check_group(&self, group_id: &str) -> StoreResult<()> {
        if self.group(group_id).is_none() {
            return Err(StoreError::UnknownGroup {
                group_id: group_id.to_string(),
            });
        }
        Ok(())
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.items_changed(&self.items);
        }
    }
}
