use laneboard_core::{Group, Item, ItemPatch, ItemStore, StoreError, StoreObserver};
use std::cell::RefCell;
use std::sync::Arc;

fn lanes() -> Vec<Group> {
    vec![Group::new("1", "Lane A"), Group::new("2", "Lane B")]
}

fn seed_item(id: &str, group_id: &str, start_ms: i64, end_ms: i64) -> Item {
    Item::new(id, group_id, "", start_ms, end_ms).expect("seed item should be valid")
}

#[test]
fn created_item_spans_requested_duration_and_gets_next_id() {
    let mut store = ItemStore::with_items(lanes(), vec![seed_item("3", "1", 0, 1000)])
        .expect("seed should validate");

    let created = store
        .create("2", 1000, 7_200_000)
        .expect("create should succeed");

    assert_eq!(created.id, "4");
    assert_eq!(created.group_id, "2");
    assert_eq!(created.start_ms, 1000);
    assert_eq!(created.end_ms, 7_201_000);
    assert!(created.title.is_empty());
}

#[test]
fn ids_grow_monotonically_across_creates() {
    let mut store = ItemStore::new(lanes());

    let first = store.create("1", 0, 1000).expect("create should succeed");
    let second = store.create("1", 0, 1000).expect("create should succeed");
    let third = store.create("2", 0, 1000).expect("create should succeed");

    assert_eq!(first.id, "1");
    assert_eq!(second.id, "2");
    assert_eq!(third.id, "3");
}

#[test]
fn id_generation_ignores_non_numeric_ids() {
    let mut store = ItemStore::with_items(
        lanes(),
        vec![seed_item("7", "1", 0, 1000), seed_item("beta", "2", 0, 1000)],
    )
    .expect("seed should validate");

    let created = store.create("1", 0, 1000).expect("create should succeed");
    assert_eq!(created.id, "8");
}

#[test]
fn create_rejects_non_positive_duration() {
    let mut store = ItemStore::new(lanes());

    let zero = store.create("1", 1000, 0);
    assert!(matches!(
        zero,
        Err(StoreError::NonPositiveDuration { duration_ms: 0 })
    ));

    let negative = store.create("1", 1000, -5);
    assert!(negative.is_err());
    assert!(store.is_empty());
}

#[test]
fn create_rejects_unknown_group() {
    let mut store = ItemStore::new(lanes());

    let err = store.create("9", 0, 1000).expect_err("unknown lane must fail");
    assert!(matches!(err, StoreError::UnknownGroup { group_id } if group_id == "9"));
    assert!(store.is_empty());
}

#[test]
fn update_applies_partial_patch() {
    let mut store = ItemStore::with_items(lanes(), vec![seed_item("3", "1", 1000, 3000)])
        .expect("seed should validate");

    let patch = ItemPatch {
        title: Some("retro".to_string()),
        ..ItemPatch::default()
    };
    let updated = store.update("3", &patch).expect("update should succeed");

    assert_eq!(updated.title, "retro");
    assert_eq!(updated.start_ms, 1000);
    assert_eq!(updated.end_ms, 3000);
    assert_eq!(updated.group_id, "1");
}

#[test]
fn update_rejecting_empty_interval_leaves_item_unchanged() {
    let mut store = ItemStore::with_items(lanes(), vec![seed_item("3", "1", 1000, 3000)])
        .expect("seed should validate");

    let patch = ItemPatch {
        start_ms: Some(3000),
        ..ItemPatch::default()
    };
    let err = store.update("3", &patch).expect_err("empty interval must fail");
    assert!(matches!(err, StoreError::EmptyInterval { .. }));

    let unchanged = store.get("3").expect("item should still exist");
    assert_eq!(unchanged.start_ms, 1000);
    assert_eq!(unchanged.end_ms, 3000);
}

#[test]
fn update_rejects_unknown_group() {
    let mut store = ItemStore::with_items(lanes(), vec![seed_item("3", "1", 1000, 3000)])
        .expect("seed should validate");

    let patch = ItemPatch {
        group_id: Some("9".to_string()),
        ..ItemPatch::default()
    };
    let err = store.update("3", &patch).expect_err("unknown lane must fail");
    assert!(matches!(err, StoreError::UnknownGroup { .. }));
    assert_eq!(store.get("3").expect("item should still exist").group_id, "1");
}

#[test]
fn update_unknown_item_errors() {
    let mut store = ItemStore::new(lanes());

    let err = store
        .update("42", &ItemPatch::default())
        .expect_err("missing item must fail");
    assert!(matches!(err, StoreError::UnknownItem { id } if id == "42"));
}

#[test]
fn delete_is_idempotent() {
    let mut store = ItemStore::with_items(lanes(), vec![seed_item("3", "1", 1000, 3000)])
        .expect("seed should validate");

    assert!(store.delete("3"));
    assert!(!store.delete("3"));
    assert!(store.is_empty());
}

#[test]
fn items_keep_insertion_order_across_updates() {
    let mut store = ItemStore::new(lanes());
    store.create("1", 0, 1000).expect("create should succeed");
    store.create("1", 0, 1000).expect("create should succeed");
    store.create("2", 0, 1000).expect("create should succeed");

    let patch = ItemPatch {
        title: Some("middle".to_string()),
        ..ItemPatch::default()
    };
    store.update("2", &patch).expect("update should succeed");

    let ids: Vec<&str> = store.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

struct SnapshotObserver {
    sizes: RefCell<Vec<usize>>,
}

impl StoreObserver for SnapshotObserver {
    fn items_changed(&self, items: &[Item]) {
        self.sizes.borrow_mut().push(items.len());
    }
}

#[test]
fn observers_get_a_snapshot_after_each_successful_mutation() {
    let observer = Arc::new(SnapshotObserver {
        sizes: RefCell::new(Vec::new()),
    });
    let mut store = ItemStore::new(lanes());
    store.subscribe(observer.clone());

    store.create("1", 0, 1000).expect("create should succeed");
    let patch = ItemPatch {
        start_ms: Some(5000),
        ..ItemPatch::default()
    };
    store
        .update("1", &patch)
        .expect_err("empty interval must fail");
    store.delete("1");
    store.delete("1");

    // One snapshot for the create, one for the delete; the rejected update
    // and the no-op delete notify nobody.
    assert_eq!(*observer.sizes.borrow(), vec![1, 0]);
}

#[test]
fn seeding_rejects_duplicate_ids_and_invalid_intervals() {
    let duplicate = ItemStore::with_items(
        lanes(),
        vec![seed_item("3", "1", 0, 1000), seed_item("3", "2", 0, 1000)],
    );
    assert!(matches!(duplicate, Err(StoreError::DuplicateId { id }) if id == "3"));

    let unknown_lane = ItemStore::with_items(lanes(), vec![seed_item("3", "9", 0, 1000)]);
    assert!(matches!(unknown_lane, Err(StoreError::UnknownGroup { .. })));
}
