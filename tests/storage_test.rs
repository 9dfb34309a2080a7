use taskpile::entities::{Item, ItemKind, ROOT_ID};
use taskpile::storage::{ItemStore, MemoryStore, SnapshotStore, StoreError};

fn task(title: &str, parent_id: i64, order: u64) -> Item {
    Item {
        title: title.to_string(),
        kind: ItemKind::Task,
        parent_id,
        order,
        ..Item::default()
    }
}

fn category(title: &str, order: u64) -> Item {
    Item {
        title: title.to_string(),
        kind: ItemKind::Category,
        parent_id: ROOT_ID,
        order,
        ..Item::default()
    }
}

/// Contract checks every store implementation has to pass.
fn check_store_contract(store: &mut impl ItemStore) {
    // Two root categories with one task under each
    let cat_a = store.save(&category("Home", 1)).unwrap();
    let cat_b = store.save(&category("Work", 2)).unwrap();
    assert!(cat_a > 0);
    assert!(cat_b > cat_a);
    store.save(&task("water plants", cat_a, 1)).unwrap();
    store.save(&task("file report", cat_b, 1)).unwrap();

    let titles = |store: &mut dyn ItemStore, parent: i64| -> Vec<String> {
        store
            .items_by_parent(parent)
            .unwrap()
            .into_iter()
            .map(|it| it.title)
            .collect()
    };
    assert_eq!(titles(store, ROOT_ID), ["Home", "Work"]);
    assert_eq!(titles(store, cat_a), ["water plants"]);
    assert_eq!(titles(store, cat_b), ["file report"]);

    // Renumbering makes room in one category without leaking into the
    // other
    let mut wedge = task("buy soil", cat_a, 1);
    wedge.id = store.save(&wedge).unwrap();
    store.increase_order_after(&wedge).unwrap();
    assert_eq!(titles(store, cat_a), ["buy soil", "water plants"]);
    assert_eq!(titles(store, cat_b), ["file report"]);

    // Re-saving refreshes the update stamp and keeps the creation stamp
    let mut renamed = store.item_by_id(wedge.id).unwrap();
    let created = renamed.created_at;
    let first_touch = renamed.updated_at;
    assert!(first_touch.is_some());
    std::thread::sleep(std::time::Duration::from_millis(10));
    renamed.title = "buy potting soil".to_string();
    assert_eq!(store.save(&renamed), Ok(wedge.id));
    let stored = store.item_by_id(wedge.id).unwrap();
    assert_eq!(stored.title, "buy potting soil");
    assert_eq!(stored.created_at, created);
    assert!(stored.updated_at.unwrap() > first_touch.unwrap());

    // Root resolves to the sentinel, absent IDs fail
    assert_eq!(store.item_by_id(ROOT_ID).unwrap(), Item::root());
    assert_eq!(store.item_by_id(9999), Err(StoreError::ItemNotFound(9999)));
}

#[test]
fn test_save_assigns_sequential_positive_ids() {
    let mut store = MemoryStore::new();

    let a = store.save(&task("a", ROOT_ID, 1)).unwrap();
    let b = store.save(&task("b", ROOT_ID, 2)).unwrap();
    let c = store.save(&task("c", ROOT_ID, 3)).unwrap();

    assert!(a > 0);
    assert_eq!(b, a + 1);
    assert_eq!(c, b + 1);
}

#[test]
fn test_save_stamps_timestamps_on_insert() {
    let mut store = MemoryStore::new();

    let id = store.save(&task("a", ROOT_ID, 1)).unwrap();
    let stored = store.item_by_id(id).unwrap();

    assert!(stored.created_at.is_some());
    assert!(stored.updated_at.is_some());
}

#[test]
fn test_save_update_preserves_created_at() {
    let mut store = MemoryStore::new();

    let id = store.save(&task("before", ROOT_ID, 1)).unwrap();
    let first = store.item_by_id(id).unwrap();

    // Saving back a copy with created_at wiped must not lose the stamp
    let mut changed = first.clone();
    changed.title = "after".to_string();
    changed.created_at = None;
    assert_eq!(store.save(&changed), Ok(id));

    let stored = store.item_by_id(id).unwrap();
    assert_eq!(stored.title, "after");
    assert_eq!(stored.created_at, first.created_at);
    assert!(stored.updated_at.is_some());
}

#[test]
fn test_save_unknown_id_fails() {
    let mut store = MemoryStore::new();

    let mut item = task("ghost", ROOT_ID, 1);
    item.id = 42;

    assert_eq!(store.save(&item), Err(StoreError::ItemNotFound(42)));
    assert!(store.is_empty());
}

#[test]
fn test_item_by_id_resolves_root_sentinel() {
    let store = MemoryStore::new();

    let root = store.item_by_id(ROOT_ID).unwrap();
    assert_eq!(root, Item::root());
    assert_eq!(root.id, ROOT_ID);
}

#[test]
fn test_item_by_id_missing() {
    let store = MemoryStore::new();
    assert_eq!(store.item_by_id(7), Err(StoreError::ItemNotFound(7)));
}

#[test]
fn test_stored_state_does_not_alias_caller_state() {
    let mut store = MemoryStore::new();

    let mut item = task("original", ROOT_ID, 1);
    let id = store.save(&item).unwrap();

    // Mutating the caller's copy after the save changes nothing inside
    item.title = "mutated".to_string();
    assert_eq!(store.item_by_id(id).unwrap().title, "original");

    // And mutating a read copy changes nothing either
    let mut read = store.item_by_id(id).unwrap();
    read.title = "mutated again".to_string();
    assert_eq!(store.item_by_id(id).unwrap().title, "original");
}

#[test]
fn test_items_by_parent_sorted_ascending() {
    let mut store = MemoryStore::new();

    store.save(&task("late", ROOT_ID, 5)).unwrap();
    store.save(&task("early", ROOT_ID, 1)).unwrap();
    store.save(&task("middle", ROOT_ID, 3)).unwrap();

    let titles: Vec<String> = store
        .items_by_parent(ROOT_ID)
        .unwrap()
        .into_iter()
        .map(|it| it.title)
        .collect();
    assert_eq!(titles, ["early", "middle", "late"]);
}

#[test]
fn test_items_by_parent_keeps_insertion_sequence_for_equal_orders() {
    let mut store = MemoryStore::new();

    store.save(&task("first", ROOT_ID, 2)).unwrap();
    store.save(&task("second", ROOT_ID, 2)).unwrap();

    let titles: Vec<String> = store
        .items_by_parent(ROOT_ID)
        .unwrap()
        .into_iter()
        .map(|it| it.title)
        .collect();
    assert_eq!(titles, ["first", "second"]);
}

#[test]
fn test_items_by_parent_scopes_to_parent() {
    let mut store = MemoryStore::new();

    let parent = store.save(&task("parent", ROOT_ID, 1)).unwrap();
    store.save(&task("child", parent, 1)).unwrap();

    assert_eq!(store.items_by_parent(parent).unwrap().len(), 1);
    assert_eq!(store.items_by_parent(ROOT_ID).unwrap().len(), 1);
    assert!(store.items_by_parent(999).unwrap().is_empty());
}

#[test]
fn test_increase_order_after_shifts_at_and_above() {
    let mut store = MemoryStore::new();

    store.save(&task("one", ROOT_ID, 1)).unwrap();
    store.save(&task("two", ROOT_ID, 2)).unwrap();
    store.save(&task("three", ROOT_ID, 3)).unwrap();

    let mut wedge = task("wedge", ROOT_ID, 2);
    wedge.id = store.save(&wedge).unwrap();
    store.increase_order_after(&wedge).unwrap();

    let rows = store.items_by_parent(ROOT_ID).unwrap();
    let pairs: Vec<(String, u64)> = rows.into_iter().map(|it| (it.title, it.order)).collect();
    assert_eq!(
        pairs,
        [
            ("one".to_string(), 1),
            ("wedge".to_string(), 2),
            ("two".to_string(), 3),
            ("three".to_string(), 4),
        ]
    );
}

#[test]
fn test_increase_order_after_ignores_other_parents_and_lower_orders() {
    let mut store = MemoryStore::new();

    let parent_a = store.save(&task("a", ROOT_ID, 1)).unwrap();
    let parent_b = store.save(&task("b", ROOT_ID, 2)).unwrap();
    store.save(&task("a low", parent_a, 1)).unwrap();
    store.save(&task("a high", parent_a, 5)).unwrap();
    store.save(&task("b peer", parent_b, 5)).unwrap();

    let mut reference = task("a new", parent_a, 5);
    reference.id = store.save(&reference).unwrap();
    store.increase_order_after(&reference).unwrap();

    let orders = |parent: i64| -> Vec<(String, u64)> {
        store
            .items_by_parent(parent)
            .unwrap()
            .into_iter()
            .map(|it| (it.title, it.order))
            .collect()
    };

    // Same parent: the lower sibling staying put, the tied one shifted,
    // the reference itself untouched
    assert_eq!(
        orders(parent_a),
        [
            ("a low".to_string(), 1),
            ("a new".to_string(), 5),
            ("a high".to_string(), 6),
        ]
    );
    // Another parent entirely untouched
    assert_eq!(orders(parent_b), [("b peer".to_string(), 5)]);
}

#[test]
fn test_snapshot_store_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");

    let first_id;
    {
        let mut store = SnapshotStore::open(&path).unwrap();
        first_id = store.save(&task("keep me", ROOT_ID, 1)).unwrap();
        store.save(&task("me too", ROOT_ID, 2)).unwrap();
    }

    let mut reopened = SnapshotStore::open(&path).unwrap();
    let titles: Vec<String> = reopened
        .items_by_parent(ROOT_ID)
        .unwrap()
        .into_iter()
        .map(|it| it.title)
        .collect();
    assert_eq!(titles, ["keep me", "me too"]);
    assert_eq!(reopened.item_by_id(first_id).unwrap().title, "keep me");

    // The ID sequence continues instead of restarting
    let next = reopened.save(&task("later", ROOT_ID, 3)).unwrap();
    assert!(next > first_id + 1);
}

#[test]
fn test_snapshot_store_opens_empty_for_missing_or_empty_file() {
    let dir = tempfile::tempdir().unwrap();

    let missing = SnapshotStore::open(dir.path().join("nowhere.json")).unwrap();
    assert!(missing.items_by_parent(ROOT_ID).unwrap().is_empty());

    let empty_path = dir.path().join("empty.json");
    std::fs::write(&empty_path, "").unwrap();
    let empty = SnapshotStore::open(&empty_path).unwrap();
    assert!(empty.items_by_parent(ROOT_ID).unwrap().is_empty());
}

#[test]
fn test_snapshot_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "these are not the items you are looking for").unwrap();

    match SnapshotStore::open(&path) {
        Err(StoreError::Snapshot { path: reported, .. }) => {
            assert!(reported.contains("broken.json"));
        }
        other => panic!("expected a snapshot error, got {other:?}"),
    }
}

#[test]
fn test_snapshot_store_writes_after_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");

    let mut store = SnapshotStore::open(&path).unwrap();
    let mut item = task("persisted", ROOT_ID, 1);
    item.id = store.save(&item).unwrap();

    let after_save = std::fs::read_to_string(&path).unwrap();
    assert!(after_save.contains("persisted"));

    store.save(&task("sibling", ROOT_ID, 1)).unwrap();
    store.increase_order_after(&item).unwrap();

    let after_shift = std::fs::read_to_string(&path).unwrap();
    assert!(after_shift.contains("sibling"));

    // The shifted order is what a reopen sees
    let reopened = SnapshotStore::open(&path).unwrap();
    let pairs: Vec<(String, u64)> = reopened
        .items_by_parent(ROOT_ID)
        .unwrap()
        .into_iter()
        .map(|it| (it.title, it.order))
        .collect();
    assert_eq!(
        pairs,
        [("persisted".to_string(), 1), ("sibling".to_string(), 2)]
    );
}

#[test]
fn test_memory_store_meets_the_contract() {
    check_store_contract(&mut MemoryStore::new());
}

#[test]
fn test_snapshot_store_meets_the_contract() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SnapshotStore::open(dir.path().join("items.json")).unwrap();
    check_store_contract(&mut store);
}
