use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use prism_collection::{CollectionConfig, CollectionItem, CollectionStore};
use prism_core::{FileStorage, MemoryStorage, Storage};

const KEY: &str = "prism-collection";

fn ticking_clock() -> impl Fn() -> u64 {
    let now = Cell::new(100);
    move || {
        now.set(now.get() + 1);
        now.get()
    }
}

#[test]
fn add_and_remove_are_idempotent() {
    let store = CollectionStore::with_defaults(MemoryStorage::new());

    store.add("button");
    store.add("button");
    assert_eq!(store.count(), 1);

    store.remove("button");
    assert_eq!(store.count(), 0);
    store.remove("button");
    assert_eq!(store.count(), 0);
}

#[test]
fn list_keeps_insertion_order() {
    let store = CollectionStore::with_defaults(MemoryStorage::new()).with_clock(ticking_clock());
    for id in ["tabs", "card", "toggle"] {
        store.add(id);
    }
    store.add("card");

    assert_eq!(
        store.list(),
        vec![
            CollectionItem::new("tabs", 101),
            CollectionItem::new("card", 102),
            CollectionItem::new("toggle", 103),
        ]
    );
    assert!(store.contains("card"));
    assert!(!store.contains("slider"));
}

#[test]
fn persists_as_json_array_with_added_at() {
    let storage = MemoryStorage::new();
    let store = CollectionStore::with_defaults(&storage).with_clock(|| 1_718_000_000_000);
    store.add("button");

    assert_eq!(
        storage.get_item(KEY).unwrap().as_deref(),
        Some(r#"[{"id":"button","addedAt":1718000000000}]"#)
    );

    store.clear();
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn state_survives_a_new_store() {
    let storage = MemoryStorage::new();
    {
        let store = CollectionStore::with_defaults(&storage).with_clock(ticking_clock());
        store.add("input");
        store.add("slider");
        store.remove("input");
    }

    let store = CollectionStore::with_defaults(&storage);
    assert_eq!(store.list(), vec![CollectionItem::new("slider", 102)]);
}

#[test]
fn malformed_json_loads_as_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(KEY, "[{\"id\": \"button\"").unwrap();

    let store = CollectionStore::with_defaults(&storage);
    assert_eq!(store.count(), 0);

    // The next write replaces the malformed value.
    store.add("card");
    let reloaded = CollectionStore::with_defaults(&storage);
    assert!(reloaded.contains("card"));
}

#[test]
fn unavailable_storage_never_panics() {
    let store = CollectionStore::with_defaults(MemoryStorage::unavailable());
    assert_eq!(store.count(), 0);

    assert!(store.add("button"));
    assert!(store.toggle("card"));
    assert_eq!(store.count(), 2);
    store.clear();
    assert_eq!(store.count(), 0);
}

#[test]
fn toggle_flips_membership() {
    let store = CollectionStore::with_defaults(MemoryStorage::new());
    assert!(store.toggle("tabs"));
    assert!(store.contains("tabs"));
    assert!(!store.toggle("tabs"));
    assert!(!store.contains("tabs"));
}

#[test]
fn subscribers_are_notified_once_per_mutation() {
    let store = CollectionStore::with_defaults(MemoryStorage::new());
    let hits = Rc::new(Cell::new(0));

    let counter = hits.clone();
    let id = store.subscribe(move || counter.set(counter.get() + 1));

    store.add("button");
    store.add("button");
    store.remove("missing");
    store.remove("button");
    store.clear();
    assert_eq!(hits.get(), 3);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.add("card");
    assert_eq!(hits.get(), 3);
}

#[test]
fn every_subscriber_hears_each_change() {
    let store = CollectionStore::with_defaults(MemoryStorage::new());
    let badge = Rc::new(Cell::new(0));
    let page = Rc::new(Cell::new(0));

    let b = badge.clone();
    store.subscribe(move || b.set(b.get() + 1));
    let p = page.clone();
    store.subscribe(move || p.set(p.get() + 1));

    store.add("slider");
    assert_eq!((badge.get(), page.get()), (1, 1));
}

#[test]
fn subscribers_re_query_the_store() {
    let store = Rc::new(CollectionStore::with_defaults(MemoryStorage::new()));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let weak = Rc::downgrade(&store);
    let log = seen.clone();
    store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            let ids: Vec<String> = store.list().into_iter().map(|item| item.id).collect();
            log.borrow_mut().push(ids);
        }
    });

    store.add("button");
    store.add("card");
    store.remove("button");

    assert_eq!(
        *seen.borrow(),
        vec![
            vec!["button".to_string()],
            vec!["button".to_string(), "card".to_string()],
            vec!["card".to_string()],
        ]
    );
}

#[test]
fn subscriber_may_mutate_the_store() {
    let store = Rc::new(CollectionStore::with_defaults(MemoryStorage::new()));

    let weak = Rc::downgrade(&store);
    store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            // Saving anything also saves its companion, once.
            if store.contains("input") {
                store.add("label");
            }
        }
    });

    store.add("input");
    assert_eq!(store.count(), 2);
}

#[test]
fn reload_picks_up_external_writes() {
    let storage = MemoryStorage::new();
    let store = CollectionStore::with_defaults(&storage);
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    store.subscribe(move || counter.set(counter.get() + 1));

    storage
        .set_item(KEY, r#"[{"id":"tabs","addedAt":5}]"#)
        .unwrap();
    assert_eq!(store.count(), 0);

    store.reload();
    assert_eq!(store.list(), vec![CollectionItem::new("tabs", 5)]);
    assert_eq!(hits.get(), 1);

    store.reload();
    assert_eq!(hits.get(), 1);
}

#[test]
fn reload_during_outage_keeps_session_items() {
    let storage = MemoryStorage::new();
    let store = CollectionStore::with_defaults(&storage).with_clock(ticking_clock());
    store.add("a");
    store.add("b");

    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    store.subscribe(move || counter.set(counter.get() + 1));

    storage.set_available(false);
    store.reload();
    assert_eq!(store.count(), 2);
    assert_eq!(hits.get(), 0);

    storage.set_available(true);
    store.add("c");

    let reopened = CollectionStore::with_defaults(&storage);
    let ids: Vec<String> = reopened.list().into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn removing_an_absent_id_neither_persists_nor_notifies() {
    let storage = MemoryStorage::new();
    let store = CollectionStore::with_defaults(&storage);
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    store.subscribe(move || counter.set(counter.get() + 1));

    assert!(!store.remove("button"));
    assert_eq!(storage.get_item(KEY).unwrap(), None);
    assert_eq!(hits.get(), 0);

    store.clear();
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(hits.get(), 1);
}

#[test]
fn custom_key_keeps_theme_key_untouched() {
    let storage = MemoryStorage::new();
    storage.set_item("prism-theme", "neo").unwrap();

    let config = CollectionConfig {
        storage_key: "saved-components".to_string(),
    };
    let store = CollectionStore::new(config, &storage);
    store.add("card");
    store.clear();

    assert_eq!(storage.get_item("prism-theme").unwrap().as_deref(), Some("neo"));
    assert_eq!(storage.get_item(KEY).unwrap(), None);
    assert_eq!(
        storage.get_item("saved-components").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let store = CollectionStore::with_defaults(FileStorage::new(&path)).with_clock(|| 7);
    store.add("button");
    store.add("toggle");
    drop(store);

    let store = CollectionStore::with_defaults(FileStorage::new(&path));
    assert_eq!(
        store.list(),
        vec![CollectionItem::new("button", 7), CollectionItem::new("toggle", 7)]
    );
}
