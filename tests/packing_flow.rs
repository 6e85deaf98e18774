use packlist::storage::{FileStorage, MemoryStorage, PersistenceAdapter};
use packlist::store::{Confirmation, ListStore, PackingStats, SortOrder};
use packlist::types::config::{PersistPolicy, StoreConfig};

fn descriptions(items: &[&packlist::types::item::Item]) -> Vec<String> {
    items.iter().map(|item| item.description.clone()).collect()
}

#[test]
fn test_trip_scenario() {
    let mut store = ListStore::initialize(MemoryStorage::new(), StoreConfig::default());

    let passport = store.add_item("Passport", 1).unwrap();
    let charger = store.add_item("Charger", 2).unwrap();
    assert_eq!(store.items(), &[charger.clone(), passport.clone()]);

    let by_description = store.sorted_view(SortOrder::Description);
    assert_eq!(descriptions(&by_description), vec!["Charger", "Passport"]);

    store.toggle_packed(passport.id);
    assert_eq!(store.stats().counts(), Some((2, 1, 50)));

    let by_packed = store.sorted_view(SortOrder::Packed);
    assert_eq!(descriptions(&by_packed), vec!["Charger", "Passport"]);

    assert_eq!(store.clear_all(Confirmation::Confirmed), 2);
    assert!(store.items().is_empty());
    assert_eq!(store.stats(), PackingStats::Empty);
}

#[test]
fn test_reload_reproduces_list() {
    let dir = tempfile::tempdir().unwrap();

    let saved = {
        let mut store = ListStore::initialize(FileStorage::new(dir.path()), StoreConfig::default());
        store.add_item("Passport", 1).unwrap();
        let charger = store.add_item("Charger", 2).unwrap();
        store.add_item("Sunscreen", 20).unwrap();
        store.toggle_packed(charger.id);
        store.items().to_vec()
    };

    let reloaded = ListStore::initialize(FileStorage::new(dir.path()), StoreConfig::default());
    assert_eq!(reloaded.items(), saved.as_slice());
}

#[test]
fn test_reload_after_clear_is_empty() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ListStore::initialize(FileStorage::new(dir.path()), StoreConfig::default());
    store.add_item("Passport", 1).unwrap();
    store.clear_all(true);

    let reloaded = ListStore::initialize(FileStorage::new(dir.path()), StoreConfig::default());
    assert!(reloaded.is_empty());
}

#[test]
fn test_reload_after_clear_with_non_empty_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        persist_policy: PersistPolicy::NonEmptyOnly,
        ..StoreConfig::default()
    };

    let mut store = ListStore::initialize(FileStorage::new(dir.path()), config.clone());
    store.add_item("Passport", 1).unwrap();
    store.clear_all(true);
    assert!(store.is_empty());

    let reloaded = ListStore::initialize(FileStorage::new(dir.path()), config);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.save("items", "[{\"id\": \"oops\"").unwrap();

    let mut store = ListStore::initialize(storage, StoreConfig::default());
    assert!(store.is_empty());

    // The next change overwrites the corrupt file
    store.add_item("Passport", 1).unwrap();
    let reloaded = ListStore::initialize(FileStorage::new(dir.path()), StoreConfig::default());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_reads_list_written_by_browser_version() {
    let blob = r#"[{"description":"Charger","quantity":2,"packed":false,"id":1700000000500},
                   {"description":"Passport","quantity":1,"packed":true,"id":1700000000000}]"#;
    let storage = MemoryStorage::new().with_entry("items", blob);

    let store = ListStore::initialize(storage, StoreConfig::default());
    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0].description, "Charger");
    assert!(store.items()[1].packed);
    assert_eq!(store.stats().counts(), Some((2, 1, 50)));
}
