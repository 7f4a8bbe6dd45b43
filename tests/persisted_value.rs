//! Persisted values over the shipped stores.

use pokeinfo::config::GreetingConfig;
use pokeinfo::storage::{FileStore, KeyValueStore, MemoryStore, PersistedValue, StoreError};
use pokeinfo::ui::Greeting;
use tempfile::TempDir;

#[test]
fn uses_stored_value_over_default() {
    let store = MemoryStore::with_entries([("name", "Ash")]);
    let value = PersistedValue::initialize(store, "name", "");
    assert_eq!(value.value(), "Ash");
}

#[test]
fn falls_back_to_default_without_writing_it() {
    let store = MemoryStore::new();
    let value = PersistedValue::initialize(store.clone(), "name", "Red");

    assert_eq!(value.value(), "Red");
    assert!(store.is_empty());
}

#[test]
fn every_set_writes_through() {
    let store = MemoryStore::new();
    let mut value = PersistedValue::initialize(store.clone(), "name", "");

    for name in ["A", "As", "Ash"] {
        value.set(name);
        assert_eq!(store.get("name").unwrap().as_deref(), Some(name));
    }
}

#[test]
fn value_survives_restart_via_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");

    {
        let mut value = PersistedValue::initialize(FileStore::open(&path), "name", "");
        value.set("Ash");
    }

    let value = PersistedValue::initialize(FileStore::open(&path), "name", "");
    assert_eq!(value.value(), "Ash");
}

#[test]
fn greeting_round_trip_across_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    let config = GreetingConfig::default();

    let first = Greeting::new(FileStore::open(&path), &config);
    assert_eq!(first.render(), "Please type your name");

    let mut second = Greeting::new(FileStore::open(&path), &config);
    second.handle_change("Misty");
    drop(second);

    let third = Greeting::new(FileStore::open(&path), &config);
    assert_eq!(third.render(), "Hello Misty");
}

#[test]
fn unreadable_store_degrades_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::open(&path);
    assert!(matches!(store.get("name"), Err(StoreError::Corrupt { .. })));

    let mut value = PersistedValue::initialize(store, "name", "Red");
    assert_eq!(value.value(), "Red");

    value.set("Blue");
    assert_eq!(value.value(), "Blue");
}
