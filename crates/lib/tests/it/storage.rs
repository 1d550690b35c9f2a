//! Persistence and corruption tolerance of the storage adapters

use std::sync::Arc;

use litelearn::{
    Catalog, Instance,
    storage::{self, FileStore, InMemory, Storage},
};

use super::helpers::*;

#[test]
fn corrupt_users_blob_loads_as_empty_registry() {
    let store = Arc::new(InMemory::new());
    store.set(storage::keys::USERS, "{not json").unwrap();

    let instance = Instance::open(store, Catalog::demo());
    assert_eq!(instance.user_count(), 0);
    // The instance remains fully usable
    instance.register("Alice", "alice@example.com", "x").unwrap();
    assert_eq!(instance.user_count(), 1);
}

#[test]
fn corrupt_session_blob_loads_as_no_session() {
    let store = Arc::new(InMemory::new());
    store.set(storage::keys::SESSION, "42").unwrap();

    let instance = Instance::open(store, Catalog::demo());
    assert!(instance.current_user().is_none());
}

#[test]
fn corrupt_theme_blob_reads_as_unset() {
    let (instance, store) = test_instance();
    store.set(storage::keys::THEME, "\"sepia\"").unwrap();
    assert!(instance.theme().is_none());
}

#[test]
fn wrong_shape_enrollments_blob_loads_as_empty() {
    let store = Arc::new(InMemory::new());
    store
        .set(storage::keys::ENROLLMENTS, r#"{"alice@example.com":"oops"}"#)
        .unwrap();

    let instance = Instance::open(store, Catalog::demo());
    assert!(!instance.is_enrolled("alice@example.com", HTML));
}

#[test]
fn session_pointing_at_missing_user_yields_no_current_user() {
    let store = Arc::new(InMemory::new());
    store
        .set(storage::keys::SESSION, r#"{"email":"ghost@example.com"}"#)
        .unwrap();

    let instance = Instance::open(store, Catalog::demo());
    assert!(instance.current_user().is_none());
}

#[test]
fn file_store_full_cycle() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = Arc::new(FileStore::open(dir.path()).unwrap());
        let instance = Instance::open(store, Catalog::demo());
        let email = register_alice(&instance);
        instance.enroll(&email, CSS).unwrap();
        instance.mark_all_lessons(&email, CSS).unwrap();
    }

    // A fresh process over the same directory sees everything
    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let instance = Instance::open(store, Catalog::demo());
    assert_eq!(instance.current_user().unwrap().name, "Alice");
    assert_eq!(instance.percent_complete("alice@example.com", CSS), 100);
}

#[test]
fn file_store_writes_one_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let instance = Instance::open(store, Catalog::demo());
    register_alice(&instance);

    assert!(dir.path().join("ll_users.json").exists());
    assert!(dir.path().join("ll_session.json").exists());
    assert!(!dir.path().join("ll_enrollments.json").exists());
}

#[test]
fn file_store_tolerates_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ll_users.json"), "<<garbage>>").unwrap();

    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let instance = Instance::open(store, Catalog::demo());
    assert_eq!(instance.user_count(), 0);
}
