use std::sync::Arc;

use litelearn::{Catalog, FixedClock, Instance, storage::InMemory};

/// Fixed timestamp the test clock starts at (2024-01-01 00:00:00 UTC).
pub const T0: u64 = 1704067200000;

/// Demo catalog course ids used throughout the suite.
pub const HTML: &str = "html101";
pub const CSS: &str = "css101";
pub const JS: &str = "js101";

/// Creates a fresh instance over in-memory storage with the demo catalog
/// and a fixed clock. Returns the storage handle too, for tests that need
/// to inspect raw blobs or reopen over the same store.
pub fn test_instance() -> (Instance, Arc<InMemory>) {
    let store = Arc::new(InMemory::new());
    let instance = Instance::open_with_clock(
        store.clone(),
        Catalog::demo(),
        Arc::new(FixedClock::new(T0)),
    );
    (instance, store)
}

/// Registers the standard test user and returns their email.
pub fn register_alice(instance: &Instance) -> String {
    instance
        .register("Alice", "alice@example.com", "hunter2")
        .expect("registration should succeed");
    "alice@example.com".to_string()
}
