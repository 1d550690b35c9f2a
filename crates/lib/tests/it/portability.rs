//! Export, import validation, and the full wipe

use litelearn::{
    Catalog, Instance, Theme,
    storage::{self, Storage},
};

use super::helpers::*;

#[test]
fn export_import_round_trip() {
    let (source, _store) = test_instance();
    let email = register_alice(&source);
    source.enroll(&email, HTML).unwrap();
    source.set_lesson_completion(&email, HTML, 0, true).unwrap();

    let json = source.export_json().unwrap();

    let (target, _store) = test_instance();
    target.import_json(&json).unwrap();

    assert_eq!(target.user_count(), 1);
    assert_eq!(target.current_user().unwrap().email, email);
    assert_eq!(target.percent_complete(&email, HTML), 17);
    assert_eq!(target.export_data(), source.export_data());
}

#[test]
fn import_replaces_existing_state() {
    let (source, _store) = test_instance();
    register_alice(&source);
    let json = source.export_json().unwrap();

    let (target, _store) = test_instance();
    target.register("Bob", "bob@example.com", "b").unwrap();
    target.enroll("bob@example.com", JS).unwrap();

    target.import_json(&json).unwrap();
    assert_eq!(target.user_count(), 1);
    assert!(target.account_summary("bob@example.com").is_none());
    assert!(!target.is_enrolled("bob@example.com", JS));
}

#[test]
fn import_without_session_clears_it() {
    let (target, _store) = test_instance();
    register_alice(&target);

    target
        .import_json(r#"{"users":{},"enrollments":{}}"#)
        .unwrap();
    assert!(target.current_user().is_none());
    assert_eq!(target.user_count(), 0);
}

#[test]
fn import_missing_enrollments_fails_and_leaves_state_untouched() {
    let (instance, _store) = test_instance();
    let email = register_alice(&instance);
    instance.enroll(&email, HTML).unwrap();

    let err = instance.import_json(r#"{"users":{}}"#).unwrap_err();
    assert!(err.is_validation_error(), "expected invalid format: {err}");

    // Nothing was replaced
    assert_eq!(instance.user_count(), 1);
    assert!(instance.is_enrolled(&email, HTML));
    assert_eq!(instance.current_user().unwrap().email, email);
}

#[test]
fn import_missing_users_fails() {
    let (instance, _store) = test_instance();
    let err = instance.import_json(r#"{"enrollments":{}}"#).unwrap_err();
    assert!(err.is_validation_error());
}

#[test]
fn import_rejects_non_json() {
    let (instance, _store) = test_instance();
    let err = instance.import_json("definitely not json").unwrap_err();
    assert!(err.is_validation_error());
}

#[test]
fn wipe_clears_all_four_keys_and_registries() {
    let (instance, store) = test_instance();
    let email = register_alice(&instance);
    instance.enroll(&email, HTML).unwrap();
    instance.set_theme(Theme::Dark).unwrap();

    // All four keys hold blobs before the wipe
    for key in storage::keys::ALL {
        assert!(store.get(key).unwrap().is_some(), "missing blob under {key}");
    }

    instance.wipe().unwrap();

    for key in storage::keys::ALL {
        assert!(store.get(key).unwrap().is_none(), "blob survived under {key}");
    }
    assert!(instance.current_user().is_none());
    assert_eq!(instance.user_count(), 0);
    assert!(!instance.is_enrolled(&email, HTML));
    assert!(instance.theme().is_none());
}

#[test]
fn theme_round_trip() {
    let (instance, store) = test_instance();
    assert!(instance.theme().is_none());

    instance.set_theme(Theme::Dark).unwrap();
    assert_eq!(instance.theme(), Some(Theme::Dark));
    instance.set_theme(Theme::Light).unwrap();
    assert_eq!(instance.theme(), Some(Theme::Light));

    // Theme survives reopen
    drop(instance);
    let reopened = Instance::open(store, Catalog::demo());
    assert_eq!(reopened.theme(), Some(Theme::Light));
}
