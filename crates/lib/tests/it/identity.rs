//! Registration, authentication, and session behavior

use litelearn::Error;

use super::helpers::*;

#[test]
fn registration_grows_registry_and_sets_session() {
    let (instance, _store) = test_instance();
    assert_eq!(instance.user_count(), 0);
    assert!(instance.current_user().is_none());

    let user = instance
        .register("Alice", "alice@example.com", "hunter2")
        .unwrap();

    assert_eq!(instance.user_count(), 1);
    assert!(!user.id.is_empty());
    assert_eq!(user.email, "alice@example.com");
    let current = instance.current_user().expect("session should be set");
    assert_eq!(current.email, "alice@example.com");
}

#[test]
fn registration_normalizes_email() {
    let (instance, _store) = test_instance();
    let user = instance
        .register("Alice", "  Alice@Example.COM ", "hunter2")
        .unwrap();
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn duplicate_registration_is_rejected_case_insensitively() {
    let (instance, _store) = test_instance();
    register_alice(&instance);

    let err = instance
        .register("Other Alice", "ALICE@example.com", "different")
        .unwrap_err();
    assert!(err.is_conflict(), "expected conflict, got: {err}");

    // Registry unchanged: still one user, with the original name
    assert_eq!(instance.user_count(), 1);
    assert_eq!(instance.current_user().unwrap().name, "Alice");
}

#[test]
fn distinct_emails_each_register() {
    let (instance, _store) = test_instance();
    instance.register("Alice", "alice@example.com", "a").unwrap();
    instance.register("Bob", "bob@example.com", "b").unwrap();
    instance.register("Carol", "carol@example.com", "c").unwrap();
    assert_eq!(instance.user_count(), 3);
    // Registration establishes a session for the latest email
    assert_eq!(instance.current_user().unwrap().email, "carol@example.com");
}

#[test]
fn authenticate_success_sets_session() {
    let (instance, _store) = test_instance();
    register_alice(&instance);
    instance.logout().unwrap();
    assert!(instance.current_user().is_none());

    let user = instance.authenticate("Alice@example.com", "hunter2").unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(instance.current_user().unwrap().email, "alice@example.com");
}

#[test]
fn authenticate_wrong_password_fails_and_preserves_session() {
    let (instance, _store) = test_instance();
    register_alice(&instance);

    let err = instance
        .authenticate("alice@example.com", "wrong")
        .unwrap_err();
    assert!(err.is_authentication_error());
    // The existing session (from registration) is untouched
    assert_eq!(instance.current_user().unwrap().email, "alice@example.com");
}

#[test]
fn authenticate_unknown_email_fails() {
    let (instance, _store) = test_instance();
    let err = instance
        .authenticate("nobody@example.com", "whatever")
        .unwrap_err();
    assert!(matches!(err, Error::Identity(_)));
    assert!(err.is_authentication_error());
    assert!(instance.current_user().is_none());
}

#[test]
fn login_overwrites_prior_session() {
    let (instance, _store) = test_instance();
    instance.register("Alice", "alice@example.com", "a").unwrap();
    instance.register("Bob", "bob@example.com", "b").unwrap();

    instance.authenticate("alice@example.com", "a").unwrap();
    assert_eq!(instance.current_user().unwrap().email, "alice@example.com");
}

#[test]
fn logout_clears_session() {
    let (instance, _store) = test_instance();
    register_alice(&instance);
    instance.logout().unwrap();
    assert!(instance.current_user().is_none());
    // Logging out twice is harmless
    instance.logout().unwrap();
    assert!(instance.current_user().is_none());
}

#[test]
fn session_survives_reopen() {
    let (instance, store) = test_instance();
    register_alice(&instance);
    drop(instance);

    let reopened = litelearn::Instance::open(store, litelearn::Catalog::demo());
    assert_eq!(reopened.current_user().unwrap().email, "alice@example.com");
}
