use super::*;

fn user(role: &str) -> User {
    User {
        id: 7,
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role: role.to_owned(),
    }
}

// =============================================================
// Set / read / clear round trip
// =============================================================

#[test]
fn set_session_then_read_back() {
    let store = SessionStore::in_memory();
    store.set_session("tok-1", &user("user"));

    assert_eq!(store.token().as_deref(), Some("tok-1"));
    let u = store.user().expect("stored user");
    assert_eq!(u.email, "ada@example.com");
    assert_eq!(u.role, "user");
}

#[test]
fn last_set_session_wins() {
    let store = SessionStore::in_memory();
    store.set_session("tok-1", &user("user"));
    store.set_session("tok-2", &user("admin"));

    assert_eq!(store.token().as_deref(), Some("tok-2"));
    assert_eq!(store.user().map(|u| u.role), Some("admin".to_owned()));
}

#[test]
fn clear_removes_both_halves() {
    let store = SessionStore::in_memory();
    store.set_session("tok-1", &user("user"));
    store.clear();

    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
}

// =============================================================
// Corrupted storage recovers as "no session"
// =============================================================

#[test]
fn non_json_user_reads_as_absent() {
    let store = SessionStore::in_memory();
    store.backend.set("verdictvault_user", "{not json");

    assert!(store.user().is_none());
}

#[test]
fn schema_mismatched_user_reads_as_absent() {
    let store = SessionStore::in_memory();
    store.backend.set("verdictvault_user", r#"{"id":"not-a-number"}"#);

    assert!(store.user().is_none());
    assert!(!store.is_admin());
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn has_role_requires_exact_match() {
    let store = SessionStore::in_memory();
    store.set_session("tok-1", &user("admin"));

    assert!(store.has_role("admin"));
    assert!(store.is_admin());
    assert!(!store.has_role("user"));
}

#[test]
fn has_role_without_user_is_false() {
    let store = SessionStore::in_memory();
    assert!(!store.has_role("admin"));
}

// =============================================================
// Forced sign-out
// =============================================================

#[test]
fn expire_clears_session_and_targets_login() {
    let store = SessionStore::in_memory();
    store.set_session("tok-1", &user("user"));

    let target = store.expire();

    assert_eq!(target, "/login");
    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
}
